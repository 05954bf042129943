mod options;
mod question;

pub use options::{ClassLevel, Level, QuestionType, UnknownOption};
pub use question::{Question, QuestionField};
