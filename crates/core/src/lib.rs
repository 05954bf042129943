#![forbid(unsafe_code)]

pub mod category;
pub mod edit;
pub mod error;
pub mod model;
pub mod subcategory;
pub mod validation;

pub use category::{CategoryMap, CategoryMapError, PLACEHOLDER_SUBCATEGORY};
pub use edit::EditError;
pub use error::Error;
pub use model::{ClassLevel, Level, Question, QuestionField, QuestionType, UnknownOption};
pub use subcategory::{SubcategoryOptions, allowed_options, available_subcategories, slot_options};
pub use validation::{Completeness, CompletenessCheck, RequiredFields, is_question_complete};
