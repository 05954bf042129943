mod question_form;

pub use question_form::{FormInput, LabeledSelect, QuestionForm, QuestionFormProps};
