mod actions;
mod components;
mod state;
mod utils;
mod view;

#[cfg(test)]
mod form_smoke;
#[cfg(test)]
mod intent_smoke;

pub use components::{FormInput, LabeledSelect};
pub use view::{QuestionForm, QuestionFormProps};
