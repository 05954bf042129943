use crate::model::{Question, QuestionField};

/// Result of a completeness check. `error` is shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Completeness {
    pub is_complete: bool,
    pub error: String,
}

impl Completeness {
    #[must_use]
    pub fn complete() -> Self {
        Self {
            is_complete: true,
            error: String::new(),
        }
    }

    #[must_use]
    pub fn incomplete(error: impl Into<String>) -> Self {
        Self {
            is_complete: false,
            error: error.into(),
        }
    }
}

/// Decides whether a draft is ready to be submitted.
pub trait CompletenessCheck {
    fn check(&self, question: &Question) -> Completeness;
}

impl<F> CompletenessCheck for F
where
    F: Fn(&Question) -> Completeness,
{
    fn check(&self, question: &Question) -> Completeness {
        self(question)
    }
}

/// Every field filled in and at least one subcategory selected, with no
/// blank slots left over.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredFields;

impl CompletenessCheck for RequiredFields {
    fn check(&self, question: &Question) -> Completeness {
        for field in QuestionField::ALL {
            if question.text(field).trim().is_empty() {
                return Completeness::incomplete(format!("{} is required", field.label()));
            }
        }
        if question.question_type.is_none() {
            return Completeness::incomplete("Type is required");
        }
        if question.class.is_none() {
            return Completeness::incomplete("Class is required");
        }
        if question.level.is_none() {
            return Completeness::incomplete("Level is required");
        }
        if question.category.trim().is_empty() {
            return Completeness::incomplete("Category is required");
        }
        if question.selected_subcategories().next().is_none() {
            return Completeness::incomplete("At least one subcategory is required");
        }
        if let Some(index) = question.subcategory.iter().position(String::is_empty) {
            return Completeness::incomplete(format!("Subcategory {} is empty", index + 1));
        }
        Completeness::complete()
    }
}

#[must_use]
pub fn is_question_complete(question: &Question) -> Completeness {
    RequiredFields.check(question)
}
