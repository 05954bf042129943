//! Whole-record edits.
//!
//! Each function takes the current draft by reference and returns the next
//! draft; callers hand the result to whatever owns the record.

use thiserror::Error;

use crate::category::CategoryMap;
use crate::model::{ClassLevel, Level, Question, QuestionField, QuestionType};
use crate::subcategory::SubcategoryOptions;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EditError {
    #[error("no further subcategory can be added")]
    NoSlotAvailable,
    #[error("subcategory slot {index} does not exist ({len} slots)")]
    SlotOutOfRange { index: usize, len: usize },
    #[error("{value:?} is not a subcategory of {category:?}")]
    SubcategoryNotAllowed { category: String, value: String },
    #[error("{value:?} is already selected in another slot")]
    DuplicateSubcategory { value: String },
}

#[must_use]
pub fn with_text(draft: &Question, field: QuestionField, value: impl Into<String>) -> Question {
    let mut next = draft.clone();
    *next.text_mut(field) = value.into();
    next
}

#[must_use]
pub fn with_level(draft: &Question, level: Option<Level>) -> Question {
    Question {
        level,
        ..draft.clone()
    }
}

#[must_use]
pub fn with_question_type(draft: &Question, question_type: Option<QuestionType>) -> Question {
    Question {
        question_type,
        ..draft.clone()
    }
}

#[must_use]
pub fn with_class(draft: &Question, class: Option<ClassLevel>) -> Question {
    Question {
        class,
        ..draft.clone()
    }
}

/// Selecting a category always discards earlier subcategory choices, even
/// when the same category is picked again.
#[must_use]
pub fn with_category(draft: &Question, category: impl Into<String>) -> Question {
    Question {
        category: category.into(),
        subcategory: vec![String::new()],
        ..draft.clone()
    }
}

/// Append one blank subcategory slot.
///
/// # Errors
///
/// Returns `EditError::NoSlotAvailable` when nothing is left to pick or every
/// available subcategory already has a slot.
pub fn with_added_slot(categories: &CategoryMap, draft: &Question) -> Result<Question, EditError> {
    if !SubcategoryOptions::derive(categories, draft).can_add_slot() {
        return Err(EditError::NoSlotAvailable);
    }
    let mut next = draft.clone();
    next.subcategory.push(String::new());
    Ok(next)
}

/// Remove the slot at `index`, keeping the order of the rest.
///
/// # Errors
///
/// Returns `EditError::SlotOutOfRange` for an index past the last slot.
pub fn without_slot(draft: &Question, index: usize) -> Result<Question, EditError> {
    check_index(draft, index)?;
    let mut next = draft.clone();
    next.subcategory.remove(index);
    Ok(next)
}

/// Put `value` into slot `index`. An empty value unselects the slot.
///
/// # Errors
///
/// Returns `EditError::SlotOutOfRange`, `EditError::SubcategoryNotAllowed`
/// when the value is not mapped under the draft's category, or
/// `EditError::DuplicateSubcategory` when another slot already holds it.
pub fn with_subcategory(
    categories: &CategoryMap,
    draft: &Question,
    index: usize,
    value: impl Into<String>,
) -> Result<Question, EditError> {
    check_index(draft, index)?;
    let value = value.into();
    if !value.is_empty() {
        let mapped = categories
            .subcategories(&draft.category)
            .is_some_and(|subs| subs.contains(&value));
        if !mapped {
            return Err(EditError::SubcategoryNotAllowed {
                category: draft.category.clone(),
                value,
            });
        }
        let taken = draft
            .subcategory
            .iter()
            .enumerate()
            .any(|(i, existing)| i != index && *existing == value);
        if taken {
            return Err(EditError::DuplicateSubcategory { value });
        }
    }
    let mut next = draft.clone();
    next.subcategory[index] = value;
    Ok(next)
}

/// The blank draft.
#[must_use]
pub fn cleared() -> Question {
    Question::default()
}

fn check_index(draft: &Question, index: usize) -> Result<(), EditError> {
    if index < draft.subcategory.len() {
        Ok(())
    } else {
        Err(EditError::SlotOutOfRange {
            index,
            len: draft.subcategory.len(),
        })
    }
}
