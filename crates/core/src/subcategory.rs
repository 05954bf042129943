//! Subcategory choices derived from the category mapping and the current draft.
//!
//! Everything here is recomputed on each call; nothing is cached between
//! edits.

use crate::category::{CategoryMap, PLACEHOLDER_SUBCATEGORY};
use crate::model::Question;

/// Subcategories of the draft's category, or the lone placeholder when the
/// category has no mapping.
#[must_use]
pub fn available_subcategories(categories: &CategoryMap, draft: &Question) -> Vec<String> {
    categories.subcategories(&draft.category).map_or_else(
        || vec![PLACEHOLDER_SUBCATEGORY.to_string()],
        <[String]>::to_vec,
    )
}

/// Available subcategories not already present in any slot of the draft.
#[must_use]
pub fn allowed_options(categories: &CategoryMap, draft: &Question) -> Vec<String> {
    available_subcategories(categories, draft)
        .into_iter()
        .filter(|sub| !draft.subcategory.contains(sub))
        .collect()
}

/// Options for one slot's select: the allowed options plus whatever the slot
/// currently holds, in mapping order.
#[must_use]
pub fn slot_options(categories: &CategoryMap, draft: &Question, index: usize) -> Vec<String> {
    let own = draft.subcategory.get(index).map(String::as_str);
    available_subcategories(categories, draft)
        .into_iter()
        .filter(|sub| Some(sub.as_str()) == own || !draft.subcategory.contains(sub))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubcategoryOptions {
    pub available: Vec<String>,
    pub allowed: Vec<String>,
    pub slot_count: usize,
}

impl SubcategoryOptions {
    #[must_use]
    pub fn derive(categories: &CategoryMap, draft: &Question) -> Self {
        Self {
            available: available_subcategories(categories, draft),
            allowed: allowed_options(categories, draft),
            slot_count: draft.subcategory.len(),
        }
    }

    /// Whether another slot may be appended.
    #[must_use]
    pub fn can_add_slot(&self) -> bool {
        !self.allowed.is_empty() && self.slot_count != self.available.len()
    }

    /// True when the draft's category is mapped, so slots hold real values.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        self.available.first().map(String::as_str) != Some(PLACEHOLDER_SUBCATEGORY)
    }
}
