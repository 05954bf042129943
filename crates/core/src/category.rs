use std::collections::{BTreeMap, HashSet};
use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shown as the only option when the current category has no mapping.
pub const PLACEHOLDER_SUBCATEGORY: &str = "Select a Subcategory";

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CategoryMapError {
    #[error("category mapping is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("category name cannot be empty")]
    EmptyCategory,
    #[error("category {category:?} has an empty subcategory name")]
    EmptySubcategory { category: String },
    #[error("category {category:?} lists {subcategory:?} more than once")]
    DuplicateSubcategory {
        category: String,
        subcategory: String,
    },
    #[error("category {category:?} uses the reserved name \"Select a Subcategory\"")]
    ReservedSubcategory { category: String },
}

/// Read-only lookup from category name to its allowed subcategories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct CategoryMap(BTreeMap<String, Vec<String>>);

impl TryFrom<BTreeMap<String, Vec<String>>> for CategoryMap {
    type Error = CategoryMapError;

    fn try_from(map: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        Self::validated(map)
    }
}

impl From<CategoryMap> for BTreeMap<String, Vec<String>> {
    fn from(map: CategoryMap) -> Self {
        map.0
    }
}

impl CategoryMap {
    /// Build a validated mapping.
    ///
    /// # Errors
    ///
    /// Returns `CategoryMapError` for empty names, duplicate subcategories, or
    /// a subcategory named like the placeholder.
    pub fn new<C, S>(entries: impl IntoIterator<Item = (C, Vec<S>)>) -> Result<Self, CategoryMapError>
    where
        C: Into<String>,
        S: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(category, subs)| (category.into(), subs.into_iter().map(Into::into).collect()))
            .collect();
        Self::validated(map)
    }

    /// Parse a JSON object of `category -> [subcategory, ...]`.
    ///
    /// # Errors
    ///
    /// Returns `CategoryMapError::Json` for malformed input and the
    /// validation errors of [`CategoryMap::new`].
    pub fn from_json_str(raw: &str) -> Result<Self, CategoryMapError> {
        let map: BTreeMap<String, Vec<String>> = serde_json::from_str(raw)?;
        Self::try_from(map)
    }

    /// Same as [`CategoryMap::from_json_str`], reading from any source.
    ///
    /// # Errors
    ///
    /// See [`CategoryMap::from_json_str`].
    pub fn from_json_reader(reader: impl Read) -> Result<Self, CategoryMapError> {
        let map: BTreeMap<String, Vec<String>> = serde_json::from_reader(reader)?;
        Self::validated(map)
    }

    fn validated(map: BTreeMap<String, Vec<String>>) -> Result<Self, CategoryMapError> {
        for (category, subs) in &map {
            if category.trim().is_empty() {
                return Err(CategoryMapError::EmptyCategory);
            }
            let mut seen = HashSet::new();
            for sub in subs {
                if sub.is_empty() {
                    return Err(CategoryMapError::EmptySubcategory {
                        category: category.clone(),
                    });
                }
                if sub == PLACEHOLDER_SUBCATEGORY {
                    return Err(CategoryMapError::ReservedSubcategory {
                        category: category.clone(),
                    });
                }
                if !seen.insert(sub.as_str()) {
                    return Err(CategoryMapError::DuplicateSubcategory {
                        category: category.clone(),
                        subcategory: sub.clone(),
                    });
                }
            }
        }
        Ok(Self(map))
    }

    /// Category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    #[must_use]
    pub fn subcategories(&self, category: &str) -> Option<&[String]> {
        self.0.get(category).map(Vec::as_slice)
    }

    #[must_use]
    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
