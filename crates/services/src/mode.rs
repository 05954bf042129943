use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// What the draft is for. Only labels and validation strictness differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EditorMode {
    #[default]
    Create,
    Edit,
    Filter,
}

impl EditorMode {
    /// Filtering wins over editing when both flags are set.
    #[must_use]
    pub fn from_flags(editing: bool, filtering: bool) -> Self {
        match (editing, filtering) {
            (_, true) => Self::Filter,
            (true, false) => Self::Edit,
            (false, false) => Self::Create,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Create => "Add Question",
            Self::Edit => "Edit Question",
            Self::Filter => "Filter Question",
        }
    }

    #[must_use]
    pub fn success_message(self) -> String {
        let verb = match self {
            Self::Create => "added",
            Self::Edit => "edited",
            Self::Filter => "filtered",
        };
        format!("Question {verb} successfully")
    }

    #[must_use]
    pub fn validates(self) -> bool {
        self != Self::Filter
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Create => "add",
            Self::Edit => "edit",
            Self::Filter => "filter",
        })
    }
}

impl FromStr for EditorMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "add" | "create" => Ok(Self::Create),
            "edit" => Ok(Self::Edit),
            "filter" => Ok(Self::Filter),
            _ => Err(ConfigError::UnknownMode { raw: s.to_string() }),
        }
    }
}
