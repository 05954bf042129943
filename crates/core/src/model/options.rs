use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a label does not name any option of a closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownOption {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! closed_options {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Human-readable label shown in selects.
            #[must_use]
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownOption;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| UnknownOption {
                        kind: $kind,
                        value: s.to_owned(),
                    })
            }
        }
    };
}

closed_options! {
    /// Difficulty tag.
    Level, "level" {
        Basic => "Basic",
        Intermediate => "Intermediate",
        Advanced => "Advanced",
    }
}

closed_options! {
    QuestionType, "question type" {
        MultipleChoice => "Multiple Choice",
        ShortAnswer => "Short Answer",
        LongAnswer => "Long Answer",
        Numerical => "Numerical",
    }
}

closed_options! {
    /// Target class (grade) of a question.
    ClassLevel, "class" {
        Ninth => "9th",
        Tenth => "10th",
        Eleventh => "11th",
        Twelfth => "12th",
    }
}
