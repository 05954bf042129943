use std::io::Read;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How long a feedback banner stays up before it clears itself.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(3000);

/// Editor settings as read from a JSON file such as `{"banner_ms": 1500}`.
/// Missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    #[serde(rename = "banner_ms", with = "millis")]
    pub banner_duration: Duration,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            banner_duration: DEFAULT_BANNER_DURATION,
        }
    }
}

impl EditorConfig {
    #[must_use]
    pub fn with_banner_duration(mut self, banner_duration: Duration) -> Self {
        self.banner_duration = banner_duration;
        self
    }

    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed input, unknown keys, or a
    /// zero banner duration.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::from_json)
    }

    /// Same as [`EditorConfig::from_json_str`], reading from any source.
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_json_str`].
    pub fn from_json_reader(reader: impl Read) -> Result<Self, ConfigError> {
        serde_json::from_reader(reader).map_err(ConfigError::from_json)
    }

    /// Parse a banner duration given in whole milliseconds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBannerDuration` for non-numeric or zero
    /// values.
    pub fn parse_banner_ms(raw: &str) -> Result<Duration, ConfigError> {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
            _ => Err(ConfigError::InvalidBannerDuration {
                raw: raw.to_string(),
            }),
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        match u64::deserialize(deserializer)? {
            0 => Err(D::Error::custom("banner_ms must be greater than zero")),
            ms => Ok(Duration::from_millis(ms)),
        }
    }
}
