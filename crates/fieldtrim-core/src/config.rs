use serde::Deserialize;
use thiserror::Error as ThisError;

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid trim config: {0}")]
    Parse(#[from] toml::de::Error),
}

///
/// TrimConfig
///
/// Knobs for the trim policy. Every field has a default, so an empty
/// document is a valid config.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TrimConfig {
    pub blank: BlankPolicy,
}

impl TrimConfig {
    #[must_use]
    pub const fn new(blank: BlankPolicy) -> Self {
        Self { blank }
    }

    /// Parse a config from TOML source, e.g. `blank = "preserve"`.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }
}

///
/// BlankPolicy
///
/// What to do with a text value made only of whitespace.
/// Empty and absent values are never written under either policy.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BlankPolicy {
    /// Replace it with the empty string.
    #[default]
    Collapse,

    /// Leave it as it is.
    Preserve,
}

///
/// TESTS
///
