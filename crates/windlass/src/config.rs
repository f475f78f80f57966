//! Engine configuration — the host-supplied vocabulary extension.
//!
//! The host owns file discovery and loading; this crate only receives the
//! already-read data, either as a [`Config`] value built in code or as a
//! JSON string handed to [`Config::from_json`]:
//!
//! ```json
//! {
//!   "colors": ["ocean-blue", "brand"],
//!   "aliases": { "primary": "purple", "danger": "red" }
//! }
//! ```
//!
//! Validation happens when the config is bound into a
//! [`Styler`](crate::Styler), not at parse time — a config is plain data
//! until then.

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;

/// Vocabulary extension and theme-alias table.
///
/// Both fields default to empty, so `{}` is a valid (no-op) config.
/// Alias order is preserved: it is the order substitutions apply in.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Additional color names, possibly multi-hyphen.
    pub colors: Vec<String>,
    /// Theme alias → concrete color name.
    pub aliases: IndexMap<String, String>,
}

impl Config {
    /// Parse a config from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the string is not valid JSON or
    /// does not match the config shape.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Why a configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON input could not be parsed into a [`Config`].
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// An extension color name was empty or whitespace-only.
    #[error("extension color name is empty")]
    EmptyColorName,

    /// An alias name was empty or whitespace-only.
    #[error("alias name is empty")]
    EmptyAliasName,

    /// An alias points at a color that is neither builtin nor configured.
    #[error("alias `{alias}` maps to unknown color `{target}`")]
    UnknownAliasTarget {
        /// The alias name as configured.
        alias: String,
        /// The color name it pointed at.
        target: String,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
