//! Render configuration.
//!
//! The execution context is explicit configuration rather than ambient
//! state: every entry point reads it from the [`crate::RenderEnv`] it is given.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Environment variable selecting the [`RenderMode`].
pub const ENV_RENDER_MODE: &str = "PAYLABEL_RENDER_MODE";

/// Environment variable toggling test mode.
pub const ENV_TEST_MODE: &str = "PAYLABEL_TEST_MODE";

/// Where rendering happens.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum RenderMode {
    /// Producing visible button markup.
    #[default]
    Visual,
    /// A non-visual back-end pass; wallet, tag and personalization render nothing.
    Backend,
}

/// Errors raised while building a [`RenderConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document was not valid JSON of the expected shape.
    #[error("invalid render configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// The render mode value was not recognised.
    #[error("invalid render mode '{value}'")]
    InvalidRenderMode {
        /// Value provided by the caller.
        value: String,
    },
    /// A boolean flag could not be parsed.
    #[error("invalid value '{value}' for {name}")]
    InvalidFlag {
        /// Variable name.
        name: String,
        /// Value provided by the caller.
        value: String,
    },
}

/// Execution context flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Where rendering happens.
    pub mode: RenderMode,
    /// Test execution: personalization timing styles are skipped.
    pub test_mode: bool,
}

impl RenderConfig {
    /// A back-end configuration.
    #[must_use]
    pub fn backend() -> Self {
        Self {
            mode: RenderMode::Backend,
            ..Self::default()
        }
    }

    /// A visual configuration in test mode.
    #[must_use]
    pub fn test() -> Self {
        Self {
            test_mode: true,
            ..Self::default()
        }
    }

    /// Whether this is a back-end pass.
    #[must_use]
    pub const fn is_backend(&self) -> bool {
        matches!(self.mode, RenderMode::Backend)
    }

    /// Parse a JSON document such as `{"mode": "backend", "testMode": false}`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Apply [`ENV_RENDER_MODE`] and [`ENV_TEST_MODE`] from `vars`.
    /// Unrelated variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRenderMode`] or [`ConfigError::InvalidFlag`]
    /// when a recognised variable has an unparseable value.
    pub fn with_env_overrides<I, K, V>(mut self, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in vars {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            match key {
                ENV_RENDER_MODE => {
                    self.mode = value.parse().map_err(|_: strum::ParseError| {
                        ConfigError::InvalidRenderMode {
                            value: value.to_string(),
                        }
                    })?;
                }
                ENV_TEST_MODE => {
                    self.test_mode = parse_flag(key, value)?;
                }
                _ => {}
            }
        }
        Ok(self)
    }

    /// The default configuration with the process environment applied.
    ///
    /// # Errors
    ///
    /// See [`RenderConfig::with_env_overrides`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().with_env_overrides(std::env::vars())
    }
}

fn parse_flag(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_visual_without_test_mode() {
        let config = RenderConfig::default();
        assert!(!config.is_backend());
        assert!(!config.test_mode);
    }

    #[test]
    fn test_from_json_str_partial_document() {
        let config = RenderConfig::from_json_str(r#"{"mode": "backend"}"#).unwrap();
        assert!(config.is_backend());
        assert!(!config.test_mode);
    }

    #[test]
    fn test_env_overrides_apply_in_order() {
        let config = RenderConfig::from_json_str(r#"{"testMode": true}"#)
            .unwrap()
            .with_env_overrides([
                ("HOME", "/root"),
                (ENV_RENDER_MODE, "Backend"),
                (ENV_TEST_MODE, "off"),
            ])
            .unwrap();
        assert_eq!(config, RenderConfig::backend());
    }

    #[test]
    fn test_env_overrides_reject_bad_values() {
        let err = RenderConfig::default()
            .with_env_overrides([(ENV_RENDER_MODE, "server")])
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRenderMode { .. }));

        let err = RenderConfig::default()
            .with_env_overrides([(ENV_TEST_MODE, "maybe")])
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid value 'maybe' for PAYLABEL_TEST_MODE");
    }
}
