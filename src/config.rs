//! TOML-based rule configuration.
//!
//! [`RuleConfig`] lets an embedding engine override the replacement
//! address and the UTC year window without recompiling. Every field has a
//! default that reproduces the built-in rule, so an empty TOML file is a
//! valid configuration.
//!
//! The configuration file format:
//!
//! ```toml
//! replacement_email = "eyesibar21@gmail.com"
//! year_start = 2025
//! year_end = 2026
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::ConfigError;
use crate::rule::{DEFAULT_YEAR_END, DEFAULT_YEAR_START, REPLACEMENT_EMAIL};

/// Rewrite rule configuration loaded from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    /// Replacement email address written into matching commits.
    #[serde(default = "default_replacement_email")]
    pub replacement_email: String,

    /// First UTC year (inclusive) to rewrite.
    #[serde(default = "default_year_start")]
    pub year_start: i32,

    /// First UTC year (exclusive) past the rewrite window.
    #[serde(default = "default_year_end")]
    pub year_end: i32,
}

fn default_replacement_email() -> String {
    REPLACEMENT_EMAIL.to_string()
}
fn default_year_start() -> i32 {
    DEFAULT_YEAR_START
}
fn default_year_end() -> i32 {
    DEFAULT_YEAR_END
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            replacement_email: default_replacement_email(),
            year_start: default_year_start(),
            year_end: default_year_end(),
        }
    }
}

impl RuleConfig {
    /// Load and validate a [`RuleConfig`] from a TOML file at the given path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading rewrite rule configuration");

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let contents = std::fs::read_to_string(path)?;
        let config: RuleConfig =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.validate()?;

        debug!(
            year_start = config.year_start,
            year_end = config.year_end,
            "rewrite rule configuration parsed"
        );
        Ok(config)
    }

    /// Validate that the replacement address and year window are sane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.replacement_email.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "replacement_email".into(),
                detail: "replacement email must not be empty".into(),
            });
        }
        if self
            .replacement_email
            .contains(|c: char| c.is_ascii_whitespace())
        {
            return Err(ConfigError::InvalidValue {
                field: "replacement_email".into(),
                detail: "replacement email must not contain whitespace".into(),
            });
        }
        if self.year_start >= self.year_end {
            return Err(ConfigError::InvalidValue {
                field: "year_start".into(),
                detail: "year window must be non-empty (year_start < year_end)".into(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_builtin_rule() {
        let config = RuleConfig::default();
        assert_eq!(config.replacement_email, "eyesibar21@gmail.com");
        assert_eq!(config.year_start, 2025);
        assert_eq!(config.year_end, 2026);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewrite.toml");
        std::fs::write(
            &path,
            r#"
replacement_email = "audit@example.com"
year_start = 2020
year_end = 2023
"#,
        )
        .unwrap();

        let config = RuleConfig::load(&path).unwrap();
        assert_eq!(config.replacement_email, "audit@example.com");
        assert_eq!(config.year_start, 2020);
        assert_eq!(config.year_end, 2023);
    }

    #[test]
    fn test_load_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewrite.toml");
        std::fs::write(&path, "year_start = 2024\n").unwrap();

        let config = RuleConfig::load(&path).unwrap();
        assert_eq!(config.replacement_email, "eyesibar21@gmail.com");
        assert_eq!(config.year_start, 2024);
        assert_eq!(config.year_end, 2026);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = RuleConfig::load(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rewrite.toml");
        std::fs::write(&path, "year_start = \"not a year\"\n").unwrap();

        let result = RuleConfig::load(&path);
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_validate_empty_email() {
        let config = RuleConfig {
            replacement_email: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "replacement_email"
        ));
    }

    #[test]
    fn test_validate_whitespace_email() {
        let config = RuleConfig {
            replacement_email: "someone @example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "replacement_email"
        ));
    }

    #[test]
    fn test_validate_inverted_window() {
        let config = RuleConfig {
            year_start: 2026,
            year_end: 2025,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "year_start"
        ));
    }
}
