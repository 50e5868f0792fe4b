//! Configuration types for tree-lint.

use crate::check::CheckError;
use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Severity threshold for failing a scan (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Per-check configurations, keyed by check name.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a check is enabled.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str) -> bool {
        self.rules
            .get(rule_name)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a check.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str) -> Option<Severity> {
        self.rules.get(rule_name).and_then(|c| c.severity)
    }

    /// Gets the parameter view for a check (empty if unconfigured).
    #[must_use]
    pub fn rule_params<'a>(&'a self, rule_name: &'a str) -> RuleParams<'a> {
        RuleParams {
            rule: rule_name,
            table: self.rules.get(rule_name).map(|c| &c.params),
        }
    }
}

/// Per-check configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether the check is enabled (default: true).
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for issues from this check.
    #[serde(default)]
    pub severity: Option<Severity>,

    /// Named check parameters (each check documents its own keys and
    /// defaults; unset keys keep the check's compiled-in default).
    #[serde(default)]
    pub params: toml::Table,
}

/// Typed view over one check's configured parameters.
///
/// Getters return `Ok(None)` for unset keys so checks keep their
/// compiled-in defaults, and a [`CheckError::Configuration`] when a set
/// key has the wrong type.
#[derive(Debug, Clone, Copy)]
pub struct RuleParams<'a> {
    rule: &'a str,
    table: Option<&'a toml::Table>,
}

impl<'a> RuleParams<'a> {
    /// Creates an empty parameter view for a check.
    #[must_use]
    pub fn empty(rule: &'a str) -> Self {
        Self { rule, table: None }
    }

    /// Creates a parameter view over a TOML table.
    #[must_use]
    pub fn new(rule: &'a str, table: &'a toml::Table) -> Self {
        Self {
            rule,
            table: Some(table),
        }
    }

    fn get(&self, key: &str) -> Option<&'a toml::Value> {
        self.table.and_then(|t| t.get(key))
    }

    fn type_error(&self, key: &str, value: &toml::Value, expected: &str) -> CheckError {
        CheckError::configuration(
            self.rule,
            value.to_string(),
            format!("parameter `{key}` must be a {expected}"),
        )
    }

    /// Gets a string parameter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the value is not a string.
    pub fn get_str(&self, key: &str) -> Result<Option<&'a str>, CheckError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .map(Some)
                .ok_or_else(|| self.type_error(key, value, "string")),
        }
    }

    /// Gets a boolean parameter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the value is not a boolean.
    pub fn get_bool(&self, key: &str) -> Result<Option<bool>, CheckError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_bool()
                .map(Some)
                .ok_or_else(|| self.type_error(key, value, "boolean")),
        }
    }

    /// Gets a non-negative integer parameter.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the value is not a non-negative
    /// integer.
    pub fn get_usize(&self, key: &str) -> Result<Option<usize>, CheckError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => value
                .as_integer()
                .and_then(|i| usize::try_from(i).ok())
                .map(Some)
                .ok_or_else(|| self.type_error(key, value, "non-negative integer")),
        }
    }
}

/// Errors loading or parsing a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the configuration content.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rule_params() {
        let config = Config::parse(
            r#"
            [rules.comment-regular-expression]
            severity = "error"
            params = { regular_expression = "(?i)todo.*", message = "Handle this." }

            [rules.equals-on-atomic]
            enabled = false
            "#,
        )
        .expect("config should parse");

        assert!(!config.is_rule_enabled("equals-on-atomic"));
        assert!(config.is_rule_enabled("comment-regular-expression"));
        assert_eq!(
            config.rule_severity("comment-regular-expression"),
            Some(Severity::Error)
        );

        let params = config.rule_params("comment-regular-expression");
        assert_eq!(
            params.get_str("regular_expression").expect("string param"),
            Some("(?i)todo.*")
        );
        assert_eq!(params.get_str("unset").expect("unset key"), None);
    }

    #[test]
    fn wrong_param_type_is_configuration_error() {
        let config = Config::parse(
            r#"
            [rules.bad-type-parameter-name]
            params = { format = 42 }
            "#,
        )
        .expect("config should parse");

        let params = config.rule_params("bad-type-parameter-name");
        let err = params.get_str("format").expect_err("should be an error");
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn unconfigured_rule_is_enabled_with_empty_params() {
        let config = Config::new();
        assert!(config.is_rule_enabled("anything"));
        let params = config.rule_params("anything");
        assert_eq!(params.get_str("format").expect("unset"), None);
    }
}
