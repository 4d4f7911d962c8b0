//! Generator configuration.

use crate::error::SqlGenResult;
use serde::Deserialize;

const DEFAULT_MAX_LOGGED_SQL_LENGTH: usize = 200;

fn default_max_logged_sql_length() -> Option<usize> {
    Some(DEFAULT_MAX_LOGGED_SQL_LENGTH)
}

/// Configuration for a [`SqlGenerator`](crate::SqlGenerator).
///
/// Defaults reproduce the plain behavior: no terminator, snapshots survive a
/// render, no structural validation.
///
/// Can be built in code or loaded from TOML:
///
/// ```rust
/// use sqlgen::GeneratorConfig;
///
/// let config = GeneratorConfig::from_toml_str(
///     r#"
///     terminate_statements = true
///     strict = true
///     "#,
/// )?;
/// assert!(config.terminate_statements);
/// assert_eq!(config.max_logged_sql_length, Some(200));
/// # Ok::<(), sqlgen::SqlGenError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// `sql()` appends a `;` terminator.
    pub terminate_statements: bool,
    /// Every reset (including the one after a render) also clears snapshots.
    pub clear_snapshots_on_reset: bool,
    /// `validate()` also rejects structurally incomplete statements.
    pub strict: bool,
    /// Truncate SQL in log events (in bytes, on a char boundary). `None` disables truncation.
    #[serde(default = "default_max_logged_sql_length")]
    pub max_logged_sql_length: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            terminate_statements: false,
            clear_snapshots_on_reset: false,
            strict: false,
            max_logged_sql_length: default_max_logged_sql_length(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(raw: &str) -> SqlGenResult<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Append `;` to statements returned by `sql()`.
    pub fn terminate_statements(mut self, enabled: bool) -> Self {
        self.terminate_statements = enabled;
        self
    }

    /// Clear snapshots on every reset.
    pub fn clear_snapshots_on_reset(mut self, enabled: bool) -> Self {
        self.clear_snapshots_on_reset = enabled;
        self
    }

    /// Enable structural validation.
    pub fn strict(mut self, enabled: bool) -> Self {
        self.strict = enabled;
        self
    }

    /// Set maximum SQL length to log.
    pub fn max_logged_sql_length(mut self, len: usize) -> Self {
        self.max_logged_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_truncate(mut self) -> Self {
        self.max_logged_sql_length = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn toml_overrides_fields() {
        let config = GeneratorConfig::from_toml_str(
            "clear_snapshots_on_reset = true\nmax_logged_sql_length = 32\n",
        )
        .unwrap();
        assert!(config.clear_snapshots_on_reset);
        assert!(!config.strict);
        assert_eq!(config.max_logged_sql_length, Some(32));
    }

    #[test]
    fn unknown_key_is_config_error() {
        let err = GeneratorConfig::from_toml_str("semicolon = true").unwrap_err();
        assert!(matches!(err, crate::SqlGenError::Config(_)));
    }

    #[test]
    fn builder_methods() {
        let config = GeneratorConfig::new()
            .terminate_statements(true)
            .strict(true)
            .no_truncate();
        assert!(config.terminate_statements);
        assert!(config.strict);
        assert_eq!(config.max_logged_sql_length, None);
    }
}
