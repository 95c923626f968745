use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Iteration variable bound inside `SUBQUERY(...)` when none is configured.
pub const DEFAULT_SUBQUERY_VARIABLE: &str = "$obj";

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("failed to parse compile config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid subquery variable '{0}': expected '$' followed by [A-Za-z0-9_]+")]
    InvalidSubqueryVariable(String),
}

///
/// CompileConfig
///
/// Knobs for the predicate compiler. Every field has a default, so an
/// empty TOML document is a valid config.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileConfig {
    /// Variable that stands for the current element inside a subquery.
    subquery_variable: String,
}

impl CompileConfig {
    #[must_use]
    pub fn subquery_variable(&self) -> &str {
        &self.subquery_variable
    }

    /// Parse and validate a config from TOML text.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;

        Ok(config)
    }

    /// Replace the subquery variable, validating the new name.
    pub fn with_subquery_variable(mut self, name: impl Into<String>) -> Result<Self, ConfigError> {
        self.subquery_variable = name.into();
        self.validate()?;

        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if is_valid_variable(&self.subquery_variable) {
            Ok(())
        } else {
            Err(ConfigError::InvalidSubqueryVariable(
                self.subquery_variable.clone(),
            ))
        }
    }
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            subquery_variable: DEFAULT_SUBQUERY_VARIABLE.to_string(),
        }
    }
}

fn is_valid_variable(name: &str) -> bool {
    name.strip_prefix('$').is_some_and(|rest| {
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

///
/// TESTS
///
