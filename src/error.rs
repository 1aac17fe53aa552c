// file: src/error.rs
// version: 2.1.0
// guid: 57b83a63-07b6-4534-aa6c-51e8797254e0

use crate::config::schema::SchemaViolation;
use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AutoInstallError>;

/// Error types for identity and hostname configuration
#[derive(Error, Debug)]
pub enum AutoInstallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Schema validation failed for section '{section}': {}", join_violations(.violations))]
    SchemaValidation {
        section: String,
        violations: Vec<SchemaViolation>,
    },

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AutoInstallError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a new missing configuration error
    pub fn missing_configuration(msg: impl Into<String>) -> Self {
        Self::MissingConfiguration(msg.into())
    }

    /// Create a schema validation error for a section
    pub fn schema(section: impl Into<String>, violations: Vec<SchemaViolation>) -> Self {
        Self::SchemaValidation {
            section: section.into(),
            violations,
        }
    }
}

impl From<validator::ValidationErrors> for AutoInstallError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<&str> = errors.field_errors().keys().copied().collect();
        fields.sort_unstable();
        Self::Validation(format!("invalid fields: {}", fields.join(", ")))
    }
}

fn join_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
