// file: src/config/schema.rs
// version: 2.0.0
// guid: 3f0c9a5e-6b1d-4e8a-9f27-c41d5b7e2a90

//! Schema validation for autoinstall sections
//!
//! The JSON schema of the `identity` section is derived from
//! [`IdentitySection`] and sections are checked against it before any
//! controller mutates its model. Every violation is collected so a config
//! author sees the whole problem in a single run.

use crate::error::AutoInstallError;
use crate::logging::Credential;
use crate::Result;
use jsonschema::{error::ValidationErrorKind, JSONSchema};
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

/// Autoinstall key the schema applies to
const IDENTITY_KEY: &str = "identity";

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SchemaViolation {
    /// The section is not a mapping
    NotAnObject,
    /// A required key is absent
    MissingRequired(String),
    /// A key outside the declared properties is present
    UnknownKey(String),
    /// A declared key has the wrong type
    WrongType { key: String, detail: String },
    /// A required string is empty
    Empty(String),
    /// Any other schema failure
    Invalid(String),
}

impl fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaViolation::NotAnObject => write!(f, "section must be a mapping"),
            SchemaViolation::MissingRequired(key) => write!(f, "missing required key '{}'", key),
            SchemaViolation::UnknownKey(key) => write!(f, "unknown key '{}'", key),
            SchemaViolation::WrongType { key, detail } => write!(f, "key '{}': {}", key, detail),
            SchemaViolation::Empty(key) => write!(f, "key '{}' must not be empty", key),
            SchemaViolation::Invalid(detail) => write!(f, "{}", detail),
        }
    }
}

/// A validated `identity` autoinstall section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IdentitySection {
    #[serde(default)]
    pub realname: String,
    #[schemars(length(min = 1))]
    pub username: String,
    #[schemars(length(min = 1))]
    pub hostname: String,
    #[schemars(with = "String", length(min = 1))]
    pub password: Credential,
}

/// JSON schema of the `identity` section
pub fn identity_json_schema() -> Value {
    // RootSchema is plain data; serializing it cannot fail.
    serde_json::to_value(schema_for!(IdentitySection)).unwrap_or(Value::Null)
}

fn identity_validator() -> Result<&'static JSONSchema> {
    static VALIDATOR: OnceLock<std::result::Result<JSONSchema, String>> = OnceLock::new();

    VALIDATOR
        .get_or_init(|| {
            let schema = identity_json_schema();
            JSONSchema::compile(&schema).map_err(|e| e.to_string())
        })
        .as_ref()
        .map_err(|e| AutoInstallError::config(format!("Invalid identity schema: {}", e)))
}

/// Validate a raw identity section and convert it into its typed form
///
/// No store is touched on failure; the error lists every violation found.
pub fn validate_identity(value: &Value) -> Result<IdentitySection> {
    let validator = identity_validator()?;

    if let Err(errors) = validator.validate(value) {
        let mut violations = Vec::new();
        for error in errors {
            let key = error.instance_path.to_string();
            let key = key.trim_start_matches('/').to_string();
            match error.kind {
                ValidationErrorKind::Required { ref property } => {
                    let name = property.as_str().map(str::to_string);
                    violations.push(SchemaViolation::MissingRequired(
                        name.unwrap_or_else(|| property.to_string()),
                    ));
                }
                ValidationErrorKind::AdditionalProperties { ref unexpected } => {
                    violations.extend(unexpected.iter().cloned().map(SchemaViolation::UnknownKey));
                }
                ValidationErrorKind::Type { .. } if key.is_empty() => {
                    violations.push(SchemaViolation::NotAnObject);
                }
                ValidationErrorKind::Type { .. } => {
                    violations.push(SchemaViolation::WrongType {
                        detail: error.to_string(),
                        key,
                    });
                }
                ValidationErrorKind::MinLength { .. } => {
                    violations.push(SchemaViolation::Empty(key));
                }
                _ => violations.push(SchemaViolation::Invalid(error.to_string())),
            }
        }
        violations.sort();
        violations.dedup();
        return Err(AutoInstallError::schema(IDENTITY_KEY, violations));
    }

    Ok(serde_json::from_value(value.clone())?)
}
