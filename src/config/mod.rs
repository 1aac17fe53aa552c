// file: src/config/mod.rs
// version: 2.0.0
// guid: a1b2c3d4-e5f6-7a8b-9c0d-1e2f3a4b5c6d

//! Configuration module for identity autoinstall
//!
//! Holds the parsed autoinstall document, scripted answers and the schema
//! used to validate the `identity` section.

pub mod loader;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{identity_json_schema, validate_identity, IdentitySection, SchemaViolation};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Top-level key listing sections that must still be confirmed interactively
pub const INTERACTIVE_SECTIONS_KEY: &str = "interactive-sections";

/// Top-level key for general user provisioning (cloud-init user data)
pub const USER_DATA_KEY: &str = "user-data";

/// Wildcard entry in `interactive-sections` matching every section
pub const INTERACTIVE_WILDCARD: &str = "*";

/// How a controller is addressed inside the autoinstall document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionKey {
    /// Key the controller reads its data from
    pub wire_key: &'static str,
    /// Name matched against `interactive-sections`
    pub section_name: &'static str,
}

/// Parsed autoinstall document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AutoinstallDocument {
    sections: Map<String, Value>,
}

impl AutoinstallDocument {
    /// Build a document from a parsed value; only mappings are accepted
    pub fn from_value(value: Value) -> crate::Result<Self> {
        match value {
            Value::Object(sections) => Ok(Self { sections }),
            Value::Null => Ok(Self::default()),
            other => Err(crate::error::AutoInstallError::config(format!(
                "Autoinstall document must be a mapping, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Raw value stored under `key`
    pub fn section(&self, key: &str) -> Option<&Value> {
        self.sections.get(key)
    }

    /// Whether the document has a top-level `key`
    pub fn has_section(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    /// Whether the document has no sections at all
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Entries of `interactive-sections`; non-string entries are ignored
    pub fn interactive_sections(&self) -> Vec<&str> {
        self.sections
            .get(INTERACTIVE_SECTIONS_KEY)
            .and_then(Value::as_array)
            .map(|entries| entries.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether `section_name` must still be confirmed interactively
    pub fn is_interactive(&self, section_name: &str) -> bool {
        self.interactive_sections()
            .iter()
            .any(|entry| *entry == INTERACTIVE_WILDCARD || *entry == section_name)
    }

    /// Whether general user provisioning is supplied outside the identity section
    pub fn has_user_data(&self) -> bool {
        self.has_section(USER_DATA_KEY)
    }
}

/// Predetermined answers for non-interactive runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<String, String>,
}

impl Answers {
    /// Answer recorded for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether every key in `keys` has an answer
    pub fn contains_all(&self, keys: &[&str]) -> bool {
        keys.iter().all(|key| self.values.contains_key(*key))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Answers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
