// file: src/logging/redact.rs
// version: 1.0.0
// guid: 8c2e4f61-0d7a-4b39-a5e8-7f13c96d2b04

//! Credential redaction for log output
//!
//! Credentials are wrapped in [`Credential`], whose `Debug` and `Display`
//! output is always [`REDACTION_TOKEN`]. Structured payloads headed for a log
//! line go through [`redacted`], which replaces credential fields before the
//! payload is rendered.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Placeholder written wherever a credential would appear in a log line
pub const REDACTION_TOKEN: &str = "<REDACTED>";

/// Field names treated as credentials in logged payloads
pub const CREDENTIAL_FIELDS: &[&str] = &["password", "crypted_password"];

/// An opaque, already-hashed credential
///
/// Serialization emits the stored value verbatim so autoinstall documents
/// round-trip; formatting never does.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The stored credential. Never pass the result to a log macro.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTION_TOKEN)
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTION_TOKEN)
    }
}

/// Render `payload` for logging with every credential field replaced
///
/// If the payload cannot be rendered as a mapping, the whole payload is
/// replaced by the token.
pub fn redacted<T: Serialize>(payload: &T) -> String {
    match serde_json::to_value(payload) {
        Ok(Value::Object(mut fields)) => {
            for name in CREDENTIAL_FIELDS {
                if let Some(field) = fields.get_mut(*name) {
                    *field = Value::String(REDACTION_TOKEN.to_string());
                }
            }
            Value::Object(fields).to_string()
        }
        _ => REDACTION_TOKEN.to_string(),
    }
}
