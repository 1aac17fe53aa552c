// file: src/models/hostname.rs
// version: 1.0.0
// guid: c48a0b7e-13f9-4e62-9d25-5a6f8e0b1c37

//! Hostname record store

use crate::error::AutoInstallError;
use crate::Result;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Hostname payload for GET and POST
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct HostnameData {
    #[validate(length(min = 1))]
    pub hostname: String,
}

/// Holds at most one hostname per session
#[derive(Debug, Default)]
pub struct HostnameModel {
    hostname: Option<String>,
}

impl HostnameModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored hostname with `hostname`
    pub fn add_hostname(&mut self, hostname: impl Into<String>) -> Result<()> {
        let hostname = hostname.into();
        if hostname.is_empty() {
            return Err(AutoInstallError::validation("hostname is required"));
        }
        self.hostname = Some(hostname);
        Ok(())
    }

    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_hostname_stores_given_value() {
        let mut model = HostnameModel::new();
        assert_eq!(model.hostname(), None);

        model.add_hostname("h1").unwrap();
        assert_eq!(model.hostname(), Some("h1"));

        model.add_hostname("h2").unwrap();
        assert_eq!(model.hostname(), Some("h2"));
    }

    #[test]
    fn test_empty_hostname_rejected() {
        let mut model = HostnameModel::new();
        model.add_hostname("h1").unwrap();

        assert!(model.add_hostname("").is_err());
        assert_eq!(model.hostname(), Some("h1"));
    }
}
