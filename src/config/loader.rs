// file: src/config/loader.rs
// version: 2.0.0
// guid: d4e5f6g7-h8i9-0123-4567-890123defghi

//! Autoinstall document loading and environment variable substitution

use super::{Answers, AutoinstallDocument};
use crate::error::AutoInstallError;
use crate::Result;
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Key wrapping the autoinstall document inside cloud-config user data
const AUTOINSTALL_WRAPPER_KEY: &str = "autoinstall";

/// Configuration loader with environment variable substitution
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a new config loader
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Load an autoinstall document from a YAML file
    pub fn load_autoinstall<P: AsRef<Path>>(&self, path: P) -> Result<AutoinstallDocument> {
        let content = self.read(path.as_ref(), "autoinstall")?;
        self.parse_autoinstall(&content)
    }

    /// Parse autoinstall YAML, unwrapping the cloud-config `autoinstall:` form
    pub fn parse_autoinstall(&self, content: &str) -> Result<AutoinstallDocument> {
        let expanded = self.expand_env_vars(content)?;
        if expanded.trim().is_empty() {
            return Ok(AutoinstallDocument::default());
        }
        let mut value: Value = serde_yaml::from_str(&expanded)?;

        if let Some(inner) = value
            .as_object_mut()
            .and_then(|top| top.remove(AUTOINSTALL_WRAPPER_KEY))
        {
            debug!("Unwrapping '{}' key from cloud-config document", AUTOINSTALL_WRAPPER_KEY);
            value = inner;
        }

        AutoinstallDocument::from_value(value)
    }

    /// Load scripted answers from a flat YAML mapping
    pub fn load_answers<P: AsRef<Path>>(&self, path: P) -> Result<Answers> {
        let content = self.read(path.as_ref(), "answers")?;
        let expanded = self.expand_env_vars(&content)?;
        if expanded.trim().is_empty() {
            return Ok(Answers::default());
        }
        Ok(serde_yaml::from_str(&expanded)?)
    }

    fn read(&self, path: &Path, kind: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            AutoInstallError::config(format!(
                "Failed to read {} file {}: {}",
                kind,
                path.display(),
                e
            ))
        })
    }

    /// Expand environment variables in configuration content
    ///
    /// Placeholders naming an unset variable are left as written, since
    /// sections such as `late-commands` carry shell syntax meant for the
    /// installed system.
    fn expand_env_vars(&self, content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| AutoInstallError::config(format!("Invalid regex pattern: {}", e)))?;

        let mut result = content.to_string();
        let mut unset_vars = Vec::new();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];

            if let Some(value) = self.env_vars.get(var_name) {
                result = result.replace(placeholder, value);
            } else if !unset_vars.iter().any(|v| v == var_name) {
                unset_vars.push(var_name.to_string());
            }
        }

        if !unset_vars.is_empty() {
            debug!("Leaving unset placeholders as written: {}", unset_vars.join(", "));
        }

        Ok(result)
    }

    /// Set environment variable for substitution
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
