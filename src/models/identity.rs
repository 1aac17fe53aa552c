// file: src/models/identity.rs
// version: 1.0.0
// guid: 6e1f3a88-92c4-4d0b-8a5f-17bc0e4d9f63

//! User identity record store

use crate::error::AutoInstallError;
use crate::logging::Credential;
use crate::Result;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Identity payload accepted by POST and built from autoinstall sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct IdentityData {
    #[serde(default)]
    pub realname: String,
    #[validate(length(min = 1))]
    pub username: String,
    pub hostname: String,
    #[validate(custom(function = "non_empty_credential"))]
    pub crypted_password: Credential,
}

/// Identity returned by GET; carries no credential
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityResponse {
    pub realname: String,
    pub username: String,
}

/// The installed system's user
///
/// Built only through [`User::new`], so `realname` is never empty and the
/// required fields are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    realname: String,
    username: String,
    password: Credential,
}

impl User {
    /// Build a user, defaulting an empty `realname` to `username`
    pub fn new(
        realname: impl Into<String>,
        username: impl Into<String>,
        password: Credential,
    ) -> Result<Self> {
        let username = username.into();
        if username.is_empty() {
            return Err(AutoInstallError::validation("username is required"));
        }
        if password.is_empty() {
            return Err(AutoInstallError::validation("password is required"));
        }

        let mut realname = realname.into();
        if realname.is_empty() {
            realname = username.clone();
        }

        Ok(Self {
            realname,
            username,
            password,
        })
    }

    pub fn realname(&self) -> &str {
        &self.realname
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &Credential {
        &self.password
    }
}

/// Holds at most one user per session
#[derive(Debug, Default)]
pub struct IdentityModel {
    user: Option<User>,
}

impl IdentityModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored user with one built from `data`
    pub fn add_user(&mut self, data: &IdentityData) -> Result<()> {
        let user = User::new(
            data.realname.clone(),
            data.username.clone(),
            data.crypted_password.clone(),
        )?;
        self.user = Some(user);
        Ok(())
    }

    /// The stored user, if any
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}

fn non_empty_credential(credential: &Credential) -> std::result::Result<(), ValidationError> {
    if credential.is_empty() {
        return Err(ValidationError::new("length"));
    }
    Ok(())
}
