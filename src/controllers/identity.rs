// file: src/controllers/identity.rs
// version: 1.0.0
// guid: 9d3b6f20-7e4a-4c18-b5a9-2f08c61e7d3b

//! Identity step: the installed system's user

use super::{Controller, ControllerContext, FlowEvent};
use crate::config::{validate_identity, SectionKey};
use crate::error::AutoInstallError;
use crate::logging::redact::redacted;
use crate::logging::{with_operation_span, Credential};
use crate::models::{IdentityData, IdentityModel, IdentityResponse};
use crate::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};
use validator::Validate;

pub const IDENTITY_SECTION: SectionKey = SectionKey {
    wire_key: "identity",
    section_name: "identity",
};

/// Scripted answers needed to complete the step unattended
const ANSWER_KEYS: &[&str] = &["realname", "username", "password"];

pub struct IdentityController {
    context: ControllerContext,
    model: IdentityModel,
    configured: bool,
}

impl IdentityController {
    pub fn new(context: ControllerContext) -> Self {
        Self {
            context,
            model: IdentityModel::new(),
            configured: false,
        }
    }

    pub fn model(&self) -> &IdentityModel {
        &self.model
    }

    /// Current identity without its credential
    pub fn get(&self) -> IdentityResponse {
        match self.model.user() {
            Some(user) => IdentityResponse {
                realname: user.realname().to_string(),
                username: user.username().to_string(),
            },
            None => IdentityResponse::default(),
        }
    }

    /// Accept an identity from the front-end and advance the flow
    pub fn post(&mut self, data: IdentityData) -> Result<()> {
        data.validate()?;
        self.done(data)
    }

    fn done(&mut self, data: IdentityData) -> Result<()> {
        debug!(
            "IdentityController.done next_screen user_spec={}",
            redacted(&data)
        );
        self.model.add_user(&data)?;
        self.mark_configured();
        self.context.emit(FlowEvent::Next(IDENTITY_SECTION.section_name));
        Ok(())
    }

    fn mark_configured(&mut self) {
        self.configured = true;
        self.context
            .emit(FlowEvent::Configured(IDENTITY_SECTION.section_name));
    }
}

#[async_trait]
impl Controller for IdentityController {
    fn section_key(&self) -> SectionKey {
        IDENTITY_SECTION
    }

    fn context(&self) -> &ControllerContext {
        &self.context
    }

    fn load_autoinstall_data(&mut self, section: Option<&Value>) -> Result<()> {
        let section = match section {
            Some(section) => section,
            None => return Ok(()),
        };

        with_operation_span("identity.load_autoinstall_data", || -> Result<()> {
            let parsed = validate_identity(section)?;

            let data = IdentityData {
                realname: parsed.realname,
                username: parsed.username,
                hostname: parsed.hostname,
                crypted_password: parsed.password,
            };
            self.model.add_user(&data)?;
            info!("Loaded identity for user '{}' from autoinstall", data.username);
            Ok(())
        })
    }

    async fn apply_autoinstall_config(&mut self) -> Result<()> {
        if self.model.user().is_none() && !self.context.has_user_data() {
            return Err(AutoInstallError::missing_configuration(
                "no identity data provided",
            ));
        }
        self.mark_configured();
        Ok(())
    }

    fn make_autoinstall(&self) -> Result<Value> {
        match self.model.user() {
            Some(user) => Ok(serde_json::to_value(user)?),
            None => Ok(json!({})),
        }
    }

    fn apply_answers(&mut self) -> Result<bool> {
        let answers = self.context.answers();
        if !answers.contains_all(ANSWER_KEYS) {
            return Ok(false);
        }

        let data = IdentityData {
            realname: answers.get("realname").unwrap_or_default().to_string(),
            username: answers.get("username").unwrap_or_default().to_string(),
            hostname: String::new(),
            crypted_password: Credential::new(answers.get("password").unwrap_or_default()),
        };
        self.post(data)?;
        Ok(true)
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
