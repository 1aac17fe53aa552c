// file: src/controllers/hostname.rs
// version: 1.0.0
// guid: 5f8e2a17-c934-4b6d-8e01-d7a3b59f4c20

//! Hostname step
//!
//! Hostname was split out of identity. Autoinstall documents still carry it
//! in the `identity` section, so this controller reads that key, but it is
//! listed in `interactive-sections` under its own name.

use super::{Controller, ControllerContext, FlowEvent};
use crate::config::{validate_identity, SectionKey};
use crate::error::AutoInstallError;
use crate::logging::redact::redacted;
use crate::models::{HostnameData, HostnameModel};
use crate::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, info};
use validator::Validate;

pub const HOSTNAME_SECTION: SectionKey = SectionKey {
    wire_key: "identity",
    section_name: "identityhostname",
};

pub struct HostnameController {
    context: ControllerContext,
    model: HostnameModel,
    configured: bool,
}

impl HostnameController {
    pub fn new(context: ControllerContext) -> Self {
        Self {
            context,
            model: HostnameModel::new(),
            configured: false,
        }
    }

    pub fn model(&self) -> &HostnameModel {
        &self.model
    }

    pub fn get(&self) -> HostnameData {
        HostnameData {
            hostname: self.model.hostname().unwrap_or_default().to_string(),
        }
    }

    pub fn post(&mut self, data: HostnameData) -> Result<()> {
        data.validate()?;
        debug!(
            "IdentityHostnameController.done next_screen spec={}",
            redacted(&data)
        );
        self.model.add_hostname(data.hostname)?;
        self.configured = true;
        self.context
            .emit(FlowEvent::Configured(HOSTNAME_SECTION.section_name));
        self.context.emit(FlowEvent::Next(HOSTNAME_SECTION.section_name));
        Ok(())
    }
}

#[async_trait]
impl Controller for HostnameController {
    fn section_key(&self) -> SectionKey {
        HOSTNAME_SECTION
    }

    fn context(&self) -> &ControllerContext {
        &self.context
    }

    fn load_autoinstall_data(&mut self, section: Option<&Value>) -> Result<()> {
        if let Some(section) = section {
            let parsed = validate_identity(section)?;
            self.model.add_hostname(parsed.hostname)?;
            info!("Loaded hostname from autoinstall");
        }
        Ok(())
    }

    async fn apply_autoinstall_config(&mut self) -> Result<()> {
        if self.model.hostname().is_none() && !self.context.has_user_data() {
            return Err(AutoInstallError::missing_configuration(
                "no identity hostname data provided",
            ));
        }
        self.configured = true;
        self.context
            .emit(FlowEvent::Configured(HOSTNAME_SECTION.section_name));
        Ok(())
    }

    fn make_autoinstall(&self) -> Result<Value> {
        Ok(match self.model.hostname() {
            Some(hostname) => json!({ "hostname": hostname }),
            None => json!({}),
        })
    }

    fn apply_answers(&mut self) -> Result<bool> {
        let hostname = match self.context.answers().get("hostname") {
            Some(hostname) => hostname.to_string(),
            None => return Ok(false),
        };
        self.post(HostnameData { hostname })?;
        Ok(true)
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
