// file: src/session.rs
// version: 1.0.0
// guid: 71c0e5b3-2a94-4f8d-9b6e-0d4f8a13c7e2

//! Installation session driving the identity and hostname steps
//!
//! Each session owns its own controllers and record stores; nothing is shared
//! between sessions.

use crate::config::{Answers, AutoinstallDocument};
use crate::controllers::{
    Controller, ControllerContext, FlowEvent, HostnameController, IdentityController,
};
use crate::logging::with_async_operation_span;
use crate::Result;
use serde_json::{Map, Value};
use tokio::sync::mpsc;
use tracing::{debug, info};
use uuid::Uuid;

pub struct InstallSession {
    session_id: Uuid,
    context: ControllerContext,
    identity: IdentityController,
    hostname: HostnameController,
    events: mpsc::UnboundedReceiver<FlowEvent>,
}

impl InstallSession {
    pub fn new(autoinstall: Option<AutoinstallDocument>, answers: Answers) -> Self {
        let (context, events) = ControllerContext::new(autoinstall, answers);
        let session_id = Uuid::new_v4();
        debug!("Created install session {}", session_id);

        Self {
            session_id,
            identity: IdentityController::new(context.clone()),
            hostname: HostnameController::new(context.clone()),
            context,
            events,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn identity(&self) -> &IdentityController {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut IdentityController {
        &mut self.identity
    }

    pub fn hostname(&self) -> &HostnameController {
        &self.hostname
    }

    pub fn hostname_mut(&mut self) -> &mut HostnameController {
        &mut self.hostname
    }

    /// Controllers in flow order
    pub fn controllers(&self) -> [&dyn Controller; 2] {
        [&self.identity, &self.hostname]
    }

    /// Feed every controller its section of the autoinstall document
    pub fn load(&mut self) -> Result<()> {
        let doc = self.context.autoinstall();
        let controllers: [&mut dyn Controller; 2] = [&mut self.identity, &mut self.hostname];

        for controller in controllers {
            let section = doc.and_then(|doc| doc.section(controller.section_key().wire_key));
            controller.load_autoinstall_data(section)?;
        }
        Ok(())
    }

    /// Confirm autoinstall data for every non-interactive controller
    ///
    /// Returns the section names still waiting for interactive input.
    pub async fn apply(&mut self) -> Result<Vec<&'static str>> {
        let session_id = self.session_id;
        let controllers: [&mut dyn Controller; 2] = [&mut self.identity, &mut self.hostname];
        let mut pending = Vec::new();

        for controller in controllers {
            let name = controller.section_key().section_name;
            if controller.interactive() {
                pending.push(name);
                continue;
            }
            let apply = controller.apply_autoinstall_config();
            with_async_operation_span(name, move || apply).await?;
            info!("Session {}: applied autoinstall config for {}", session_id, name);
        }
        Ok(pending)
    }

    /// Complete unconfigured steps covered by the scripted answers
    ///
    /// Returns the section names that were completed.
    pub fn run_answers(&mut self) -> Result<Vec<&'static str>> {
        let controllers: [&mut dyn Controller; 2] = [&mut self.identity, &mut self.hostname];
        let mut completed = Vec::new();

        for controller in controllers {
            if controller.is_configured() {
                continue;
            }
            if controller.apply_answers()? {
                completed.push(controller.section_key().section_name);
            }
        }
        Ok(completed)
    }

    /// Regenerate the autoinstall document from stored data
    ///
    /// Fragments of controllers sharing a wire key are merged into one
    /// section; empty fragments are left out.
    pub fn make_autoinstall(&self) -> Result<Value> {
        let mut document = Map::new();

        for controller in self.controllers() {
            let fields = match controller.make_autoinstall()? {
                Value::Object(fields) if !fields.is_empty() => fields,
                _ => continue,
            };
            let entry = document
                .entry(controller.section_key().wire_key)
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(section) = entry {
                section.extend(fields);
            }
        }

        Ok(Value::Object(document))
    }

    /// Events emitted by the controllers since the last call
    pub fn drain_events(&mut self) -> Vec<FlowEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.events.try_recv() {
            events.push(event);
        }
        events
    }
}
