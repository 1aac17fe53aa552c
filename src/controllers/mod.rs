// file: src/controllers/mod.rs
// version: 1.0.0
// guid: 0a5c7e92-4b18-4d36-a0f7-83e2d1b96c45

//! Step controllers for identity and hostname
//!
//! A controller owns its record store and is driven either by the autoinstall
//! document (load, then apply) or by GET/POST requests from a front-end. It
//! reports progress to the orchestrator through [`FlowEvent`]s.

pub mod hostname;
pub mod identity;

pub use hostname::HostnameController;
pub use identity::IdentityController;

use crate::config::{Answers, AutoinstallDocument, SectionKey};
use crate::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::debug;

/// Signals sent from a controller to the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEvent {
    /// The named section's data has been accepted
    Configured(&'static str),
    /// The flow may advance past the named section
    Next(&'static str),
    /// The flow should return to the step before the named section
    Back(&'static str),
}

/// Session inputs shared by every controller
#[derive(Debug, Clone)]
pub struct ControllerContext {
    autoinstall: Option<Arc<AutoinstallDocument>>,
    answers: Arc<Answers>,
    events: mpsc::UnboundedSender<FlowEvent>,
}

impl ControllerContext {
    /// Create a context and the receiver the orchestrator listens on
    pub fn new(
        autoinstall: Option<AutoinstallDocument>,
        answers: Answers,
    ) -> (Self, mpsc::UnboundedReceiver<FlowEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let context = Self {
            autoinstall: autoinstall.map(Arc::new),
            answers: Arc::new(answers),
            events,
        };
        (context, receiver)
    }

    /// The autoinstall document, if one was supplied
    pub fn autoinstall(&self) -> Option<&AutoinstallDocument> {
        self.autoinstall.as_deref()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Whether the document provisions users outside the identity section
    pub fn has_user_data(&self) -> bool {
        self.autoinstall()
            .map(AutoinstallDocument::has_user_data)
            .unwrap_or(false)
    }

    /// Send `event` to the orchestrator
    pub fn emit(&self, event: FlowEvent) {
        if let Err(e) = self.events.send(event) {
            debug!("Orchestrator stopped listening, dropped {:?}", e.0);
        }
    }
}

/// Behaviour shared by identity and hostname controllers
#[async_trait]
pub trait Controller: Send {
    /// Where this controller's data lives in the autoinstall document
    fn section_key(&self) -> SectionKey;

    fn context(&self) -> &ControllerContext;

    /// Whether this step must be completed interactively
    fn interactive(&self) -> bool {
        match self.context().autoinstall() {
            None => true,
            Some(doc) if doc.is_empty() => true,
            Some(doc) => doc.is_interactive(self.section_key().section_name),
        }
    }

    /// Validate and store an autoinstall section; `None` is a no-op
    fn load_autoinstall_data(&mut self, section: Option<&Value>) -> Result<()>;

    /// Confirm autoinstall data once every load phase has run
    async fn apply_autoinstall_config(&mut self) -> Result<()>;

    /// Serialize stored data back into autoinstall form
    fn make_autoinstall(&self) -> Result<Value>;

    /// Complete the step from scripted answers; returns whether it did
    fn apply_answers(&mut self) -> Result<bool>;

    fn is_configured(&self) -> bool;

    /// Ask the orchestrator to go back a step; stored data is untouched
    fn cancel(&self) {
        self.context()
            .emit(FlowEvent::Back(self.section_key().section_name));
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use serde_json::json;

    pub fn context_with(
        doc: Option<Value>,
    ) -> (ControllerContext, mpsc::UnboundedReceiver<FlowEvent>) {
        let doc = doc.map(|value| AutoinstallDocument::from_value(value).unwrap());
        ControllerContext::new(doc, Answers::default())
    }

    pub fn bob_document() -> Value {
        json!({"identity": {"username": "bob", "hostname": "h1", "password": "p"}})
    }

    pub fn drain(receiver: &mut mpsc::UnboundedReceiver<FlowEvent>) -> Vec<FlowEvent> {
        let mut events = Vec::new();
        while let Ok(event) = receiver.try_recv() {
            events.push(event);
        }
        events
    }
}
