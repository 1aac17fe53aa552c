// file: src/logging/mod.rs
// version: 1.1.0
// guid: i9j0k1l2-m3n4-5678-9012-345678ijklmn

//! Logging system for identity autoinstall

pub mod logger;
pub mod redact;

pub use logger::{
    init_json_logger, init_logger, with_async_operation_span, with_operation_span,
};
pub use redact::{Credential, REDACTION_TOKEN};
