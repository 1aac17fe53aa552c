// file: src/lib.rs
// version: 3.0.0
// guid: d82472d1-7f0f-4eb4-b0a3-6e1547103eb4

//! # Autoinstall Identity
//!
//! Collects and validates the installed system's user (real name, username,
//! pre-hashed password) and hostname, either from an autoinstall document or
//! through GET/POST requests from an interactive front-end, and writes the
//! accepted data back out in autoinstall form.
//!
//! Credentials are stored opaquely and never appear in log output.

pub mod cli;
pub mod config;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod models;
pub mod session;

pub use error::{AutoInstallError, Result};
pub use session::InstallSession;
