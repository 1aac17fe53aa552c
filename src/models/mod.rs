// file: src/models/mod.rs
// version: 1.0.0
// guid: 2b7d9e14-5c3a-4f80-b6d1-e9a04c37f825

//! Record stores for the identity and hostname steps

pub mod hostname;
pub mod identity;

pub use hostname::{HostnameData, HostnameModel};
pub use identity::{IdentityData, IdentityModel, IdentityResponse, User};
