//! HTTP client for the techmart admin backend.
//!
//! Provides the gateway (the single chokepoint for outbound requests:
//! bearer auth, JSON/multipart encoding, envelope decoding), one resource
//! service per catalog entity, and the edit-submission driver that turns an
//! [`techmart_core::edit::UpdatePlan`] into at most one network call.

pub mod auth;
pub mod body;
pub mod config;
pub mod error;
pub mod gateway;
pub mod services;
pub mod submit;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use gateway::Gateway;
