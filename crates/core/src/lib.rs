//! Pure domain logic for the techmart admin client.
//!
//! Everything in this crate is in-memory and I/O-free: the response
//! envelope, the field-diff computation used by every edit dialog, the
//! edit-session lifecycle, client-side form validation, and the bearer
//! token store contract. The HTTP transport lives in `techmart-client`.

pub mod diff;
pub mod edit;
pub mod envelope;
pub mod token;
pub mod validation;

/// Server-assigned entity identifier. Opaque to the client.
pub type EntityId = String;
