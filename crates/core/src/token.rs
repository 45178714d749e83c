//! Bearer-token store collaborator.
//!
//! The token is process-wide state: written by the login/logout flow, read
//! by the gateway on every outbound call. It is kept behind the narrow
//! [`TokenStore`] trait and injected into the gateway rather than accessed
//! as an ambient global, so tests can substitute their own store.
//!
//! Expiry checking reads the JWT `exp` claim without verifying the
//! signature: the client has no signing secret, and a stale token is simply
//! dropped so the user can log in again. Verification is the server's job.

use std::sync::RwLock;

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Narrow contract the gateway and auth flow depend on.
pub trait TokenStore: Send + Sync {
    /// Current bearer token, if a user is logged in.
    fn get(&self) -> Option<String>;
    /// Persist the token after login.
    fn save(&self, token: &str);
    /// Drop the token on logout or detected expiry.
    fn clear(&self);
}

/// In-memory process-wide token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().expect("token lock poisoned").clone()
    }

    fn save(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }
}

/// The only claim the client reads.
#[derive(Debug, Deserialize)]
struct ExpClaim {
    exp: i64,
}

/// Whether a bearer token is past its `exp` claim.
///
/// Malformed tokens and tokens without a readable `exp` count as expired:
/// the caller's only recourse either way is a fresh login.
pub fn is_token_expired(token: &str) -> bool {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;

    match decode::<ExpClaim>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(data) => data.claims.exp <= chrono::Utc::now().timestamp(),
        Err(_) => true,
    }
}
