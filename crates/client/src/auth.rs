//! Login/logout against the auth endpoints.
//!
//! Only the token-store contract is exercised here: a successful login saves
//! the bearer token, logout clears it. Refresh and expiry recovery are the
//! caller's concern (the store exposes
//! [`techmart_core::token::is_token_expired`] for that).

use serde::{Deserialize, Serialize};
use techmart_core::EntityId;

use crate::body::RequestBody;
use crate::error::ClientResult;
use crate::gateway::{Gateway, Method};

/// Login request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    /// Bearer token for subsequent calls.
    pub token: String,
    pub user: AuthUser,
}

/// The authenticated admin user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: EntityId,
    pub username: String,
    pub role: String,
}

/// Auth calls, writing through the gateway's token store.
#[derive(Debug, Clone)]
pub struct AuthService {
    gateway: Gateway,
}

impl AuthService {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// Log in and persist the bearer token on success.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<AuthUser> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let result: LoginResult = self
            .gateway
            .expect(Method::POST, "/auth/login", RequestBody::json(&request)?)
            .await?;

        self.gateway.token_store().save(&result.token);
        tracing::info!(username = %result.user.username, "logged in");
        Ok(result.user)
    }

    /// Log out and drop the stored token.
    ///
    /// The token is cleared even when the backend call fails: a dead session
    /// on the server must not keep the client authenticated.
    pub async fn logout(&self) -> ClientResult<()> {
        let result = self
            .gateway
            .ack(Method::POST, "/auth/logout", RequestBody::Empty)
            .await;
        self.gateway.token_store().clear();
        result
    }
}
