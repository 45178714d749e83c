//! Unified error taxonomy for the client.
//!
//! The backend mixes two failure channels: transport-level HTTP status codes
//! (hard failures) and application-level envelope codes (soft failures that
//! arrive in a 2xx body). Both are folded into [`ClientError`] so callers
//! match once instead of mixing exception handling with manual code checks.

use techmart_core::envelope::EnvelopeError;

/// Convenience alias for client call results.
pub type ClientResult<T> = Result<T, ClientError>;

/// Every way a client call can fail.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend returned a non-2xx status code.
    #[error("HTTP error ({status}): {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The envelope carried a non-success application code.
    #[error("API error {code}: {message}")]
    Application {
        /// Envelope code (anything other than 1000).
        code: i64,
        /// Server-provided message, shown to the user.
        message: String,
    },

    /// The envelope reported success but carried no payload.
    #[error("API returned success without data")]
    NoData,

    /// The response body was not a valid envelope, or the payload did not
    /// match the expected entity shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side validation rejected the request before any network call.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Application { code, message } => Self::Application { code, message },
            EnvelopeError::NoData => Self::NoData,
        }
    }
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}
