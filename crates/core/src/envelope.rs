//! The uniform `{ code, message, result }` response envelope.
//!
//! Every backend endpoint wraps its payload in this envelope. A `code` of
//! [`SUCCESS_CODE`] signals success; any other value is an application-level
//! failure even when the HTTP status was 2xx. The transport layer returns
//! envelopes as data, and [`Envelope::into_result`] is the single place where
//! soft failure codes become typed errors.

use serde::{Deserialize, Serialize};

/// The application-level success sentinel.
pub const SUCCESS_CODE: i64 = 1000;

/// Response envelope returned by every backend endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Application status code. `1000` means success.
    pub code: i64,
    /// Human-readable message, shown to the user on failure.
    pub message: String,
    /// Payload. Absent on failures and on acknowledge-only endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

/// Failure modes when unwrapping an [`Envelope`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    /// The envelope carried a non-success application code.
    #[error("API error {code}: {message}")]
    Application {
        /// The non-1000 application code.
        code: i64,
        /// Server-provided message for the user.
        message: String,
    },

    /// The envelope reported success but carried no payload.
    #[error("API returned success without data")]
    NoData,
}

impl<T> Envelope<T> {
    /// Whether the application code signals success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Unwrap the payload, converting soft failure codes into errors.
    ///
    /// A success code without a payload is an error: callers of data
    /// endpoints always expect `result` to be present.
    pub fn into_result(self) -> Result<T, EnvelopeError> {
        if !self.is_success() {
            return Err(EnvelopeError::Application {
                code: self.code,
                message: self.message,
            });
        }
        self.result.ok_or(EnvelopeError::NoData)
    }

    /// Unwrap an acknowledge-only envelope (delete, status update).
    ///
    /// Only the code is checked; a missing `result` is fine here.
    pub fn into_ack(self) -> Result<(), EnvelopeError> {
        if !self.is_success() {
            return Err(EnvelopeError::Application {
                code: self.code,
                message: self.message,
            });
        }
        Ok(())
    }
}
