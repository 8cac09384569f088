//! Unified SDK error types.
//!
//! Two views of the same failure:
//!
//! - [`SdkError`] — the rich error returned to callers for chaining.
//! - [`Fault`] — the flattened `{kind, message}` record stored in a resource
//!   snapshot, with a closed [`FaultKind`] taxonomy so consumers can branch
//!   (e.g. force re-authentication on `Unauthorized`) without string matching.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The consumer's scope was cancelled before the request resolved; the
    /// resolution was dropped without touching the snapshot.
    #[error("Operation cancelled")]
    Cancelled,

    /// Another mutation on the same resource is still in flight.
    #[error("Mutation rejected: another mutation is in flight for this resource")]
    MutationInFlight,

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// Classify this error into the closed snapshot taxonomy.
    pub fn kind(&self) -> FaultKind {
        match self {
            SdkError::Http(HttpError::Unauthorized) => FaultKind::Unauthorized,
            SdkError::Http(HttpError::BadRequest(_)) | SdkError::Http(HttpError::NotFound(_)) => {
                FaultKind::Validation
            }
            SdkError::Http(_) => FaultKind::Transport,
            SdkError::Validation(_) => FaultKind::Validation,
            _ => FaultKind::Unknown,
        }
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Closed failure taxonomy attached to every snapshot error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// Expired or invalid credential — callers should force re-authentication.
    Unauthorized,
    /// The request itself was rejected (client-side guard or 4xx).
    Validation,
    /// Network unreachable or server-side failure; retriable by the user.
    Transport,
    Unknown,
}

/// The failure record a snapshot holds: kind plus a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fault {
    pub kind: FaultKind,
    pub message: String,
}

impl Fault {
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl From<&SdkError> for Fault {
    fn from(err: &SdkError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_maps_to_unauthorized_kind() {
        let err = SdkError::Http(HttpError::Unauthorized);
        assert_eq!(err.kind(), FaultKind::Unauthorized);
    }

    #[test]
    fn test_client_errors_map_to_validation() {
        let bad = SdkError::Http(HttpError::BadRequest("amount too large".into()));
        assert_eq!(bad.kind(), FaultKind::Validation);
        let guard = SdkError::Validation("no payment method on file".into());
        assert_eq!(guard.kind(), FaultKind::Validation);
    }

    #[test]
    fn test_server_errors_map_to_transport() {
        let err = SdkError::Http(HttpError::ServerError {
            status: 502,
            body: "bad gateway".into(),
        });
        assert_eq!(err.kind(), FaultKind::Transport);
    }

    #[test]
    fn test_fault_carries_message() {
        let err = SdkError::Http(HttpError::Unauthorized);
        let fault = Fault::from(&err);
        assert_eq!(fault.kind, FaultKind::Unauthorized);
        assert!(!fault.message.is_empty());
    }
}
