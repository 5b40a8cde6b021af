// ── Core error types ──
//
// What the desired-state provider sees. Transport failures from `lsc-api`
// are translated by variant into the reconciliation taxonomy: absent,
// unreachable, rejected, malformed, deadline exceeded. Classification
// never looks at message text.

use std::time::Duration;

use thiserror::Error;

use crate::model::{ConnectionStatus, ResourceKind};
use crate::retry::RetryPolicy;

/// Payload decode/encode failures. All of them mean the controller and
/// this workspace disagree about a schema.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed payload: no `{key}` list in response")]
    MissingList { key: &'static str },

    #[error("malformed payload: `{key}` is not a list")]
    NotAList { key: &'static str },

    #[error("malformed payload: `{key}` list is empty")]
    EmptyList { key: &'static str },

    #[error("malformed payload: expected 2 attachment circuits, found {found}")]
    CircuitCount { found: usize },

    #[error("{id} does not address a {expected} resource")]
    KindMismatch { expected: ResourceKind, id: String },
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Controller answers ───────────────────────────────────────────
    /// The addressed object does not exist on the controller.
    #[error("Not found on controller: {path}")]
    NotFound { path: String },

    /// Non-2xx answer; `body` is the controller diagnostic, verbatim.
    #[error("Controller rejected request (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    // ── Connectivity ─────────────────────────────────────────────────
    #[error("Cannot reach controller at {url}: {reason}")]
    Unreachable { url: String, reason: String },

    #[error("{operation} did not complete within {budget:?}{}", describe_last(.last.as_deref()))]
    DeadlineExceeded {
        operation: String,
        budget: Duration,
        /// Most recent failure (or non-converged status) before time ran out.
        last: Option<Box<CoreError>>,
    },

    // ── Convergence ──────────────────────────────────────────────────
    #[error("Mount {name} has not connected (status: {status})")]
    NotConverged {
        name: String,
        status: ConnectionStatus,
    },

    #[error("Mount {name} reported terminal status {status}")]
    MountFailed {
        name: String,
        status: ConnectionStatus,
    },

    #[error("{id} was applied but is absent on read-back")]
    Vanished { id: String },

    // ── Data ─────────────────────────────────────────────────────────
    #[error(transparent)]
    MalformedPayload(#[from] CodecError),

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

fn describe_last(last: Option<&CoreError>) -> String {
    last.map(|e| format!(" (last error: {e})")).unwrap_or_default()
}

impl CoreError {
    /// Whether a failed apply attempt may succeed if repeated.
    ///
    /// Everything the transport reports is retryable except the HTTP
    /// statuses the policy marks as terminal. Decode and wiring failures
    /// never are.
    pub fn is_retryable(&self, policy: &RetryPolicy) -> bool {
        match self {
            Self::Unreachable { .. } | Self::NotFound { .. } => true,
            Self::Rejected { status, .. } => !policy.terminal_statuses.contains(status),
            _ => false,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<lsc_api::Error> for CoreError {
    fn from(err: lsc_api::Error) -> Self {
        match err {
            lsc_api::Error::NotFound { path } => CoreError::NotFound { path },
            lsc_api::Error::Rejected { status, body } => CoreError::Rejected { status, body },
            lsc_api::Error::Transport(e) => CoreError::Unreachable {
                url: e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string),
                reason: e.to_string(),
            },
            lsc_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            lsc_api::Error::InvalidBaseUrl(address) => CoreError::Config {
                message: format!("Controller address cannot be used as a base URL: {address}"),
            },
            lsc_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            lsc_api::Error::InvalidToken { message } => CoreError::Config { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_statuses_are_not_retried() {
        let policy = RetryPolicy::default();
        let bad_request = CoreError::Rejected {
            status: 400,
            body: "invalid-value".into(),
        };
        let unavailable = CoreError::Rejected {
            status: 503,
            body: String::new(),
        };
        assert!(!bad_request.is_retryable(&policy));
        assert!(unavailable.is_retryable(&policy));
    }

    #[test]
    fn malformed_payload_is_never_retried() {
        let err = CoreError::from(CodecError::EmptyList { key: "node" });
        assert!(!err.is_retryable(&RetryPolicy::default()));
        assert_eq!(err.to_string(), "malformed payload: `node` list is empty");
    }

    #[test]
    fn transport_not_found_maps_by_variant() {
        let err = CoreError::from(lsc_api::Error::NotFound {
            path: "restconf/config/x".into(),
        });
        assert!(err.is_not_found());
    }

    #[test]
    fn deadline_message_includes_last_error() {
        let err = CoreError::DeadlineExceeded {
            operation: "apply mount xr-1".into(),
            budget: Duration::from_secs(45),
            last: Some(Box::new(CoreError::NotConverged {
                name: "xr-1".into(),
                status: ConnectionStatus::Connecting,
            })),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("apply mount xr-1 did not complete within 45s"), "{msg}");
        assert!(msg.contains("status: connecting"), "{msg}");
    }
}
