use thiserror::Error;

/// Top-level error type for the `lsc-api` crate.
///
/// Every RESTCONF call resolves to a body or to exactly one of these.
/// Callers branch on the variant; nothing downstream inspects message text.
/// `lsc-core` maps these into reconciliation diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Controller responses ────────────────────────────────────────
    /// The controller answered 404: the addressed object does not exist.
    #[error("Not found: {path}")]
    NotFound { path: String },

    /// Any other non-2xx answer. `body` is the controller's diagnostic text, verbatim.
    #[error("Controller rejected request (HTTP {status}): {body}")]
    Rejected { status: u16, body: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The configured controller address cannot carry path segments.
    #[error("Controller address cannot be used as a base URL: {0}")]
    InvalidBaseUrl(String),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Authentication ──────────────────────────────────────────────
    /// The configured token is not a valid header value.
    #[error("Invalid authorization token: {message}")]
    InvalidToken { message: String },
}

impl Error {
    /// Returns `true` if the controller reported the object as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
