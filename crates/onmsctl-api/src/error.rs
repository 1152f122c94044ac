use thiserror::Error;

/// Top-level error type for the `onmsctl-api` crate.
///
/// Covers every failure mode of a provisioning call: authentication,
/// transport, non-success responses and undecodable bodies.
/// `onmsctl-core` maps these into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// Credentials rejected by the server (HTTP 401).
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS handshake or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Server responses ────────────────────────────────────────────
    /// The requested resource does not exist (HTTP 404, or an empty
    /// answer to a lookup).
    #[error("{message}")]
    NotFound { message: String },

    /// Any other non-success response. `message` is the server's body
    /// when it sent one, else the status line.
    #[error("Server error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Requisition delete removed the pending copy, then failed on the
    /// deployed one.
    #[error("Pending copy of requisition {name} removed, deleting the deployed copy failed: {source}")]
    DeployedDeleteFailed {
        name: String,
        #[source]
        source: Box<Error>,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if the server had nothing under the requested path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
