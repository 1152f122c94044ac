// ── Core error types ──
//
// User-facing errors from onmsctl-core. Transport-level failures from
// onmsctl-api are folded into a handful of remote kinds; local failures
// (missing arguments, bad YAML, bad `key=value` tokens) never reach the
// network.

use thiserror::Error;

use crate::validate::ValidationError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Local errors ─────────────────────────────────────────────────
    #[error(transparent)]
    MissingArgument(#[from] ValidationError),

    #[error("Malformed {kind} document: {message}")]
    MalformedDocument { kind: &'static str, message: String },

    #[error("Malformed parameter '{token}': expected key=value")]
    MalformedParameter { token: String },

    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Request timed out")]
    Timeout,

    // ── Remote errors ────────────────────────────────────────────────
    #[error("{message}")]
    NotFound { message: String },

    /// Non-success answer; `message` is the server's text when it sent one.
    #[error("{message}")]
    Api { status: Option<u16>, message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<onmsctl_api::Error> for CoreError {
    fn from(err: onmsctl_api::Error) -> Self {
        match err {
            onmsctl_api::Error::Authentication { message } => {
                CoreError::AuthenticationFailed { message }
            }
            onmsctl_api::Error::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                } else {
                    CoreError::Api {
                        status: e.status().map(|s| s.as_u16()),
                        message: e.to_string(),
                    }
                }
            }
            onmsctl_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            onmsctl_api::Error::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
            onmsctl_api::Error::NotFound { message } => CoreError::NotFound { message },
            onmsctl_api::Error::Api { status, message } => CoreError::Api {
                status: Some(status),
                message,
            },
            err @ onmsctl_api::Error::DeployedDeleteFailed { .. } => CoreError::Api {
                status: None,
                message: err.to_string(),
            },
            onmsctl_api::Error::Deserialization { message, body: _ } => CoreError::Api {
                status: None,
                message: format!("Unexpected response from server: {message}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_passes_through() {
        let err = CoreError::from(onmsctl_api::Error::Api {
            status: 500,
            message: "Requisition Test is locked".into(),
        });
        assert_eq!(err.to_string(), "Requisition Test is locked");
    }

    #[test]
    fn failed_deployed_delete_keeps_context() {
        let err = CoreError::from(onmsctl_api::Error::DeployedDeleteFailed {
            name: "Test".into(),
            source: Box::new(onmsctl_api::Error::Api {
                status: 500,
                message: "locked".into(),
            }),
        });
        assert!(matches!(err, CoreError::Api { status: None, .. }));
        assert!(
            err.to_string()
                .starts_with("Pending copy of requisition Test removed"),
            "{err}"
        );
    }

    #[test]
    fn not_found_keeps_message() {
        let err = CoreError::from(onmsctl_api::Error::NotFound {
            message: "/opennms/rest/requisitions/Nope not found".into(),
        });
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[test]
    fn validation_error_displays_verbatim() {
        let err = CoreError::from(ValidationError::Missing("Foreign ID"));
        assert_eq!(err.to_string(), "Foreign ID required");
    }
}
