//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use onmsctl_config::ConfigError;
use onmsctl_core::{ApiError, CoreError, ValidationError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Local input ──────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(
        code(onmsctl::missing_argument),
        help("Run the command with --help to see its arguments.")
    )]
    MissingArgument(#[from] ValidationError),

    #[error("Malformed {kind} document: {message}")]
    #[diagnostic(
        code(onmsctl::malformed_document),
        help("Check the YAML against the output of the matching `get` command.")
    )]
    MalformedDocument { kind: String, message: String },

    #[error("Malformed parameter '{token}'")]
    #[diagnostic(
        code(onmsctl::malformed_parameter),
        help("Parameters take the form key=value, e.g. -p 'matchBehavior=ALL_PARAMETERS'")
    )]
    MalformedParameter { token: String },

    #[error("Cannot read input from {path}")]
    #[diagnostic(code(onmsctl::input))]
    Input {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to server at {url}")]
    #[diagnostic(
        code(onmsctl::connection_failed),
        help(
            "Check that OpenNMS is running and reachable.\n\
             Reason: {reason}\n\
             Set the server with --url or: onmsctl config set url <URL>"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(onmsctl::timeout),
        help("Increase the timeout with --timeout or check server responsiveness.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(onmsctl::auth_failed),
        help(
            "Verify the username and password of the active profile.\n\
             Run: onmsctl config set-password"
        )
    )]
    AuthFailed { message: String },

    #[error("No password configured for profile '{profile}'")]
    #[diagnostic(
        code(onmsctl::no_credentials),
        help(
            "Store one with: onmsctl config set-password --profile {profile}\n\
             Or pass --password / set ONMSCTL_PASSWORD."
        )
    )]
    NoCredentials { profile: String },

    // ── Remote ───────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(code(onmsctl::not_found))]
    NotFound { message: String },

    #[error("{message}")]
    #[diagnostic(code(onmsctl::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(onmsctl::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(onmsctl::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: onmsctl config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(onmsctl::config))]
    Config { message: String },

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(onmsctl::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to encode output as JSON: {0}")]
    #[diagnostic(code(onmsctl::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode output as YAML: {0}")]
    #[diagnostic(code(onmsctl::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout => exit_code::TIMEOUT,
            Self::MissingArgument(_)
            | Self::MalformedDocument { .. }
            | Self::MalformedParameter { .. }
            | Self::Input { .. }
            | Self::Validation { .. }
            | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::MissingArgument(e) => CliError::MissingArgument(e),
            CoreError::MalformedDocument { kind, message } => CliError::MalformedDocument {
                kind: kind.into(),
                message,
            },
            CoreError::MalformedParameter { token } => CliError::MalformedParameter { token },
            CoreError::ConnectionFailed { url, reason } => {
                CliError::ConnectionFailed { url, reason }
            }
            CoreError::AuthenticationFailed { message } => CliError::AuthFailed { message },
            CoreError::Timeout => CliError::Timeout,
            CoreError::NotFound { message } => CliError::NotFound { message },
            CoreError::Api { message, .. } => CliError::ApiError { message },
            CoreError::Config { message } => CliError::Config { message },
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CoreError::from(err).into()
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Io(e) => CliError::Io(e),
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_kind() {
        let missing = CliError::from(CoreError::from(ValidationError::Missing("Foreign ID")));
        assert_eq!(missing.exit_code(), exit_code::USAGE);
        assert_eq!(missing.to_string(), "Foreign ID required");

        let not_found = CliError::from(CoreError::NotFound {
            message: "/opennms/rest/requisitions/Nope not found".into(),
        });
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);

        let auth = CliError::from(CoreError::AuthenticationFailed {
            message: "credentials rejected by server".into(),
        });
        assert_eq!(auth.exit_code(), exit_code::AUTH);

        let remote = CliError::from(CoreError::Api {
            status: Some(500),
            message: "Requisition Test is locked".into(),
        });
        assert_eq!(remote.exit_code(), exit_code::GENERAL);
        assert_eq!(remote.to_string(), "Requisition Test is locked");
    }

    #[test]
    fn malformed_parameter_is_a_usage_error() {
        let err = CliError::from(CoreError::MalformedParameter {
            token: "broken".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
