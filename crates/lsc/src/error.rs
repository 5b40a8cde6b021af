//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text and stable exit codes.

use miette::Diagnostic;
use thiserror::Error;

use lsc_config::ConfigError;
use lsc_core::CoreError;

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
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to controller at {url}")]
    #[diagnostic(
        code(lsc::connection_failed),
        help(
            "Check that the controller is running and its RESTCONF port is reachable.\n\
             Reason: {reason}"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Mount {name} did not connect (status: {status})")]
    #[diagnostic(
        code(lsc::mount_failed),
        help("Check the device address, NETCONF port, and credentials of the mount.")
    )]
    MountFailed { name: String, status: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Controller refused the token (HTTP {status})")]
    #[diagnostic(
        code(lsc::auth_failed),
        help("Verify --token / SERVICE_TOKEN or the profile's token settings.")
    )]
    AuthFailed { status: u16 },

    #[error("No token configured for profile '{profile}'")]
    #[diagnostic(
        code(lsc::no_credentials),
        help("Pass --token, set SERVICE_TOKEN, or add token / token_env to the profile.")
    )]
    NoCredentials { profile: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(lsc::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    // ── Controller ───────────────────────────────────────────────────
    #[error("Controller rejected the request (HTTP {status})")]
    #[diagnostic(code(lsc::rejected), help("{body}"))]
    Rejected { status: u16, body: String },

    #[error("{message}")]
    #[diagnostic(code(lsc::controller))]
    Controller { message: String },

    // ── Timeout ──────────────────────────────────────────────────────
    #[error("{operation} did not complete within {seconds}s")]
    #[diagnostic(
        code(lsc::timeout),
        help("Last observed: {last}\nIncrease the budget with --apply-timeout.")
    )]
    Timeout {
        operation: String,
        seconds: u64,
        last: String,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(lsc::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(code(lsc::profile_not_found), help("Available profiles: {available}"))]
    ProfileNotFound { name: String, available: String },

    #[error("No controller configured")]
    #[diagnostic(
        code(lsc::no_config),
        help(
            "Pass --address (or SERVICE_ADDRESS), or define a profile in\n\
             {path}"
        )
    )]
    NoConfig { path: String },

    #[error("Configuration error: {message}")]
    #[diagnostic(code(lsc::config))]
    Config { message: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render output: {message}")]
    #[diagnostic(code(lsc::render))]
    Render { message: String },
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::MountFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Timeout { .. } => exit_code::TIMEOUT,
            Self::Validation { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotFound { path } => CliError::NotFound {
                resource_type: "object".into(),
                identifier: path,
            },

            CoreError::Rejected {
                status: status @ (401 | 403),
                ..
            } => CliError::AuthFailed { status },

            CoreError::Rejected { status, body } => CliError::Rejected { status, body },

            CoreError::Unreachable { url, reason } => CliError::ConnectionFailed { url, reason },

            CoreError::DeadlineExceeded {
                operation,
                budget,
                last,
            } => CliError::Timeout {
                operation,
                seconds: budget.as_secs(),
                last: last.map_or_else(|| "nothing".into(), |e| e.to_string()),
            },

            CoreError::NotConverged { name, status } | CoreError::MountFailed { name, status } => {
                CliError::MountFailed {
                    name,
                    status: status.to_string(),
                }
            }

            CoreError::Config { message } => CliError::Config { message },

            other @ (CoreError::Vanished { .. } | CoreError::MalformedPayload(_)) => {
                CliError::Controller {
                    message: other.to_string(),
                }
            }
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::UnknownProfile { profile } => CliError::ProfileNotFound {
                name: profile,
                available: String::new(),
            },
            other => CliError::Config {
                message: other.to_string(),
            },
        }
    }
}
