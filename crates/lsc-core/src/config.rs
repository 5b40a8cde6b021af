// ── Runtime connection configuration ──
//
// These types describe *how* to reach a controller and *how patiently* to
// reconcile against it. They carry credential data and tuning, but never
// touch disk. The CLI constructs a `ControllerConfig` and hands it in.

use std::path::PathBuf;
use std::time::Duration;

use lsc_api::{TlsMode, TransportConfig};
use secrecy::SecretString;

use crate::model::ConnectionStatus;
use crate::retry::RetryPolicy;

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (lab controllers with self-signed certs).
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        }
    }
}

/// What `delete` reports when the controller refuses or cannot be reached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Report the error but let the caller forget the object anyway.
    #[default]
    BestEffort,
    /// Only a confirmed delete (or an already-absent object) counts.
    Strict,
}

/// Timing and failure classification for apply/verify/destroy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileConfig {
    /// Wall-clock budget of one apply, covering retries and convergence.
    pub apply_timeout: Duration,
    /// Delay between operational-status polls of a mount.
    pub poll_interval: Duration,
    pub retry: RetryPolicy,
    /// Connection statuses that end convergence with `MountFailed`.
    /// Empty means poll until the deadline whatever the status.
    pub fatal_statuses: Vec<ConnectionStatus>,
    pub delete_policy: DeletePolicy,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            apply_timeout: Duration::from_secs(45),
            poll_interval: Duration::from_secs(5),
            retry: RetryPolicy::default(),
            fatal_statuses: Vec::new(),
            delete_policy: DeletePolicy::default(),
        }
    }
}

/// Configuration for reconciling against a single controller.
///
/// Built by the CLI, passed to `Reconciler`; core never reads config files.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Host name, IP, or URL with scheme (e.g. `https://sdn.lab`).
    pub address: String,
    pub port: u16,
    /// Sent verbatim as the `Authorization` header.
    pub token: SecretString,
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
    pub reconcile: ReconcileConfig,
}

impl ControllerConfig {
    pub fn new(address: impl Into<String>, port: u16, token: SecretString) -> Self {
        Self {
            address: address.into(),
            port,
            token,
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
            reconcile: ReconcileConfig::default(),
        }
    }

    pub fn transport(&self) -> TransportConfig {
        TransportConfig {
            tls: TlsMode::from(&self.tls),
            timeout: self.timeout,
        }
    }
}
