// ── NETCONF mount points ──
//
// A mount asks the controller to open and hold a NETCONF session to a
// device. `MountSpec` is the declared intent (config tree); `MountStatus`
// mirrors what the controller reports in the operational tree.

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Desired NETCONF mount of one device under `topology-netconf`.
#[derive(Debug, Clone, Serialize)]
pub struct MountSpec {
    /// Node id; also the device name every sub-resource is scoped under.
    pub name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: SecretString,
    /// Plain TCP instead of SSH transport.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_only: Option<bool>,
    /// Seconds between keepalive RPCs on the session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keepalive_delay: Option<u32>,
}

impl MountSpec {
    pub fn new(
        name: impl Into<String>,
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: SecretString,
    ) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            username: username.into(),
            password,
            tcp_only: None,
            keepalive_delay: None,
        }
    }
}

impl PartialEq for MountSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.host == other.host
            && self.port == other.port
            && self.username == other.username
            && self.password.expose_secret() == other.password.expose_secret()
            && self.tcp_only == other.tcp_only
            && self.keepalive_delay == other.keepalive_delay
    }
}

impl Eq for MountSpec {}

// ── Connection status ───────────────────────────────────────────────

/// `netconf-node-topology:connection-status` as reported by the controller.
///
/// Only `Connected` is converged. Unknown strings are kept verbatim so a
/// newer controller never breaks decoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    UnableToConnect,
    Other(String),
}

impl ConnectionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Connecting => "connecting",
            Self::Connected => "connected",
            Self::UnableToConnect => "unable-to-connect",
            Self::Other(s) => s,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected)
    }
}

impl From<String> for ConnectionStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "connecting" => Self::Connecting,
            "connected" => Self::Connected,
            "unable-to-connect" => Self::UnableToConnect,
            _ => Self::Other(s),
        }
    }
}

impl From<&str> for ConnectionStatus {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

impl From<ConnectionStatus> for String {
    fn from(status: ConnectionStatus) -> Self {
        match status {
            ConnectionStatus::Other(s) => s,
            known => known.as_str().to_owned(),
        }
    }
}

impl FromStr for ConnectionStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Read-only operational view of a mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountStatus {
    pub name: String,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub connection_status: ConnectionStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn known_statuses_parse() {
        assert_eq!(ConnectionStatus::from("connecting"), ConnectionStatus::Connecting);
        assert_eq!(ConnectionStatus::from("connected"), ConnectionStatus::Connected);
        assert_eq!(
            ConnectionStatus::from("unable-to-connect"),
            ConnectionStatus::UnableToConnect
        );
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status: ConnectionStatus = "authentication-failed".parse().unwrap();
        assert_eq!(status, ConnectionStatus::Other("authentication-failed".into()));
        assert_eq!(status.to_string(), "authentication-failed");
        assert!(!status.is_connected());
    }

    #[test]
    fn status_serializes_as_plain_string() {
        let json = serde_json::to_string(&ConnectionStatus::UnableToConnect).unwrap();
        assert_eq!(json, "\"unable-to-connect\"");
    }

    #[test]
    fn password_is_never_serialized() {
        let spec = MountSpec::new("xr-1", "10.0.0.1", 830, "admin", "s3cret".to_string().into());
        let json = serde_json::to_value(&spec).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["host"], "10.0.0.1");
    }

    #[test]
    fn equality_compares_password() {
        let a = MountSpec::new("xr-1", "10.0.0.1", 830, "admin", "one".to_string().into());
        let mut b = a.clone();
        assert_eq!(a, b);
        b.password = "two".to_string().into();
        assert_ne!(a, b);
    }
}
