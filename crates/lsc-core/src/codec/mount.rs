// `network-topology:node` entries under `topology-netconf`.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use super::Resource;
use crate::error::CodecError;
use crate::model::{ConnectionStatus, MountSpec, MountStatus, ResourceId, ResourceKind};

/// Config-tree node as written by PUT and echoed by GET.
#[derive(Debug, Serialize, Deserialize)]
pub struct NetconfNode {
    #[serde(rename = "node-id")]
    node_id: String,
    #[serde(rename = "netconf-node-topology:host")]
    host: String,
    #[serde(rename = "netconf-node-topology:port")]
    port: u16,
    #[serde(rename = "netconf-node-topology:username", default)]
    username: String,
    #[serde(rename = "netconf-node-topology:password", default)]
    password: String,
    #[serde(
        rename = "netconf-node-topology:tcp-only",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    tcp_only: Option<bool>,
    #[serde(
        rename = "netconf-node-topology:keepalive-delay",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    keepalive_delay: Option<u32>,
}

/// Operational-tree node; only the connection status is required.
#[derive(Debug, Deserialize)]
pub(super) struct OperationalNode {
    #[serde(rename = "node-id")]
    node_id: String,
    #[serde(rename = "netconf-node-topology:host", default)]
    host: Option<String>,
    #[serde(rename = "netconf-node-topology:port", default)]
    port: Option<u16>,
    #[serde(rename = "netconf-node-topology:connection-status")]
    connection_status: ConnectionStatus,
}

impl Resource for MountSpec {
    const KIND: ResourceKind = ResourceKind::Mount;
    type Wire = NetconfNode;

    fn id(&self) -> ResourceId {
        ResourceId::mount(&self.name)
    }

    fn to_wire(&self) -> NetconfNode {
        NetconfNode {
            node_id: self.name.clone(),
            host: self.host.clone(),
            port: self.port,
            username: self.username.clone(),
            password: self.password.expose_secret().to_owned(),
            tcp_only: self.tcp_only,
            keepalive_delay: self.keepalive_delay,
        }
    }

    fn from_wire(_id: &ResourceId, wire: NetconfNode) -> Result<Self, CodecError> {
        Ok(Self {
            name: wire.node_id,
            host: wire.host,
            port: wire.port,
            username: wire.username,
            password: SecretString::from(wire.password),
            tcp_only: wire.tcp_only,
            keepalive_delay: wire.keepalive_delay,
        })
    }

    // Controllers that hide device credentials return no password.
    fn retain_write_only(&mut self, desired: &Self) {
        if self.password.expose_secret().is_empty() {
            self.password = desired.password.clone();
        }
    }
}

impl From<OperationalNode> for MountStatus {
    fn from(node: OperationalNode) -> Self {
        Self {
            name: node.node_id,
            host: node.host,
            port: node.port,
            connection_status: node.connection_status,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;
    use crate::codec::{decode, decode_status, encode};

    fn spec() -> MountSpec {
        MountSpec::new("xr-1", "207.226.253.52", 830, "root", "root".to_string().into())
    }

    #[test]
    fn encodes_yang_field_names() {
        let bytes = encode(&spec()).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            value,
            json!({
                "node": [{
                    "node-id": "xr-1",
                    "netconf-node-topology:host": "207.226.253.52",
                    "netconf-node-topology:port": 830,
                    "netconf-node-topology:username": "root",
                    "netconf-node-topology:password": "root"
                }]
            })
        );
    }

    #[test]
    fn session_options_round_trip() {
        let mut mount = spec();
        mount.tcp_only = Some(false);
        mount.keepalive_delay = Some(60);

        let bytes = encode(&mount).unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["node"][0]["netconf-node-topology:keepalive-delay"], 60);

        let decoded: MountSpec = decode(&mount.id(), &bytes).unwrap();
        assert_eq!(decoded, mount);
    }

    #[test]
    fn hidden_password_keeps_the_written_one() {
        let body = br#"{"node":[{"node-id":"xr-1","netconf-node-topology:host":"207.226.253.52","netconf-node-topology:port":830,"netconf-node-topology:username":"root"}]}"#;
        let mut observed: MountSpec = decode(&ResourceId::mount("xr-1"), body).unwrap();
        assert!(observed.password.expose_secret().is_empty());

        observed.retain_write_only(&spec());
        assert_eq!(observed, spec());
    }

    #[test]
    fn echoed_password_is_not_replaced() {
        let mut observed = spec();
        observed.password = "rotated".to_string().into();

        observed.retain_write_only(&spec());
        assert_eq!(observed.password.expose_secret(), "rotated");
    }

    #[test]
    fn decodes_operational_status() {
        let body = json!({
            "node": [{
                "node-id": "xr-1",
                "netconf-node-topology:host": "207.226.253.52",
                "netconf-node-topology:port": 830,
                "netconf-node-topology:connection-status": "unable-to-connect",
                "netconf-node-topology:available-capabilities": {}
            }]
        });
        let status = decode_status(&serde_json::to_vec(&body).unwrap()).unwrap();
        assert_eq!(status.name, "xr-1");
        assert_eq!(status.port, Some(830));
        assert_eq!(status.connection_status, ConnectionStatus::UnableToConnect);
    }

    #[test]
    fn operational_node_without_status_is_malformed() {
        let body = br#"{"node":[{"node-id":"xr-1"}]}"#;
        assert!(matches!(decode_status(body), Err(CodecError::Json(_))));
    }

    #[test]
    fn decoding_with_foreign_identity_is_rejected() {
        let bytes = encode(&spec()).unwrap();
        let result = decode::<MountSpec>(&ResourceId::l2vpn("xr-1", 1), &bytes);
        assert!(matches!(
            result,
            Err(CodecError::KindMismatch {
                expected: ResourceKind::Mount,
                ..
            })
        ));
    }
}
