use serde::{Deserialize, Serialize};

use super::Resource;
use crate::error::CodecError;
use crate::model::{ActiveState, InterfaceSpec, ResourceId, ResourceKind};

/// `Cisco-IOS-XR-ifmgr-cfg:interface-configuration` entry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InterfaceConfiguration {
    active: ActiveState,
    interface_name: String,
    #[serde(default)]
    description: String,
}

impl Resource for InterfaceSpec {
    const KIND: ResourceKind = ResourceKind::Interface;
    type Wire = InterfaceConfiguration;

    fn id(&self) -> ResourceId {
        ResourceId::Interface {
            device: self.device.clone(),
            active: self.active,
            name: self.name.clone(),
        }
    }

    fn to_wire(&self) -> InterfaceConfiguration {
        InterfaceConfiguration {
            active: self.active,
            interface_name: self.name.clone(),
            description: self.description.clone(),
        }
    }

    fn from_wire(id: &ResourceId, wire: InterfaceConfiguration) -> Result<Self, CodecError> {
        Ok(Self {
            device: id.device().to_owned(),
            name: wire.interface_name,
            description: wire.description,
            active: wire.active,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;
    use crate::codec::{decode, encode};

    #[test]
    fn encodes_interface_configuration() {
        let spec = InterfaceSpec::new("xr-1", "GigabitEthernet0/0/0/1", "uplink");
        let value: Value = serde_json::from_slice(&encode(&spec).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "interface-configuration": [{
                    "active": "pre",
                    "interface-name": "GigabitEthernet0/0/0/1",
                    "description": "uplink"
                }]
            })
        );
    }

    #[test]
    fn device_comes_from_identity() {
        let body = br#"{"interface-configuration":[{"active":"act","interface-name":"Gi0/0/0/2"}]}"#;
        let id = ResourceId::interface("xr-7", "Gi0/0/0/2");
        let decoded: InterfaceSpec = decode(&id, body).unwrap();

        assert_eq!(decoded.device, "xr-7");
        assert_eq!(decoded.active, ActiveState::Act);
        assert_eq!(decoded.description, "");
    }

    #[test]
    fn round_trip_preserves_every_field() {
        let mut spec = InterfaceSpec::new("xr-1", "Bundle-Ether10", "core / lag");
        spec.active = ActiveState::Act;
        let decoded: InterfaceSpec = decode(&spec.id(), &encode(&spec).unwrap()).unwrap();
        assert_eq!(decoded, spec);
    }

    #[test]
    fn vlan_identity_cannot_decode_as_interface() {
        let spec = InterfaceSpec::new("xr-1", "Gi0/0/0/1", "");
        let id = ResourceId::vlan("xr-1", "Gi0/0/0/1");
        let result = decode::<InterfaceSpec>(&id, &encode(&spec).unwrap());
        assert!(matches!(result, Err(CodecError::KindMismatch { .. })));
    }
}
