use serde::{Deserialize, Serialize};

use super::Resource;
use crate::error::CodecError;
use crate::model::{L2vpnSpec, ResourceId, ResourceKind};

/// `vlan-aware-flexible-xconnect-service` entry.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FlexibleXconnectService {
    eviid: u32,
    vlan_aware_fxc_attachment_circuits: AttachmentCircuits,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AttachmentCircuits {
    #[serde(default)]
    vlan_aware_fxc_attachment_circuit: Vec<AttachmentCircuit>,
}

#[derive(Debug, Serialize, Deserialize)]
struct AttachmentCircuit {
    name: String,
}

impl Resource for L2vpnSpec {
    const KIND: ResourceKind = ResourceKind::L2vpn;
    type Wire = FlexibleXconnectService;

    fn id(&self) -> ResourceId {
        ResourceId::l2vpn(&self.device, self.eviid)
    }

    fn to_wire(&self) -> FlexibleXconnectService {
        FlexibleXconnectService {
            eviid: self.eviid,
            vlan_aware_fxc_attachment_circuits: AttachmentCircuits {
                vlan_aware_fxc_attachment_circuit: self
                    .circuits()
                    .into_iter()
                    .map(|name| AttachmentCircuit { name: name.to_owned() })
                    .collect(),
            },
        }
    }

    // Circuits are positional: element 0 is always `circuit_1`.
    fn from_wire(id: &ResourceId, wire: FlexibleXconnectService) -> Result<Self, CodecError> {
        let circuits = wire
            .vlan_aware_fxc_attachment_circuits
            .vlan_aware_fxc_attachment_circuit;
        let found = circuits.len();
        let Ok([first, second]) = <[AttachmentCircuit; 2]>::try_from(circuits) else {
            return Err(CodecError::CircuitCount { found });
        };

        Ok(Self {
            device: id.device().to_owned(),
            eviid: wire.eviid,
            circuit_1: first.name,
            circuit_2: second.name,
        })
    }
}
