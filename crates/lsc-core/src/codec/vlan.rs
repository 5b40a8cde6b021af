// VLAN sub-interfaces share the interface-configuration list but carry
// the L2 ethernet-service and MTU sub-trees.

use serde::{Deserialize, Serialize};

use super::Resource;
use crate::error::CodecError;
use crate::model::{ActiveState, Encapsulation, Mtu, ResourceId, ResourceKind, Rewrite, VlanSpec};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct VlanConfiguration {
    active: ActiveState,
    interface_name: String,
    #[serde(default)]
    description: String,
    interface_mode_non_physical: String,
    #[serde(rename = "Cisco-IOS-XR-l2-eth-infra-cfg:ethernet-service")]
    ethernet_service: EthernetService,
    #[serde(alias = "Cisco-IOS-XR-ifmgr-cfg:mtus")]
    mtus: MtuList,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EthernetService {
    encapsulation: WireEncapsulation,
    rewrite: WireRewrite,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct WireEncapsulation {
    outer_tag_type: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct WireRewrite {
    rewrite_type: String,
    inner_tag_type: String,
    inner_tag_value: u16,
    outer_tag_type: String,
    outer_tag_value: u16,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MtuList {
    #[serde(default)]
    mtu: Vec<WireMtu>,
}

#[derive(Debug, Serialize, Deserialize)]
struct WireMtu {
    owner: String,
    mtu: u32,
}

impl Resource for VlanSpec {
    const KIND: ResourceKind = ResourceKind::Vlan;
    type Wire = VlanConfiguration;

    fn id(&self) -> ResourceId {
        ResourceId::Vlan {
            device: self.device.clone(),
            active: self.active,
            name: self.name.clone(),
        }
    }

    fn to_wire(&self) -> VlanConfiguration {
        VlanConfiguration {
            active: self.active,
            interface_name: self.name.clone(),
            description: self.description.clone(),
            interface_mode_non_physical: self.interface_mode.clone(),
            ethernet_service: EthernetService {
                encapsulation: WireEncapsulation {
                    outer_tag_type: self.encapsulation.outer_tag_type.clone(),
                },
                rewrite: WireRewrite {
                    rewrite_type: self.rewrite.rewrite_type.clone(),
                    inner_tag_type: self.rewrite.inner_tag_type.clone(),
                    inner_tag_value: self.rewrite.inner_tag_value,
                    outer_tag_type: self.rewrite.outer_tag_type.clone(),
                    outer_tag_value: self.rewrite.outer_tag_value,
                },
            },
            mtus: MtuList {
                mtu: self
                    .mtus
                    .iter()
                    .map(|m| WireMtu {
                        owner: m.owner.clone(),
                        mtu: m.mtu,
                    })
                    .collect(),
            },
        }
    }

    fn from_wire(id: &ResourceId, wire: VlanConfiguration) -> Result<Self, CodecError> {
        let EthernetService {
            encapsulation,
            rewrite,
        } = wire.ethernet_service;

        Ok(Self {
            device: id.device().to_owned(),
            name: wire.interface_name,
            active: wire.active,
            description: wire.description,
            interface_mode: wire.interface_mode_non_physical,
            mtus: wire
                .mtus
                .mtu
                .into_iter()
                .map(|m| Mtu {
                    owner: m.owner,
                    mtu: m.mtu,
                })
                .collect(),
            encapsulation: Encapsulation {
                outer_tag_type: encapsulation.outer_tag_type,
            },
            rewrite: Rewrite {
                rewrite_type: rewrite.rewrite_type,
                inner_tag_type: rewrite.inner_tag_type,
                inner_tag_value: rewrite.inner_tag_value,
                outer_tag_type: rewrite.outer_tag_type,
                outer_tag_value: rewrite.outer_tag_value,
            },
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
    use crate::model::VlanSettings;

    fn spec() -> VlanSpec {
        VlanSpec::sub_interface(
            "xr-1",
            "GigabitEthernet0/0/0/1.100",
            "customer A",
            VlanSettings {
                mtu: 9000,
                interface_mode: "l2-transport".into(),
                outer_tag_type: "match-untagged".into(),
                tag_type: "match-dot1q".into(),
                inner_tag: 20,
                outer_tag: 10,
            },
        )
    }

    #[test]
    fn encodes_nested_service_and_mtu_list() {
        let value: Value = serde_json::from_slice(&encode(&spec()).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "interface-configuration": [{
                    "active": "pre",
                    "interface-name": "GigabitEthernet0/0/0/1.100",
                    "description": "customer A",
                    "interface-mode-non-physical": "l2-transport",
                    "Cisco-IOS-XR-l2-eth-infra-cfg:ethernet-service": {
                        "encapsulation": { "outer-tag-type": "match-untagged" },
                        "rewrite": {
                            "rewrite-type": "push2",
                            "inner-tag-type": "match-dot1q",
                            "inner-tag-value": 20,
                            "outer-tag-type": "match-dot1q",
                            "outer-tag-value": 10
                        }
                    },
                    "mtus": {
                        "mtu": [{ "owner": "sub_vlan", "mtu": 9000 }]
                    }
                }]
            })
        );
    }

    #[test]
    fn round_trip_preserves_nested_structures() {
        let mut vlan = spec();
        vlan.mtus.push(Mtu {
            owner: "GigabitEthernet".into(),
            mtu: 1514,
        });
        let decoded: VlanSpec = decode(&vlan.id(), &encode(&vlan).unwrap()).unwrap();
        assert_eq!(decoded, vlan);
        assert_eq!(decoded.mtu(), Some(9000));
    }

    #[test]
    fn accepts_module_qualified_mtus_member() {
        let body = json!({
            "interface-configuration": [{
                "active": "pre",
                "interface-name": "Gi0/0/0/1.100",
                "interface-mode-non-physical": "l2-transport",
                "Cisco-IOS-XR-l2-eth-infra-cfg:ethernet-service": {
                    "encapsulation": { "outer-tag-type": "match-untagged" },
                    "rewrite": {
                        "rewrite-type": "push2",
                        "inner-tag-type": "match-dot1q",
                        "inner-tag-value": 1,
                        "outer-tag-type": "match-dot1q",
                        "outer-tag-value": 2
                    }
                },
                "Cisco-IOS-XR-ifmgr-cfg:mtus": { "mtu": [{ "owner": "sub_vlan", "mtu": 1500 }] }
            }]
        });
        let id = ResourceId::vlan("xr-1", "Gi0/0/0/1.100");
        let vlan: VlanSpec = decode(&id, &serde_json::to_vec(&body).unwrap()).unwrap();
        assert_eq!(vlan.mtu(), Some(1500));
        assert_eq!(vlan.outer_tag(), 2);
    }

    #[test]
    fn plain_interface_entry_is_not_a_vlan() {
        let body = br#"{"interface-configuration":[{"active":"pre","interface-name":"Gi0/0/0/1"}]}"#;
        let id = ResourceId::vlan("xr-1", "Gi0/0/0/1");
        assert!(matches!(decode::<VlanSpec>(&id, body), Err(CodecError::Json(_))));
    }
}
