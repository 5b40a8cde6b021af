// ── VLAN sub-interfaces ──
//
// Structurally an interface configuration with an L2 ethernet-service
// (encapsulation + tag rewrite) and an MTU list. The canonical type keeps
// the nested shape so a read-back compares field for field; `VlanSettings`
// is the flat form operators usually declare.

use serde::Serialize;

use super::interface::ActiveState;

/// Owner recorded on the MTU entry of a VLAN sub-interface.
pub const SUB_VLAN_MTU_OWNER: &str = "sub_vlan";

/// Rewrite applied to sub-interfaces built from [`VlanSettings`].
pub const PUSH_TWO_TAGS: &str = "push2";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mtu {
    pub owner: String,
    pub mtu: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Encapsulation {
    /// e.g. `match-untagged`, `match-dot1q`.
    pub outer_tag_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rewrite {
    pub rewrite_type: String,
    pub inner_tag_type: String,
    pub inner_tag_value: u16,
    pub outer_tag_type: String,
    pub outer_tag_value: u16,
}

/// Desired configuration of a VLAN sub-interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VlanSpec {
    pub device: String,
    /// Sub-interface name, e.g. `GigabitEthernet0/0/0/1.100`.
    pub name: String,
    pub active: ActiveState,
    pub description: String,
    /// `interface-mode-non-physical`, e.g. `l2-transport`.
    pub interface_mode: String,
    pub mtus: Vec<Mtu>,
    pub encapsulation: Encapsulation,
    pub rewrite: Rewrite,
}

/// Flat VLAN parameters, as declared by an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VlanSettings {
    pub mtu: u32,
    pub interface_mode: String,
    pub outer_tag_type: String,
    /// Used for both the inner and outer rewrite tag type.
    pub tag_type: String,
    pub inner_tag: u16,
    pub outer_tag: u16,
}

impl VlanSpec {
    /// Build a `push2` sub-interface with a single `sub_vlan` MTU entry.
    pub fn sub_interface(
        device: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        settings: VlanSettings,
    ) -> Self {
        Self {
            device: device.into(),
            name: name.into(),
            active: ActiveState::default(),
            description: description.into(),
            interface_mode: settings.interface_mode,
            mtus: vec![Mtu {
                owner: SUB_VLAN_MTU_OWNER.into(),
                mtu: settings.mtu,
            }],
            encapsulation: Encapsulation {
                outer_tag_type: settings.outer_tag_type,
            },
            rewrite: Rewrite {
                rewrite_type: PUSH_TWO_TAGS.into(),
                inner_tag_type: settings.tag_type.clone(),
                inner_tag_value: settings.inner_tag,
                outer_tag_type: settings.tag_type,
                outer_tag_value: settings.outer_tag,
            },
        }
    }

    /// MTU of the first entry, which is the one this workspace writes.
    pub fn mtu(&self) -> Option<u32> {
        self.mtus.first().map(|m| m.mtu)
    }

    pub fn tag_type(&self) -> &str {
        &self.rewrite.inner_tag_type
    }

    pub fn inner_tag(&self) -> u16 {
        self.rewrite.inner_tag_value
    }

    pub fn outer_tag(&self) -> u16 {
        self.rewrite.outer_tag_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> VlanSettings {
        VlanSettings {
            mtu: 9000,
            interface_mode: "l2-transport".into(),
            outer_tag_type: "match-untagged".into(),
            tag_type: "match-dot1q".into(),
            inner_tag: 20,
            outer_tag: 10,
        }
    }

    #[test]
    fn sub_interface_fills_nested_structures() {
        let vlan = VlanSpec::sub_interface("xr-1", "Gi0/0/0/1.100", "customer A", settings());

        assert_eq!(vlan.mtus, vec![Mtu { owner: "sub_vlan".into(), mtu: 9000 }]);
        assert_eq!(vlan.encapsulation.outer_tag_type, "match-untagged");
        assert_eq!(vlan.rewrite.rewrite_type, "push2");
        assert_eq!(vlan.rewrite.outer_tag_type, "match-dot1q");
        assert_eq!(vlan.active, ActiveState::Pre);
    }

    #[test]
    fn flat_accessors_mirror_settings() {
        let vlan = VlanSpec::sub_interface("xr-1", "Gi0/0/0/1.100", "customer A", settings());

        assert_eq!(vlan.mtu(), Some(9000));
        assert_eq!(vlan.tag_type(), "match-dot1q");
        assert_eq!(vlan.inner_tag(), 20);
        assert_eq!(vlan.outer_tag(), 10);
    }

    #[test]
    fn empty_mtu_list_has_no_mtu() {
        let mut vlan = VlanSpec::sub_interface("xr-1", "Gi0/0/0/1.100", "", settings());
        vlan.mtus.clear();
        assert_eq!(vlan.mtu(), None);
    }
}
