// ── Resource identity ──
//
// Every remote object is addressed by a `ResourceId`. The variant selects
// the resource kind, and with it the list key and path grammar the codec
// uses. Identity fields never change after creation: a different identity
// is a different remote object.

use std::fmt;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

use super::interface::ActiveState;

/// The four resource kinds the reconciler manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Mount,
    Interface,
    Vlan,
    L2vpn,
}

impl ResourceKind {
    /// Name of the YANG list wrapping this kind's payload on the wire.
    pub const fn list_key(self) -> &'static str {
        match self {
            Self::Mount => "node",
            Self::Interface | Self::Vlan => "interface-configuration",
            Self::L2vpn => "vlan-aware-flexible-xconnect-service",
        }
    }

    /// Whether applying this kind must wait for the device to report `connected`.
    pub const fn requires_convergence(self) -> bool {
        matches!(self, Self::Mount)
    }
}

/// Identity of one remote object.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ResourceId {
    Mount {
        name: String,
    },
    Interface {
        device: String,
        active: ActiveState,
        name: String,
    },
    Vlan {
        device: String,
        active: ActiveState,
        name: String,
    },
    L2vpn {
        device: String,
        eviid: u32,
    },
}

impl ResourceId {
    pub fn mount(name: impl Into<String>) -> Self {
        Self::Mount { name: name.into() }
    }

    pub fn interface(device: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Interface {
            device: device.into(),
            active: ActiveState::default(),
            name: name.into(),
        }
    }

    pub fn vlan(device: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Vlan {
            device: device.into(),
            active: ActiveState::default(),
            name: name.into(),
        }
    }

    pub fn l2vpn(device: impl Into<String>, eviid: u32) -> Self {
        Self::L2vpn {
            device: device.into(),
            eviid,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::Mount { .. } => ResourceKind::Mount,
            Self::Interface { .. } => ResourceKind::Interface,
            Self::Vlan { .. } => ResourceKind::Vlan,
            Self::L2vpn { .. } => ResourceKind::L2vpn,
        }
    }

    /// The mounted device this object lives under. A mount is its own device.
    pub fn device(&self) -> &str {
        match self {
            Self::Mount { name } => name,
            Self::Interface { device, .. } | Self::Vlan { device, .. } | Self::L2vpn { device, .. } => {
                device
            }
        }
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mount { name } => write!(f, "mount {name}"),
            Self::Interface {
                device,
                active,
                name,
            } => write!(f, "interface {device}/{active}/{name}"),
            Self::Vlan {
                device,
                active,
                name,
            } => write!(f, "vlan {device}/{active}/{name}"),
            Self::L2vpn { device, eviid } => write!(f, "l2vpn {device}/{eviid}"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn every_kind_has_a_list_key() {
        for kind in ResourceKind::iter() {
            assert!(!kind.list_key().is_empty(), "{kind} has no list key");
        }
    }

    #[test]
    fn only_mounts_converge() {
        let converging: Vec<_> = ResourceKind::iter()
            .filter(|k| k.requires_convergence())
            .collect();
        assert_eq!(converging, vec![ResourceKind::Mount]);
    }

    #[test]
    fn kind_parses_from_lowercase() {
        let kind: ResourceKind = "l2vpn".parse().unwrap();
        assert_eq!(kind, ResourceKind::L2vpn);
        assert_eq!(ResourceKind::Vlan.to_string(), "vlan");
    }

    #[test]
    fn identity_display_names_kind_and_key() {
        assert_eq!(ResourceId::mount("xr-1").to_string(), "mount xr-1");
        assert_eq!(
            ResourceId::interface("xr-1", "GigabitEthernet0/0/0/1").to_string(),
            "interface xr-1/pre/GigabitEthernet0/0/0/1"
        );
        assert_eq!(ResourceId::l2vpn("xr-1", 100).to_string(), "l2vpn xr-1/100");
    }
}
