// RESTCONF path grammar.
//
// Mounts live under the network-topology tree. Everything configured on
// a device is reached through that device's mount node, the
// `yang-ext:mount` extension, then the device's own YANG container and
// list key. Keys are pushed as raw segments; `ResourcePath` escapes them.

use lsc_api::ResourcePath;

use crate::model::{ResourceId, ResourceKind};

pub const MOUNT_EXTENSION: &str = "yang-ext:mount";

const TOPOLOGY_NODE: [&str; 4] = [
    "network-topology:network-topology",
    "topology",
    "topology-netconf",
    "node",
];

const INTERFACE_CONFIGURATION: [&str; 2] = [
    "Cisco-IOS-XR-ifmgr-cfg:interface-configurations",
    "interface-configuration",
];

const FLEXIBLE_XCONNECT_SERVICE: [&str; 5] = [
    "Cisco-IOS-XR-l2vpn-cfg:l2vpn",
    "database",
    "flexible-xconnect-service-table",
    "vlan-aware-flexible-xconnect-services",
    "vlan-aware-flexible-xconnect-service",
];

/// RESTCONF datastore a path is rooted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datastore {
    /// Declared intent; writable.
    Config,
    /// What the controller observes; read-only.
    Operational,
}

impl Datastore {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Operational => "operational",
        }
    }
}

/// `restconf/{datastore}/network-topology:network-topology/topology/topology-netconf/node/{name}`
pub fn mount_path(datastore: Datastore, name: &str) -> ResourcePath {
    let mut path = ResourcePath::from_segments(["restconf", datastore.as_str()]);
    for segment in TOPOLOGY_NODE {
        path.push(segment);
    }
    path.push(name);
    path
}

fn device_path(kind: ResourceKind, device: &str) -> ResourcePath {
    let container: &[&str] = match kind {
        ResourceKind::Mount => &[],
        ResourceKind::Interface | ResourceKind::Vlan => &INTERFACE_CONFIGURATION,
        ResourceKind::L2vpn => &FLEXIBLE_XCONNECT_SERVICE,
    };
    mount_path(Datastore::Config, device)
        .join([MOUNT_EXTENSION])
        .join(container.iter().copied())
}

impl ResourceId {
    /// Where this object's declared configuration is read and written.
    pub fn config_path(&self) -> ResourcePath {
        match self {
            Self::Mount { name } => mount_path(Datastore::Config, name),
            Self::Interface {
                device,
                active,
                name,
            }
            | Self::Vlan {
                device,
                active,
                name,
            } => device_path(self.kind(), device).join([active.to_string(), name.clone()]),
            Self::L2vpn { device, eviid } => {
                device_path(self.kind(), device).join([eviid.to_string()])
            }
        }
    }

    /// Operational-tree mirror, for kinds whose apply must converge.
    pub fn operational_path(&self) -> Option<ResourcePath> {
        match self {
            Self::Mount { name } => Some(mount_path(Datastore::Operational, name)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use url::Url;

    use super::*;

    const NODE: &str = "restconf/config/network-topology:network-topology/topology/topology-netconf/node";

    #[test]
    fn mount_config_and_operational_paths() {
        let id = ResourceId::mount("xr-1");
        assert_eq!(id.config_path().to_string(), format!("{NODE}/xr-1"));
        assert_eq!(
            id.operational_path().unwrap().to_string(),
            "restconf/operational/network-topology:network-topology/topology/topology-netconf/node/xr-1"
        );
    }

    #[test]
    fn interface_path_goes_through_mount_extension() {
        let id = ResourceId::interface("xr-1", "GigabitEthernet0/0/0/1");
        assert_eq!(
            id.config_path().to_string(),
            format!(
                "{NODE}/xr-1/yang-ext:mount/Cisco-IOS-XR-ifmgr-cfg:interface-configurations/interface-configuration/pre/GigabitEthernet0/0/0/1"
            )
        );
        assert!(id.operational_path().is_none());
    }

    #[test]
    fn interface_name_stays_one_segment() {
        let id = ResourceId::interface("xr-1", "GigabitEthernet0/0/0/1");
        let path = id.config_path();
        assert_eq!(path.segments().last().unwrap(), "GigabitEthernet0/0/0/1");

        let base = Url::parse("http://sdn:8181/").unwrap();
        let url = path.to_url(&base).unwrap();
        assert!(url.path().ends_with("/pre/GigabitEthernet0%2F0%2F0%2F1"), "{url}");
    }

    #[test]
    fn vlan_shares_the_interface_configuration_list() {
        let vlan = ResourceId::vlan("xr-1", "Gi0/0/0/1.100");
        let iface = ResourceId::interface("xr-1", "Gi0/0/0/1.100");
        assert_eq!(vlan.config_path(), iface.config_path());
    }

    #[test]
    fn l2vpn_path_ends_with_eviid() {
        let id = ResourceId::l2vpn("xr-1", 4001);
        assert_eq!(
            id.config_path().to_string(),
            format!(
                "{NODE}/xr-1/yang-ext:mount/Cisco-IOS-XR-l2vpn-cfg:l2vpn/database/flexible-xconnect-service-table/vlan-aware-flexible-xconnect-services/vlan-aware-flexible-xconnect-service/4001"
            )
        );
    }
}
