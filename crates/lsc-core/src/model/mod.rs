// ── Canonical domain model ──
//
// Desired-state and observed-state types as the rest of the workspace sees
// them. Wire shapes (YANG field names, nested containers, list envelopes)
// live in `crate::codec`; nothing here knows about JSON key spelling.

pub mod interface;
pub mod l2vpn;
pub mod mount;
pub mod resource_id;
pub mod vlan;

pub use interface::{ActiveState, InterfaceSpec};
pub use l2vpn::L2vpnSpec;
pub use mount::{ConnectionStatus, MountSpec, MountStatus};
pub use resource_id::{ResourceId, ResourceKind};
pub use vlan::{Encapsulation, Mtu, Rewrite, VlanSettings, VlanSpec};
