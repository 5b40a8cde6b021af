// ── Payload codec ──
//
// Pure mapping between canonical model types and the YANG-shaped JSON the
// controller speaks, plus the RESTCONF path grammar. Each resource kind
// supplies its wire schema through `Resource`; the list-of-one envelope
// and path encoding are shared.

mod envelope;
mod interface;
mod l2vpn;
mod mount;
mod paths;
mod vlan;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::CodecError;
use crate::model::{MountStatus, ResourceId, ResourceKind};

pub use paths::{Datastore, MOUNT_EXTENSION, mount_path};

/// A reconcilable resource kind: identity, wire schema, and conversions.
pub trait Resource: Sized + Send + Sync {
    const KIND: ResourceKind;

    /// The single element carried inside the envelope list.
    type Wire: Serialize + DeserializeOwned;

    fn id(&self) -> ResourceId;

    fn to_wire(&self) -> Self::Wire;

    /// Rebuild the canonical value. `id` supplies fields the wire element
    /// does not carry (the owning device for sub-resources).
    fn from_wire(id: &ResourceId, wire: Self::Wire) -> Result<Self, CodecError>;

    /// Fill fields the controller accepts on write but leaves out of reads
    /// from the `desired` value that was written.
    fn retain_write_only(&mut self, _desired: &Self) {}
}

/// Serialize `resource` as `{"<list-key>": [ <element> ]}`.
pub fn encode<R: Resource>(resource: &R) -> Result<Vec<u8>, CodecError> {
    envelope::wrap(R::KIND.list_key(), &resource.to_wire())
}

/// Parse an envelope and return its first (only) element as `R`.
pub fn decode<R: Resource>(id: &ResourceId, bytes: &[u8]) -> Result<R, CodecError> {
    check_kind(id, R::KIND)?;
    let wire = envelope::unwrap(R::KIND.list_key(), bytes)?;
    R::from_wire(id, wire)
}

/// Parse an operational-tree `node` envelope into a [`MountStatus`].
pub fn decode_status(bytes: &[u8]) -> Result<MountStatus, CodecError> {
    let node: mount::OperationalNode = envelope::unwrap(ResourceKind::Mount.list_key(), bytes)?;
    Ok(node.into())
}

fn check_kind(id: &ResourceId, expected: ResourceKind) -> Result<(), CodecError> {
    if id.kind() == expected {
        Ok(())
    } else {
        Err(CodecError::KindMismatch {
            expected,
            id: id.to_string(),
        })
    }
}
