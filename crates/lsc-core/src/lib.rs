//! Reconciliation engine between declared network intent and a RESTCONF controller.
//!
//! This crate owns the domain model and the apply/verify/destroy protocol
//! for the four resource kinds a Lumina-style SDN controller exposes:
//!
//! - **[`model`]** — Canonical desired-state types (`MountSpec`,
//!   `InterfaceSpec`, `VlanSpec`, `L2vpnSpec`), the read-only
//!   [`MountStatus`], and the tagged [`ResourceId`] identity.
//!
//! - **[`codec`]** — Pure mapping between canonical types and the YANG-shaped
//!   JSON envelopes (`{"<list>": [ {...} ]}`), plus the RESTCONF path grammar.
//!
//! - **[`Reconciler`]** — Create/Read/Delete orchestration: retry with backoff
//!   under one wall-clock deadline, mount convergence polling against the
//!   operational tree, read-back of the controller's authoritative view, and
//!   best-effort delete.
//!
//! Transport lives in `lsc-api`; this crate never touches HTTP directly.

pub mod codec;
pub mod config;
pub mod convergence;
pub mod error;
pub mod model;
pub mod reconciler;
pub mod retry;

// ── Primary re-exports ──────────────────────────────────────────────
pub use codec::{Datastore, Resource};
pub use config::{ControllerConfig, DeletePolicy, ReconcileConfig, TlsVerification};
pub use error::{CodecError, CoreError};
pub use reconciler::{Applied, DeleteOutcome, Observation, Reconciler};
pub use retry::RetryPolicy;

pub use model::{
    ActiveState, ConnectionStatus, Encapsulation, InterfaceSpec, L2vpnSpec, MountSpec,
    MountStatus, Mtu, ResourceId, ResourceKind, Rewrite, VlanSettings, VlanSpec,
};
