//! Command dispatch: bridges CLI args -> reconciler calls -> output formatting.

pub mod interface;
pub mod l2vpn;
pub mod mount;
pub mod vlan;

use serde::Serialize;

use lsc_core::{DeleteOutcome, Observation, Reconciler, ResourceId};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;
use crate::output;

/// Dispatch a controller-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    reconciler: &Reconciler,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Mount(args) => mount::handle(reconciler, args, global).await,
        Command::Interface(args) => interface::handle(reconciler, args, global).await,
        Command::Vlan(args) => vlan::handle(reconciler, args, global).await,
        Command::L2vpn(args) => l2vpn::handle(reconciler, args, global).await,
        Command::Config(_) | Command::Completions(_) => Err(CliError::Validation {
            field: "command".into(),
            reason: "does not talk to a controller".into(),
        }),
    }
}

// ── Shared helpers ───────────────────────────────────────────────────

/// Key of `id` without its kind, as operators type it.
fn identifier(id: &ResourceId) -> String {
    match id {
        ResourceId::Mount { name } => name.clone(),
        ResourceId::Interface { device, name, .. } | ResourceId::Vlan { device, name, .. } => {
            format!("{device}/{name}")
        }
        ResourceId::L2vpn { device, eviid } => format!("{device}/{eviid}"),
    }
}

/// Unwrap a read, turning `Absent` into a not-found error.
fn present<T>(observation: Observation<T>, id: &ResourceId) -> Result<T, CliError> {
    observation.into_option().ok_or_else(|| CliError::NotFound {
        resource_type: id.kind().to_string(),
        identifier: identifier(id),
    })
}

#[derive(Serialize)]
struct DeleteReport {
    id: String,
    deleted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

/// Render a delete. A best-effort failure is reported but not fatal.
fn report_delete(
    id: &ResourceId,
    outcome: DeleteOutcome,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let warning = outcome.error.as_ref().map(ToString::to_string);
    outcome.into_result()?;

    let report = DeleteReport {
        id: identifier(id),
        deleted: true,
        warning,
    };
    let out = output::render_single(
        &global.format,
        &report,
        |r| match r.warning {
            Some(ref w) => format!("Forgot {id} (controller reported: {w})"),
            None => format!("Deleted {id}"),
        },
        |r| r.id.clone(),
    )?;
    output::print_output(&out, global.quiet)
}
