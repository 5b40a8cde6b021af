//! Interface command handlers.

use lsc_core::{InterfaceSpec, Reconciler, ResourceId};

use crate::cli::{GlobalOpts, InterfaceArgs, InterfaceCommand, InterfaceKey};
use crate::error::CliError;
use crate::output::{self, detail};

fn interface_id(key: &InterfaceKey) -> ResourceId {
    ResourceId::Interface {
        device: key.device.clone(),
        active: key.active,
        name: key.name.clone(),
    }
}

fn interface_detail(i: &InterfaceSpec) -> String {
    detail(&[
        ("Device", i.device.clone()),
        ("Name", i.name.clone()),
        ("Active", i.active.to_string()),
        ("Description", i.description.clone()),
    ])
}

fn print_interface(iface: &InterfaceSpec, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format, iface, interface_detail, |i| {
        i.name.clone()
    })?;
    output::print_output(&out, global.quiet)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reconciler: &Reconciler,
    args: InterfaceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        InterfaceCommand::Apply {
            key,
            description,
            replaces,
        } => {
            let spec = InterfaceSpec {
                device: key.device.clone(),
                name: key.name.clone(),
                description,
                active: key.active,
            };
            let applied = match replaces {
                Some(prior) => {
                    let prior = interface_id(&InterfaceKey { name: prior, ..key });
                    reconciler.update(&prior, &spec).await?
                }
                None => reconciler.apply(&spec).await?,
            };
            print_interface(&applied.observed, global)
        }

        InterfaceCommand::Get { key } => {
            let id = interface_id(&key);
            let iface: InterfaceSpec = super::present(reconciler.read(&id).await?, &id)?;
            print_interface(&iface, global)
        }

        InterfaceCommand::Delete { key } => {
            let id = interface_id(&key);
            let outcome = reconciler.delete(&id).await;
            super::report_delete(&id, outcome, global)
        }
    }
}
