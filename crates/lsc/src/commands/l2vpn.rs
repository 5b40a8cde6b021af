//! L2VPN cross-connect command handlers.

use lsc_core::{L2vpnSpec, Reconciler, ResourceId};

use crate::cli::{GlobalOpts, L2vpnArgs, L2vpnCommand, L2vpnKey};
use crate::error::CliError;
use crate::output::{self, detail};

fn l2vpn_id(key: &L2vpnKey) -> ResourceId {
    ResourceId::l2vpn(&key.device, key.eviid)
}

fn print_l2vpn(service: &L2vpnSpec, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(
        &global.format,
        service,
        |s| {
            detail(&[
                ("Device", s.device.clone()),
                ("EVI", s.eviid.to_string()),
                ("Circuit 1", s.circuit_1.clone()),
                ("Circuit 2", s.circuit_2.clone()),
            ])
        },
        |s| s.eviid.to_string(),
    )?;
    output::print_output(&out, global.quiet)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reconciler: &Reconciler,
    args: L2vpnArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        L2vpnCommand::Apply {
            key,
            circuit_1,
            circuit_2,
            replaces,
        } => {
            let spec = L2vpnSpec::new(&key.device, key.eviid, circuit_1, circuit_2);
            let applied = match replaces {
                Some(eviid) => {
                    let prior = ResourceId::l2vpn(&key.device, eviid);
                    reconciler.update(&prior, &spec).await?
                }
                None => reconciler.apply(&spec).await?,
            };
            print_l2vpn(&applied.observed, global)
        }

        L2vpnCommand::Get { key } => {
            let id = l2vpn_id(&key);
            let service: L2vpnSpec = super::present(reconciler.read(&id).await?, &id)?;
            print_l2vpn(&service, global)
        }

        L2vpnCommand::Delete { key } => {
            let id = l2vpn_id(&key);
            let outcome = reconciler.delete(&id).await;
            super::report_delete(&id, outcome, global)
        }
    }
}
