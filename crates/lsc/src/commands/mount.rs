//! Mount command handlers.

use secrecy::SecretString;

use lsc_core::{MountSpec, MountStatus, Reconciler, ResourceId};

use crate::cli::{GlobalOpts, MountApplyArgs, MountArgs, MountCommand};
use crate::error::CliError;
use crate::output::{self, detail};

fn mount_detail(m: &MountSpec) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("Name", m.name.clone()),
        ("Host", m.host.clone()),
        ("Port", m.port.to_string()),
        ("Username", m.username.clone()),
    ];
    if let Some(tcp_only) = m.tcp_only {
        rows.push(("TCP only", tcp_only.to_string()));
    }
    if let Some(delay) = m.keepalive_delay {
        rows.push(("Keepalive", format!("{delay}s")));
    }
    rows
}

fn status_detail(s: &MountStatus) -> String {
    detail(&[
        ("Name", s.name.clone()),
        ("Host", s.host.clone().unwrap_or_default()),
        ("Port", s.port.map(|p| p.to_string()).unwrap_or_default()),
        ("Status", s.connection_status.to_string()),
    ])
}

fn spec_from_args(args: MountApplyArgs) -> (MountSpec, Option<String>) {
    let mut spec = MountSpec::new(
        args.name,
        args.host,
        args.device_port,
        args.username,
        SecretString::from(args.password),
    );
    spec.tcp_only = args.tcp_only;
    spec.keepalive_delay = args.keepalive_delay;
    (spec, args.replaces)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reconciler: &Reconciler,
    args: MountArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        MountCommand::Apply(apply) => {
            let (spec, replaces) = spec_from_args(apply);
            let applied = match replaces {
                Some(prior) => reconciler.update(&ResourceId::mount(prior), &spec).await?,
                None => reconciler.apply(&spec).await?,
            };
            let polls = applied.convergence_polls;
            let out = output::render_single(
                &global.format,
                &applied.observed,
                |m| {
                    let mut rows = mount_detail(m);
                    rows.push(("Connected after", format!("{polls} poll(s)")));
                    detail(&rows)
                },
                |m| m.name.clone(),
            )?;
            output::print_output(&out, global.quiet)
        }

        MountCommand::Get { name } => {
            let id = ResourceId::mount(name);
            let mount: MountSpec = super::present(reconciler.read(&id).await?, &id)?;
            let out = output::render_single(
                &global.format,
                &mount,
                |m| detail(&mount_detail(m)),
                |m| m.name.clone(),
            )?;
            output::print_output(&out, global.quiet)
        }

        MountCommand::Status { name } => {
            let id = ResourceId::mount(&name);
            let status = super::present(reconciler.mount_status(&name).await?, &id)?;
            let out = output::render_single(
                &global.format,
                &status,
                status_detail,
                |s| s.connection_status.to_string(),
            )?;
            output::print_output(&out, global.quiet)
        }

        MountCommand::Delete { name } => {
            let id = ResourceId::mount(name);
            let outcome = reconciler.delete(&id).await;
            super::report_delete(&id, outcome, global)
        }
    }
}
