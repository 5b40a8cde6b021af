//! VLAN sub-interface command handlers.

use lsc_core::{Reconciler, ResourceId, VlanSettings, VlanSpec};

use crate::cli::{GlobalOpts, InterfaceKey, VlanApplyArgs, VlanArgs, VlanCommand};
use crate::error::CliError;
use crate::output::{self, detail};

fn vlan_id(key: &InterfaceKey) -> ResourceId {
    ResourceId::Vlan {
        device: key.device.clone(),
        active: key.active,
        name: key.name.clone(),
    }
}

fn vlan_detail(v: &VlanSpec) -> String {
    detail(&[
        ("Device", v.device.clone()),
        ("Name", v.name.clone()),
        ("Active", v.active.to_string()),
        ("Description", v.description.clone()),
        ("Mode", v.interface_mode.clone()),
        ("MTU", v.mtu().map(|m| m.to_string()).unwrap_or_default()),
        ("Outer tag type", v.encapsulation.outer_tag_type.clone()),
        ("Tag type", v.tag_type().to_owned()),
        ("Inner tag", v.inner_tag().to_string()),
        ("Outer tag", v.outer_tag().to_string()),
    ])
}

fn print_vlan(vlan: &VlanSpec, global: &GlobalOpts) -> Result<(), CliError> {
    let out = output::render_single(&global.format, vlan, vlan_detail, |v| v.name.clone())?;
    output::print_output(&out, global.quiet)
}

fn spec_from_args(args: VlanApplyArgs) -> (VlanSpec, Option<ResourceId>) {
    let prior = args.replaces.map(|name| ResourceId::Vlan {
        device: args.key.device.clone(),
        active: args.key.active,
        name,
    });
    let mut spec = VlanSpec::sub_interface(
        args.key.device,
        args.key.name,
        args.description,
        VlanSettings {
            mtu: args.mtu,
            interface_mode: args.interface_mode,
            outer_tag_type: args.outer_tag_type,
            tag_type: args.tag_type,
            inner_tag: args.inner_tag,
            outer_tag: args.outer_tag,
        },
    );
    spec.active = args.key.active;
    (spec, prior)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    reconciler: &Reconciler,
    args: VlanArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        VlanCommand::Apply(apply) => {
            let (spec, prior) = spec_from_args(apply);
            let applied = match prior {
                Some(prior) => reconciler.update(&prior, &spec).await?,
                None => reconciler.apply(&spec).await?,
            };
            print_vlan(&applied.observed, global)
        }

        VlanCommand::Get { key } => {
            let id = vlan_id(&key);
            let vlan: VlanSpec = super::present(reconciler.read(&id).await?, &id)?;
            print_vlan(&vlan, global)
        }

        VlanCommand::Delete { key } => {
            let id = vlan_id(&key);
            let outcome = reconciler.delete(&id).await;
            super::report_delete(&id, outcome, global)
        }
    }
}
