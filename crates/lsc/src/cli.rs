//! Clap derive structures for the `lsc` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use clap::{Args, Parser, Subcommand, ValueEnum};

use lsc_core::ActiveState;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// lsc -- declare NETCONF mounts and IOS-XR services on an SDN controller
#[derive(Debug, Parser)]
#[command(
    name = "lsc",
    version,
    about = "Reconcile NETCONF mounts and IOS-XR services against a RESTCONF controller",
    long_about = "Applies declared configuration to an SDN controller over RESTCONF and\n\
        verifies it took effect: mounts are polled until the device reports\n\
        `connected`, every object is read back after it is written.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller profile to use
    #[arg(long, short = 'p', env = "LSC_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Controller host, IP, or URL (overrides profile)
    #[arg(long, short = 'a', env = "SERVICE_ADDRESS", global = true)]
    pub address: Option<String>,

    /// Controller RESTCONF port (overrides profile)
    #[arg(long, env = "SERVICE_PORT", global = true)]
    pub port: Option<u16>,

    /// Authorization header value, sent verbatim
    #[arg(long, env = "SERVICE_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// Output format [default: config `defaults.output`, else table]
    #[arg(long, short = 'o', env = "LSC_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// Format actually used, resolved against the config file.
    #[arg(skip)]
    pub format: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "LSC_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "LSC_TIMEOUT", global = true)]
    pub timeout: Option<u64>,

    /// Budget for one apply, retries and convergence included, in seconds
    #[arg(long, env = "LSC_APPLY_TIMEOUT", global = true)]
    pub apply_timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable detail view (default)
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, identifier only (scripting)
    Plain,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage NETCONF device mounts
    #[command(alias = "m")]
    Mount(MountArgs),

    /// Manage interface descriptions on a mounted device
    #[command(alias = "if")]
    Interface(InterfaceArgs),

    /// Manage VLAN sub-interfaces on a mounted device
    Vlan(VlanArgs),

    /// Manage VLAN-aware flexible cross-connect services
    L2vpn(L2vpnArgs),

    /// Inspect CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  MOUNT
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct MountArgs {
    #[command(subcommand)]
    pub command: MountCommand,
}

#[derive(Debug, Subcommand)]
pub enum MountCommand {
    /// Mount a device and wait until it is connected
    Apply(MountApplyArgs),

    /// Show the configured mount
    Get {
        /// Mount (node) name
        name: String,
    },

    /// Show the live connection status
    Status {
        /// Mount (node) name
        name: String,
    },

    /// Unmount a device
    #[command(alias = "rm")]
    Delete {
        /// Mount (node) name
        name: String,
    },
}

#[derive(Debug, Args)]
pub struct MountApplyArgs {
    /// Mount (node) name; also the device name for sub-resources
    pub name: String,

    /// Device management address
    #[arg(long, required = true)]
    pub host: String,

    /// Device NETCONF port
    #[arg(long, default_value = "830")]
    pub device_port: u16,

    /// NETCONF username
    #[arg(long, required = true)]
    pub username: String,

    /// NETCONF password
    #[arg(long, env = "LSC_DEVICE_PASSWORD", hide_env_values = true, required = true)]
    pub password: String,

    /// Use plain TCP instead of SSH
    #[arg(long)]
    pub tcp_only: Option<bool>,

    /// Seconds between NETCONF keepalives
    #[arg(long)]
    pub keepalive_delay: Option<u32>,

    /// Name of a mount this one replaces (deleted first)
    #[arg(long)]
    pub replaces: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INTERFACE
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Identity of an interface-configuration entry.
#[derive(Debug, Args)]
pub struct InterfaceKey {
    /// Mount name of the device
    #[arg(long, short = 'd', required = true)]
    pub device: String,

    /// Interface name, e.g. GigabitEthernet0/0/0/1
    pub name: String,

    /// Configuration plane
    #[arg(long, default_value = "pre")]
    pub active: ActiveState,
}

#[derive(Debug, Args)]
pub struct InterfaceArgs {
    #[command(subcommand)]
    pub command: InterfaceCommand,
}

#[derive(Debug, Subcommand)]
pub enum InterfaceCommand {
    /// Set an interface description
    Apply {
        #[command(flatten)]
        key: InterfaceKey,

        /// Interface description
        #[arg(long, default_value = "")]
        description: String,

        /// Interface name this entry replaces (deleted first)
        #[arg(long)]
        replaces: Option<String>,
    },

    /// Show an interface configuration
    Get {
        #[command(flatten)]
        key: InterfaceKey,
    },

    /// Remove an interface configuration
    #[command(alias = "rm")]
    Delete {
        #[command(flatten)]
        key: InterfaceKey,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  VLAN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct VlanArgs {
    #[command(subcommand)]
    pub command: VlanCommand,
}

#[derive(Debug, Subcommand)]
pub enum VlanCommand {
    /// Create or update a VLAN sub-interface
    Apply(VlanApplyArgs),

    /// Show a VLAN sub-interface
    Get {
        #[command(flatten)]
        key: InterfaceKey,
    },

    /// Remove a VLAN sub-interface
    #[command(alias = "rm")]
    Delete {
        #[command(flatten)]
        key: InterfaceKey,
    },
}

#[derive(Debug, Args)]
pub struct VlanApplyArgs {
    #[command(flatten)]
    pub key: InterfaceKey,

    #[arg(long, default_value = "")]
    pub description: String,

    /// MTU of the sub-interface
    #[arg(long, required = true)]
    pub mtu: u32,

    /// interface-mode-non-physical
    #[arg(long, default_value = "l2-transport")]
    pub interface_mode: String,

    /// Encapsulation outer tag type
    #[arg(long, default_value = "match-untagged")]
    pub outer_tag_type: String,

    /// Rewrite tag type (inner and outer)
    #[arg(long, default_value = "match-dot1q")]
    pub tag_type: String,

    /// Rewrite inner VLAN tag
    #[arg(long, required = true)]
    pub inner_tag: u16,

    /// Rewrite outer VLAN tag
    #[arg(long, required = true)]
    pub outer_tag: u16,

    /// Sub-interface name this one replaces (deleted first)
    #[arg(long)]
    pub replaces: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  L2VPN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct L2vpnKey {
    /// Mount name of the device
    #[arg(long, short = 'd', required = true)]
    pub device: String,

    /// EVPN instance id
    pub eviid: u32,
}

#[derive(Debug, Args)]
pub struct L2vpnArgs {
    #[command(subcommand)]
    pub command: L2vpnCommand,
}

#[derive(Debug, Subcommand)]
pub enum L2vpnCommand {
    /// Create or update a cross-connect service
    Apply {
        #[command(flatten)]
        key: L2vpnKey,

        /// First attachment circuit
        #[arg(long, required = true)]
        circuit_1: String,

        /// Second attachment circuit
        #[arg(long, required = true)]
        circuit_2: String,

        /// EVI id this service replaces (deleted first)
        #[arg(long)]
        replaces: Option<u32>,
    },

    /// Show a cross-connect service
    Get {
        #[command(flatten)]
        key: L2vpnKey,
    },

    /// Remove a cross-connect service
    #[command(alias = "rm")]
    Delete {
        #[command(flatten)]
        key: L2vpnKey,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the loaded configuration (tokens redacted)
    Show,

    /// Print the config file location
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
