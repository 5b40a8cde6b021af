mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use lsc_core::Reconciler;

use crate::cli::{Cli, Command, ConfigCommand, GlobalOpts, OutputFormat};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(mut cli: Cli) -> Result<(), CliError> {
    let cfg = lsc_config::load_config_or_default();
    cli.global.format = config::output_format(cli.global.output, &cfg.defaults)?;

    match cli.command {
        // Config commands never touch the controller
        Command::Config(args) => show_config(&args.command, cfg, &cli.global),

        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "lsc", &mut std::io::stdout());
            Ok(())
        }

        cmd => {
            let controller_config = config::build_controller_config(&cli.global, &cfg)?;
            let reconciler = Reconciler::new(&controller_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &reconciler, &cli.global).await
        }
    }
}

fn show_config(
    command: &ConfigCommand,
    cfg: lsc_config::Config,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match command {
        ConfigCommand::Show => {
            let cfg = config::redacted(cfg);
            // The detail view of a config is the TOML it would be saved as.
            let out = if global.format == OutputFormat::Table {
                toml::to_string_pretty(&cfg).map_err(|e| CliError::Render {
                    message: e.to_string(),
                })?
            } else {
                output::render_single(&global.format, &cfg, |_| String::new(), |c| {
                    c.default_profile.clone().unwrap_or_default()
                })?
            };
            output::print_output(&out, global.quiet)
        }
        ConfigCommand::Path => output::print_output(
            &lsc_config::config_path().display().to_string(),
            global.quiet,
        ),
    }
}
