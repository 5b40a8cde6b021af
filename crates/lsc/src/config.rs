//! CLI configuration resolution: profile lookup plus `GlobalOpts` overrides.
//!
//! Core never sees these types -- it receives a pre-built `ControllerConfig`.

use std::time::Duration;

use clap::ValueEnum;
use lsc_config::{Config, DEFAULT_PORT, Defaults, Profile};
use lsc_core::ControllerConfig;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Profile resolution ───────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build a `ControllerConfig` from the config file, profile, and CLI overrides.
///
/// Flags (and their `SERVICE_*` variables) beat the profile. Without a
/// matching profile the flags alone must name a controller.
pub fn build_controller_config(
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<ControllerConfig, CliError> {
    let profile_name = active_profile_name(global, cfg);

    let profile = match cfg.profiles.get(&profile_name) {
        Some(profile) => profile.clone(),
        None if global.profile.is_some() => {
            let mut names: Vec<&str> = cfg.profiles.keys().map(String::as_str).collect();
            names.sort_unstable();
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: if names.is_empty() {
                    "(none)".into()
                } else {
                    names.join(", ")
                },
            });
        }
        None => Profile {
            address: global.address.clone().ok_or_else(|| CliError::NoConfig {
                path: lsc_config::config_path().display().to_string(),
            })?,
            port: DEFAULT_PORT,
            ..Profile::default()
        },
    };

    let profile = apply_overrides(profile, global);
    let mut config =
        lsc_config::profile_to_controller_config(&profile, &profile_name, &cfg.defaults)?;

    if let Some(secs) = global.apply_timeout {
        config.reconcile.apply_timeout = Duration::from_secs(secs);
    }
    Ok(config)
}

fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref address) = global.address {
        profile.address.clone_from(address);
    }
    if let Some(port) = global.port {
        profile.port = port;
    }
    if let Some(ref token) = global.token {
        profile.token = Some(token.clone());
        profile.token_env = None;
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if global.timeout.is_some() {
        profile.timeout = global.timeout;
    }
    profile
}

/// `--output` if given, else the config file's `defaults.output`.
pub fn output_format(
    flag: Option<OutputFormat>,
    defaults: &Defaults,
) -> Result<OutputFormat, CliError> {
    if let Some(format) = flag {
        return Ok(format);
    }
    OutputFormat::from_str(&defaults.output, true).map_err(|_| CliError::Validation {
        field: "defaults.output".into(),
        reason: format!("unknown output format '{}'", defaults.output),
    })
}

/// Copy of `cfg` safe to print: plaintext tokens are masked.
pub fn redacted(mut cfg: Config) -> Config {
    for profile in cfg.profiles.values_mut() {
        if profile.token.is_some() {
            profile.token = Some("********".into());
        }
    }
    cfg
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn defaults_with(output: &str) -> Defaults {
        Defaults {
            output: output.into(),
            ..Defaults::default()
        }
    }

    #[test]
    fn output_falls_back_to_config_default() {
        let format = output_format(None, &defaults_with("json")).unwrap();
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn output_flag_beats_config_default() {
        let format = output_format(Some(OutputFormat::Yaml), &defaults_with("json")).unwrap();
        assert_eq!(format, OutputFormat::Yaml);
    }

    #[test]
    fn output_default_accepts_kebab_case() {
        let format = output_format(None, &defaults_with("json-compact")).unwrap();
        assert_eq!(format, OutputFormat::JsonCompact);
    }

    #[test]
    fn unknown_config_output_is_rejected() {
        let err = output_format(None, &defaults_with("xml")).unwrap_err();
        assert!(matches!(err, CliError::Validation { .. }));
    }

    #[test]
    fn redaction_masks_plaintext_tokens() {
        let mut cfg = Config::default();
        cfg.profiles.insert(
            "lab".into(),
            Profile {
                address: "sdn.lab".into(),
                token: Some("Basic c2VjcmV0".into()),
                ..Profile::default()
            },
        );
        let shown = redacted(cfg);
        assert_eq!(shown.profiles["lab"].token.as_deref(), Some("********"));
    }
}
