//! Shared configuration for the lsc reconciler.
//!
//! TOML profiles, token resolution (env + plaintext), and translation to
//! `lsc_core::ControllerConfig`. The CLI layers its `GlobalOpts` overrides
//! on top of what this crate resolves.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use lsc_core::{
    ConnectionStatus, ControllerConfig, DeletePolicy, ReconcileConfig, RetryPolicy,
    TlsVerification,
};

/// Environment variables the controller connection has always been read from.
pub const ADDRESS_ENV: &str = "SERVICE_ADDRESS";
pub const PORT_ENV: &str = "SERVICE_PORT";
pub const TOKEN_ENV: &str = "SERVICE_TOKEN";

/// RESTCONF northbound port of a stock controller install.
pub const DEFAULT_PORT: u16 = 8181;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no token configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("profile '{profile}' is not defined")]
    UnknownProfile { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named controller profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

impl Config {
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: name.into(),
            })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default)]
    pub insecure: bool,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Whole-apply budget in seconds.
    #[serde(default = "default_apply_timeout")]
    pub apply_timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            insecure: false,
            timeout: default_timeout(),
            apply_timeout: default_apply_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_apply_timeout() -> u64 {
    45
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

/// A named controller profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Controller host, IP, or URL (e.g. "https://sdn.lab").
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Authorization header value (plaintext; prefer `token_env`).
    pub token: Option<String>,

    /// Environment variable name containing the token.
    pub token_env: Option<String>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override per-request timeout (seconds).
    pub timeout: Option<u64>,

    /// Override whole-apply budget (seconds).
    pub apply_timeout: Option<u64>,

    /// Mount status poll interval in milliseconds.
    pub poll_interval_ms: Option<u64>,

    /// Connection statuses that fail a mount apply immediately.
    #[serde(default)]
    pub fatal_statuses: Vec<String>,

    /// HTTP statuses never retried on apply.
    pub terminal_http_statuses: Option<Vec<u16>>,

    /// Keep objects whose delete failed instead of forgetting them.
    #[serde(default)]
    pub strict_delete: bool,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "lsc", "lsc").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("lsc");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` (missing file is fine) merged with `LSC_*` variables.
///
/// Nested keys use a double underscore: `LSC_PROFILES__LAB__PORT=8443`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LSC_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

// ── Credential resolution (without CLI flags) ───────────────────────

/// Resolve the token: `token_env` variable, then plaintext, then `SERVICE_TOKEN`.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    // 3. Process-wide variable
    if let Ok(val) = std::env::var(TOKEN_ENV) {
        return Ok(SecretString::from(val));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Reconcile tuning from a profile, falling back to `defaults` then to
/// the core defaults.
pub fn reconcile_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<ReconcileConfig, ConfigError> {
    let base = ReconcileConfig::default();

    let terminal_statuses = match &profile.terminal_http_statuses {
        Some(statuses) => {
            if let Some(bad) = statuses.iter().find(|s| !(100..=599).contains(*s)) {
                return Err(ConfigError::Validation {
                    field: "terminal_http_statuses".into(),
                    reason: format!("{bad} is not an HTTP status"),
                });
            }
            statuses.clone()
        }
        None => base.retry.terminal_statuses.clone(),
    };

    let poll_interval = profile
        .poll_interval_ms
        .map_or(base.poll_interval, Duration::from_millis);
    if poll_interval.is_zero() {
        return Err(ConfigError::Validation {
            field: "poll_interval_ms".into(),
            reason: "must be greater than zero".into(),
        });
    }

    Ok(ReconcileConfig {
        apply_timeout: Duration::from_secs(
            profile.apply_timeout.unwrap_or(defaults.apply_timeout),
        ),
        poll_interval,
        retry: RetryPolicy {
            terminal_statuses,
            ..base.retry
        },
        fatal_statuses: profile
            .fatal_statuses
            .iter()
            .map(|s| ConnectionStatus::from(s.as_str()))
            .collect(),
        delete_policy: if profile.strict_delete {
            DeletePolicy::Strict
        } else {
            DeletePolicy::BestEffort
        },
    })
}

/// Build a `ControllerConfig` from a profile — no CLI flag overrides.
pub fn profile_to_controller_config(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ControllerConfig, ConfigError> {
    if profile.address.trim().is_empty() {
        return Err(ConfigError::Validation {
            field: "address".into(),
            reason: format!("profile '{profile_name}' has no controller address"),
        });
    }

    let token = resolve_token(profile, profile_name)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    Ok(ControllerConfig {
        address: profile.address.clone(),
        port: profile.port,
        token,
        tls,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
        reconcile: reconcile_config(profile, defaults)?,
    })
}
