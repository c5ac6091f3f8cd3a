//! Configuration for the pgdesk CLI.
//!
//! TOML profiles, loading/saving via XDG paths, and the keyring-backed
//! session token store. Translation to `pgdesk_core::GatewayConfig`
//! happens here so core never touches files or the keyring directly.

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use pgdesk_core::{CredentialError, CredentialStore, GatewayConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("unknown profile '{profile}'")]
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

    /// Named gateway profiles.
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

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default)]
    pub insecure: bool,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            insecure: false,
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named gateway profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Gateway base URL (e.g., "http://localhost:8086").
    pub gateway: String,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout, in seconds.
    pub timeout: Option<u64>,
}

impl Profile {
    pub fn new(gateway: impl Into<String>) -> Self {
        Self {
            gateway: gateway.into(),
            insecure: None,
            timeout: None,
        }
    }
}

impl Config {
    /// Look up a profile by the explicit name or fall back to the
    /// configured default. A missing config gets a localhost profile
    /// so the tool works out of the box against a local gateway.
    pub fn resolve_profile(&self, name: Option<&str>) -> Result<(String, Profile), ConfigError> {
        let name = name
            .map(ToOwned::to_owned)
            .or_else(|| self.default_profile.clone())
            .unwrap_or_else(|| "default".into());

        if let Some(profile) = self.profiles.get(&name) {
            return Ok((
                name,
                Profile {
                    gateway: profile.gateway.clone(),
                    insecure: profile.insecure,
                    timeout: profile.timeout,
                },
            ));
        }

        if name == "default" && self.profiles.is_empty() {
            return Ok((name, Profile::new("http://localhost:8086")));
        }

        Err(ConfigError::UnknownProfile { profile: name })
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "pgdesk", "pgdesk").map_or_else(
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
    p.push("pgdesk");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    let path = config_path();

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("PGDESK_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(())
}

// ── Translation to core ─────────────────────────────────────────────

/// Build a `GatewayConfig` from a profile, applying global defaults.
pub fn profile_to_gateway_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<GatewayConfig, ConfigError> {
    let url: url::Url = profile
        .gateway
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "gateway".into(),
            reason: format!("invalid URL: {}", profile.gateway),
        })?;

    Ok(GatewayConfig {
        url,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout)),
        insecure: profile.insecure.unwrap_or(defaults.insecure),
    })
}

// ── Keyring-backed token store ──────────────────────────────────────

/// Session token persistence in the platform keyring, one slot per
/// profile. Keyring failures are surfaced as `CredentialError` and
/// downgraded by core to an unauthenticated session.
pub struct KeyringCredentialStore {
    profile: String,
}

impl KeyringCredentialStore {
    pub fn new(profile: impl Into<String>) -> Self {
        Self {
            profile: profile.into(),
        }
    }

    fn entry(&self) -> Result<keyring::Entry, CredentialError> {
        keyring::Entry::new("pgdesk", &format!("{}/token", self.profile))
            .map_err(|e| CredentialError::Unavailable(e.to_string()))
    }
}

impl CredentialStore for KeyringCredentialStore {
    fn load(&self) -> Result<Option<SecretString>, CredentialError> {
        match self.entry()?.get_password() {
            Ok(token) => Ok(Some(SecretString::from(token))),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(CredentialError::Io(e.to_string())),
        }
    }

    fn store(&self, token: &SecretString) -> Result<(), CredentialError> {
        self.entry()?
            .set_password(token.expose_secret())
            .map_err(|e| CredentialError::Io(e.to_string()))
    }

    fn clear(&self) -> Result<(), CredentialError> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(CredentialError::Io(e.to_string())),
        }
    }
}

/// Plaintext file fallback for hosts without a usable keyring (headless
/// servers, containers). Stored next to the config file with owner-only
/// permissions on Unix.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(profile: &str) -> Self {
        let mut path = config_path();
        path.set_file_name(format!("{profile}.token"));
        Self { path }
    }

    #[cfg(test)]
    fn at(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Result<Option<SecretString>, CredentialError> {
        match std::fs::read_to_string(&self.path) {
            Ok(token) => {
                let token = token.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(SecretString::from(token.to_owned())))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CredentialError::Io(e.to_string())),
        }
    }

    fn store(&self, token: &SecretString) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CredentialError::Io(e.to_string()))?;
        }
        std::fs::write(&self.path, token.expose_secret())
            .map_err(|e| CredentialError::Io(e.to_string()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .map_err(|e| CredentialError::Io(e.to_string()))?;
        }

        Ok(())
    }

    fn clear(&self) -> Result<(), CredentialError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_fill_in() {
        let cfg = Config::default();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.output, "table");
        assert_eq!(cfg.defaults.timeout, 30);
        assert!(!cfg.defaults.insecure);
    }

    #[test]
    fn toml_profile_parses() {
        let cfg: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::string(
                r#"
                default_profile = "hostel"

                [profiles.hostel]
                gateway = "http://10.0.0.5:8086"
                timeout = 10
                "#,
            ))
            .extract()
            .unwrap();

        let (name, profile) = cfg.resolve_profile(None).unwrap();
        assert_eq!(name, "hostel");
        assert_eq!(profile.gateway, "http://10.0.0.5:8086");
        assert_eq!(profile.timeout, Some(10));
    }

    #[test]
    fn empty_config_resolves_a_localhost_default() {
        let cfg = Config::default();
        let (name, profile) = cfg.resolve_profile(None).unwrap();
        assert_eq!(name, "default");
        assert_eq!(profile.gateway, "http://localhost:8086");
    }

    #[test]
    fn unknown_profile_is_an_error() {
        let cfg = Config::default();
        let err = cfg.resolve_profile(Some("nope")).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProfile { profile } if profile == "nope"));
    }

    #[test]
    fn profile_translates_to_gateway_config() {
        let profile = Profile {
            gateway: "http://localhost:8086".into(),
            insecure: Some(true),
            timeout: None,
        };
        let gw = profile_to_gateway_config(&profile, &Defaults::default()).unwrap();
        assert_eq!(gw.url.as_str(), "http://localhost:8086/");
        assert_eq!(gw.timeout, Duration::from_secs(30));
        assert!(gw.insecure);
    }

    #[test]
    fn bad_gateway_url_is_rejected() {
        let profile = Profile::new("not a url");
        let err = profile_to_gateway_config(&profile, &Defaults::default()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation { field, .. } if field == "gateway"));
    }

    #[test]
    fn file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::at(dir.path().join("default.token"));

        assert!(store.load().unwrap().is_none());
        store
            .store(&SecretString::from("jwt-123".to_owned()))
            .unwrap();
        assert_eq!(store.load().unwrap().unwrap().expose_secret(), "jwt-123");
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
        // Clearing an empty slot is not an error.
        store.clear().unwrap();
    }
}
