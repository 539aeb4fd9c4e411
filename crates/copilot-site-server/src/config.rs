//! Site configuration.
//!
//! Values are layered, later layers winning:
//! built-in defaults, then an optional `site.toml`, then the environment,
//! then explicit overrides from the caller.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Secret key used when none is configured.
pub const DEFAULT_SECRET_KEY: &str = "dev-secret-key-change-in-production";

/// Configuration for the site router and server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Secret key; the server warns when it is left at the default
    pub secret_key: String,

    /// Show error details on the 500 page
    pub debug: bool,

    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory served under `/static`
    pub static_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            debug: false,
            host: "127.0.0.1".to_string(),
            port: 5000,
            static_dir: PathBuf::from("static"),
        }
    }
}

/// Optional values that replace fields of a [`SiteConfig`] when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigOverrides {
    pub secret_key: Option<String>,
    pub debug: Option<bool>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub static_dir: Option<PathBuf>,
}

/// Configuration file structure (site.toml).
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    site: ConfigOverrides,
}

impl SiteConfig {
    /// Apply overrides; every `Some` field replaces the current value.
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(secret_key) = overrides.secret_key {
            self.secret_key = secret_key;
        }
        if let Some(debug) = overrides.debug {
            self.debug = debug;
        }
        if let Some(host) = overrides.host {
            self.host = host;
        }
        if let Some(port) = overrides.port {
            self.port = port;
        }
        if let Some(static_dir) = overrides.static_dir {
            self.static_dir = static_dir;
        }
        self
    }

    /// Defaults, then `path` if it exists, then the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// Like [`SiteConfig::load`], reading variables through `lookup`.
    pub fn load_with(
        path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let config = Self::default().merge(load_file(path)?);
        Ok(config.merge(env_overrides(lookup)?))
    }

    /// `host:port` for binding.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Whether the secret key is still the development default.
    pub fn uses_default_secret(&self) -> bool {
        self.secret_key == DEFAULT_SECRET_KEY
    }
}

/// Read overrides from a TOML file. A missing file yields no overrides.
fn load_file(path: &Path) -> Result<ConfigOverrides, ConfigError> {
    if !path.exists() {
        return Ok(ConfigOverrides::default());
    }

    let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let file: ConfigFile = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(file.site)
}

/// Collect overrides from environment variables via `lookup`.
///
/// `SITE_DEBUG` is true only for a case-insensitive `"true"`.
fn env_overrides(lookup: impl Fn(&str) -> Option<String>) -> Result<ConfigOverrides, ConfigError> {
    let port = match lookup("SITE_PORT") {
        Some(raw) => Some(
            raw.trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
        ),
        None => None,
    };

    Ok(ConfigOverrides {
        secret_key: lookup("SECRET_KEY"),
        debug: lookup("SITE_DEBUG").map(|v| v.trim().eq_ignore_ascii_case("true")),
        host: lookup("SITE_HOST"),
        port,
        static_dir: lookup("SITE_STATIC_DIR").map(PathBuf::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn has_documented_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.secret_key, DEFAULT_SECRET_KEY);
        assert!(!config.debug);
        assert_eq!(config.address(), "127.0.0.1:5000");
        assert!(config.uses_default_secret());
    }

    #[test]
    fn later_values_win() {
        let config = SiteConfig::default()
            .merge(ConfigOverrides {
                port: Some(8000),
                host: Some("0.0.0.0".to_string()),
                ..Default::default()
            })
            .merge(ConfigOverrides {
                port: Some(9000),
                ..Default::default()
            });

        assert_eq!(config.port, 9000);
        assert_eq!(config.host, "0.0.0.0");
    }

    #[test]
    fn reads_environment() {
        let overrides = env_overrides(lookup_in(&[
            ("SECRET_KEY", "s3cret"),
            ("SITE_DEBUG", "TRUE"),
            ("SITE_PORT", "8080"),
        ]))
        .unwrap();

        let config = SiteConfig::default().merge(overrides);
        assert_eq!(config.secret_key, "s3cret");
        assert!(config.debug);
        assert_eq!(config.port, 8080);
        assert!(!config.uses_default_secret());
    }

    #[test]
    fn debug_is_false_unless_true() {
        let overrides = env_overrides(lookup_in(&[("SITE_DEBUG", "yes")])).unwrap();
        assert_eq!(overrides.debug, Some(false));
    }

    #[test]
    fn rejects_bad_port() {
        let err = env_overrides(lookup_in(&[("SITE_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(p) if p == "eighty"));
    }

    #[test]
    fn loads_site_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\nport = 7000\nstatic_dir = \"assets\"\n").unwrap();

        let overrides = load_file(&path).unwrap();
        assert_eq!(overrides.port, Some(7000));
        assert_eq!(overrides.static_dir, Some(PathBuf::from("assets")));
    }

    #[test]
    fn environment_beats_site_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\nport = 7000\nhost = \"0.0.0.0\"\n").unwrap();

        let config =
            SiteConfig::load_with(&path, lookup_in(&[("SITE_PORT", "8080")])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");

        let config = config.merge(ConfigOverrides {
            port: Some(9000),
            ..Default::default()
        });
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn load_without_file_or_environment_is_default() {
        let temp = tempdir().unwrap();
        let config = SiteConfig::load_with(&temp.path().join("site.toml"), |_| None).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let temp = tempdir().unwrap();
        let overrides = load_file(&temp.path().join("site.toml")).unwrap();
        assert_eq!(overrides, ConfigOverrides::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\nport = \"high\"\n").unwrap();

        assert!(matches!(load_file(&path), Err(ConfigError::Parse { .. })));
    }
}
