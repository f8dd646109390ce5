use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{LocatorError, Result};
use crate::routing::osrm::DEFAULT_ROUTER_URL;

pub const ENV_BACKEND_URL: &str = "CNG_LOCATOR_BACKEND_URL";
pub const ENV_ROUTER_URL: &str = "CNG_LOCATOR_ROUTER_URL";
pub const ENV_TIMEOUT_SECS: &str = "CNG_LOCATOR_TIMEOUT_SECS";

/// Client configuration, deserialized from `config.toml`.
///
/// Every key is optional in the file; missing keys keep their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the station search / route-plan backend.
    pub backend_url: String,
    /// Base URL of the OSRM routing engine.
    pub router_url: String,
    /// Deadline for each outbound request.
    pub timeout_secs: u64,
    /// Radius used by `near` when none is given.
    pub default_radius_km: u32,
    /// Vehicle used by `route` when none is given.
    pub default_vehicle: Option<String>,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: "http://localhost:5000".to_string(),
            router_url: DEFAULT_ROUTER_URL.to_string(),
            timeout_secs: 20,
            default_radius_km: 5,
            default_vehicle: None,
            user_agent: concat!("cng_locator/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// `<os config dir>/cng_locator/config.toml`
pub fn default_config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("", "", "cng_locator").ok_or_else(|| {
        LocatorError::Config("Unable to determine OS config directory".to_string())
    })?;
    Ok(proj.config_dir().join("config.toml"))
}

impl Config {
    /// Defaults, then the config file, then the environment.
    ///
    /// An explicit path must exist; the default path is optional. The result
    /// is not validated: command-line overrides still apply on top, so call
    /// [`Config::validate`] once every layer is in.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut cfg = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path() {
                Ok(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        cfg.apply_env(|k| std::env::var(k).ok())?;
        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            LocatorError::Config(format!("Unable to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&text)
            .map_err(|e| LocatorError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| LocatorError::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LocatorError::Config(e.to_string()))
    }

    /// Override from environment variables; `lookup` is `std::env::var` outside tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(ENV_BACKEND_URL) {
            self.backend_url = v;
        }
        if let Some(v) = lookup(ENV_ROUTER_URL) {
            self.router_url = v;
        }
        if let Some(v) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = v.trim().parse().map_err(|_| {
                LocatorError::Config(format!("{ENV_TIMEOUT_SECS} must be an integer (got '{v}')"))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend_url.trim().is_empty() {
            return Err(LocatorError::Config("backend_url cannot be empty".to_string()));
        }
        if self.router_url.trim().is_empty() {
            return Err(LocatorError::Config("router_url cannot be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(LocatorError::Config("timeout_secs must be > 0".to_string()));
        }
        if self.default_radius_km == 0 {
            return Err(LocatorError::Config(
                "default_radius_km must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg = Config::from_toml("backend_url = \"https://cng.example\"\n").unwrap();
        assert_eq!(cfg.backend_url, "https://cng.example");
        assert_eq!(cfg.router_url, DEFAULT_ROUTER_URL);
        assert_eq!(cfg.timeout_secs, 20);
        assert_eq!(cfg.default_radius_km, 5);
    }

    #[test]
    fn env_overrides_file() {
        let mut cfg = Config::default();
        cfg.apply_env(|k| match k {
            ENV_BACKEND_URL => Some("http://backend:9000".to_string()),
            ENV_TIMEOUT_SECS => Some("3".to_string()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.backend_url, "http://backend:9000");
        assert_eq!(cfg.timeout_secs, 3);
        assert_eq!(cfg.router_url, DEFAULT_ROUTER_URL);
    }

    #[test]
    fn bad_env_timeout() {
        let mut cfg = Config::default();
        let err = cfg
            .apply_env(|k| (k == ENV_TIMEOUT_SECS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, LocatorError::Config(_)));
    }

    #[test]
    fn validation() {
        assert!(Config::default().validate().is_ok());

        let cfg = Config {
            timeout_secs: 0,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = Config {
            backend_url: " ".to_string(),
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn toml_round_trip_of_defaults() {
        let cfg = Config::default();
        let text = cfg.to_toml().unwrap();
        assert_eq!(Config::from_toml(&text).unwrap(), cfg);
    }

    #[test]
    fn unknown_type_is_config_error() {
        assert!(matches!(
            Config::from_toml("timeout_secs = \"ten\""),
            Err(LocatorError::Config(_))
        ));
    }
}
