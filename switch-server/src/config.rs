//! Application configuration from the environment.
//!
//! Built once at startup and handed to the components that need it. The
//! two PTV credentials are required; everything else has a default.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::ptv::{DEFAULT_BASE_URL, PtvConfig};

/// Default listen port, on localhost.
const DEFAULT_PORT: u16 = 3001;

/// Default directory for static assets.
const DEFAULT_STATIC_DIR: &str = "public";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    /// A variable is set but can't be parsed
    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

/// PTV API credentials.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub dev_id: String,
    pub api_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("dev_id", &self.dev_id)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PTV credentials, or why they're unavailable
    pub credentials: Result<Credentials, ConfigError>,

    /// PTV API base URL
    pub ptv_base_url: String,

    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Directory served for non-API paths
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy` beforehand to pick up `.env.local` / `.env` files.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary lookup function.
    ///
    /// Missing credentials are recorded rather than returned as an error:
    /// the server can still serve static assets, and API requests report the
    /// problem. Malformed optional values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let credentials = match (get("PTV_DEVID"), get("PTV_KEY")) {
            (Some(dev_id), Some(api_key)) => Ok(Credentials { dev_id, api_key }),
            (None, _) => Err(ConfigError::Missing("PTV_DEVID")),
            (_, None) => Err(ConfigError::Missing("PTV_KEY")),
        };

        let bind_addr: SocketAddr = match get("BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "BIND_ADDR",
                value,
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], DEFAULT_PORT)),
        };

        Ok(Self {
            credentials,
            ptv_base_url: get("PTV_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            bind_addr,
            static_dir: get("STATIC_DIR")
                .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
                .into(),
        })
    }

    /// PTV client configuration, if credentials are present.
    pub fn ptv_config(&self) -> Result<PtvConfig, ConfigError> {
        let credentials = self.credentials.clone()?;
        Ok(PtvConfig::new(credentials.dev_id, credentials.api_key)
            .with_base_url(self.ptv_base_url.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[("PTV_DEVID", "3000001"), ("PTV_KEY", "secret")]).unwrap();

        assert_eq!(
            config.credentials,
            Ok(Credentials {
                dev_id: "3000001".into(),
                api_key: "secret".into()
            })
        );
        assert_eq!(config.ptv_base_url, DEFAULT_BASE_URL);
        assert_eq!(config.bind_addr, "127.0.0.1:3001".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("public"));
    }

    #[test]
    fn overrides() {
        let config = load(&[
            ("PTV_DEVID", "1"),
            ("PTV_KEY", "k"),
            ("PTV_BASE_URL", "http://localhost:9000"),
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("STATIC_DIR", "/srv/www"),
        ])
        .unwrap();

        assert_eq!(config.ptv_base_url, "http://localhost:9000");
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));

        let ptv = config.ptv_config().unwrap();
        assert_eq!(ptv.base_url, "http://localhost:9000");
        assert_eq!(ptv.dev_id, "1");
    }

    #[test]
    fn missing_credentials_are_recorded() {
        let config = load(&[("PTV_KEY", "k")]).unwrap();
        assert_eq!(config.credentials, Err(ConfigError::Missing("PTV_DEVID")));
        assert_eq!(config.ptv_config().unwrap_err(), ConfigError::Missing("PTV_DEVID"));

        let config = load(&[("PTV_DEVID", "1")]).unwrap();
        assert_eq!(config.credentials, Err(ConfigError::Missing("PTV_KEY")));
    }

    #[test]
    fn empty_values_count_as_missing() {
        let config = load(&[("PTV_DEVID", "  "), ("PTV_KEY", "k")]).unwrap();
        assert_eq!(config.credentials, Err(ConfigError::Missing("PTV_DEVID")));
    }

    #[test]
    fn bad_bind_addr_is_an_error() {
        let err = load(&[("BIND_ADDR", "not-an-address")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                name: "BIND_ADDR",
                value: "not-an-address".into()
            }
        );
    }

    #[test]
    fn debug_redacts_key() {
        let creds = Credentials {
            dev_id: "1".into(),
            api_key: "topsecret".into(),
        };
        assert!(!format!("{creds:?}").contains("topsecret"));
    }
}
