//! Server configuration, read from environment variables.
//!
//! | Variable               | Default          |
//! |------------------------|------------------|
//! | `METRO_ADDR`           | `127.0.0.1:3000` |
//! | `METRO_NETWORK`        | reference network |
//! | `METRO_CACHE_TTL_SECS` | `300`            |
//! | `METRO_CACHE_CAPACITY` | `10000`          |
//! | `METRO_MAX_EXPANSIONS` | unbounded        |

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use tracing::info;

use crate::cache::CacheConfig;
use crate::network::{Network, NetworkDescription, NetworkError, reference_network};
use crate::planner::SearchConfig;

/// Error from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value {value:?} for {var}: {reason}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
    reason: String,
}

/// Configuration for the route server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// JSON network description to load. `None` serves the reference network.
    pub network_path: Option<PathBuf>,

    /// Route cache settings.
    pub cache: CacheConfig,

    /// Route search settings.
    pub search: SearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            network_path: None,
            cache: CacheConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let addr = parse_var(&lookup, "METRO_ADDR")?.unwrap_or(defaults.addr);
        let network_path = lookup("METRO_NETWORK")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let ttl = parse_var::<u64>(&lookup, "METRO_CACHE_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.cache.ttl);
        let max_capacity =
            parse_var(&lookup, "METRO_CACHE_CAPACITY")?.unwrap_or(defaults.cache.max_capacity);
        let max_expansions = parse_var(&lookup, "METRO_MAX_EXPANSIONS")?;

        Ok(Self {
            addr,
            network_path,
            cache: CacheConfig { ttl, max_capacity },
            search: SearchConfig::new(max_expansions),
        })
    }

    /// Build the network this configuration names.
    pub fn load_network(&self) -> Result<Network, NetworkError> {
        match &self.network_path {
            Some(path) => {
                let network = NetworkDescription::load(path)?.into_network();
                info!(
                    path = %path.display(),
                    stations = network.station_count(),
                    connections = network.connection_count(),
                    "Loaded network"
                );
                Ok(network)
            }
            None => {
                info!("No METRO_NETWORK set, using the reference network");
                Ok(reference_network())
            }
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };
    let parsed = value.trim().parse::<T>();
    parsed.map(Some).map_err(|e| ConfigError {
        var,
        value,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var: &str| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.search.max_expansions, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("METRO_ADDR", "0.0.0.0:8080"),
            ("METRO_NETWORK", "/srv/network.json"),
            ("METRO_CACHE_TTL_SECS", "60"),
            ("METRO_CACHE_CAPACITY", "42"),
            ("METRO_MAX_EXPANSIONS", " 500 "),
        ]))
        .unwrap();

        assert_eq!(config.addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.network_path, Some(PathBuf::from("/srv/network.json")));
        assert_eq!(config.cache.ttl, Duration::from_secs(60));
        assert_eq!(config.cache.max_capacity, 42);
        assert_eq!(config.search.max_expansions, Some(500));
    }

    #[test]
    fn blank_network_path_means_reference() {
        let config = ServerConfig::from_lookup(lookup(&[("METRO_NETWORK", " ")])).unwrap();
        assert_eq!(config.network_path, None);
    }

    #[test]
    fn invalid_number_is_error() {
        let err = ServerConfig::from_lookup(lookup(&[("METRO_CACHE_CAPACITY", "lots")]))
            .unwrap_err();
        assert_eq!(err.var, "METRO_CACHE_CAPACITY");
        assert_eq!(err.value, "lots");
        assert!(err.to_string().starts_with("invalid value \"lots\" for METRO_CACHE_CAPACITY"));
    }

    #[test]
    fn invalid_addr_is_error() {
        let err = ServerConfig::from_lookup(lookup(&[("METRO_ADDR", "localhost")])).unwrap_err();
        assert_eq!(err.var, "METRO_ADDR");
    }

    #[test]
    fn load_reference_network_by_default() {
        let network = ServerConfig::default().load_network().unwrap();
        assert_eq!(network.station_count(), 4);
        assert_eq!(network.connection_count(), 5);
    }

    #[test]
    fn load_network_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("network.json");
        std::fs::write(
            &path,
            r#"{ "connections": [{ "from": "X", "to": "Y", "time": 4, "distance": 9 }] }"#,
        )
        .unwrap();

        let config = ServerConfig {
            network_path: Some(path),
            ..ServerConfig::default()
        };
        let network = config.load_network().unwrap();
        assert!(network.contains("X"));
        assert!(network.contains("Y"));
    }

    #[test]
    fn load_missing_file_is_error() {
        let config = ServerConfig {
            network_path: Some(PathBuf::from("/nonexistent/network.json")),
            ..ServerConfig::default()
        };
        assert!(matches!(config.load_network(), Err(NetworkError::Io { .. })));
    }
}
