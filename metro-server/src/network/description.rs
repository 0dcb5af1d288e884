//! JSON network descriptions.
//!
//! A description is a flat list of connections, inserted in file order:
//!
//! ```json
//! { "connections": [ { "from": "A", "to": "B", "time": 2, "distance": 5 } ] }
//! ```
//!
//! Descriptions are read-only input. A built network is never written back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::NetworkError;
use super::{Network, StationName};

/// One connection in a network description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDescription {
    pub from: StationName,
    pub to: StationName,
    pub time: u32,
    pub distance: u32,
}

/// A network as a list of connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescription {
    /// Stations with no connections may be listed here.
    #[serde(default)]
    pub stations: Vec<StationName>,

    pub connections: Vec<ConnectionDescription>,
}

impl NetworkDescription {
    /// Parse a description from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        serde_json::from_str(json).map_err(|e| NetworkError::Json {
            message: e.to_string(),
        })
    }

    /// Read and parse a description file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| NetworkError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let description = Self::from_json(&contents)?;
        debug!(
            path = %path.display(),
            connections = description.connections.len(),
            "Loaded network description"
        );
        Ok(description)
    }

    /// Build the network this description describes.
    pub fn into_network(self) -> Network {
        let mut network = Network::new();
        for name in self.stations {
            network.add_station(name);
        }
        for c in self.connections {
            network.add_connection(c.from, c.to, c.time, c.distance);
        }
        network
    }
}
