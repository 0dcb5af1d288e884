//! The station registry and its undirected weighted connections.

use std::collections::HashMap;

use serde::Serialize;

use super::StationName;
use super::error::NetworkError;

/// One adjacency record: a link from the owning station to `to`.
///
/// Every logical connection is stored twice, once on each endpoint, with
/// the same weights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Connection {
    /// The neighbouring station.
    pub to: StationName,

    /// Travel time. Used by the fastest-route search.
    pub time: u32,

    /// Track distance. Carried as metadata only.
    pub distance: u32,
}

/// A station and its outgoing connections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    name: StationName,
    connections: Vec<Connection>,
}

impl Station {
    fn new(name: StationName) -> Self {
        Self {
            name,
            connections: Vec::new(),
        }
    }

    /// The station's name.
    pub fn name(&self) -> &StationName {
        &self.name
    }

    /// Outgoing connections, in insertion order.
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }
}

/// A transit network: stations keyed by name, linked by undirected edges.
///
/// The network is built by repeated [`add_connection`](Self::add_connection)
/// calls and then queried through shared references. Stations are created
/// on first mention and never removed.
///
/// Invariants:
/// - every connection's `to` is a registered station;
/// - adjacency is symmetric: if B is in A's list with `(t, d)`, A is in B's
///   list with `(t, d)`.
///
/// Parallel edges and self-loops are kept as inserted.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationName, Station>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a station with no connections.
    ///
    /// Returns `true` if the station was added, `false` if it already
    /// existed (in which case nothing changes).
    pub fn add_station(&mut self, name: impl Into<StationName>) -> bool {
        let name = name.into();
        if self.stations.contains_key(&name) {
            return false;
        }
        self.ensure_station(name);
        true
    }

    /// Returns the station with this name, creating it if absent.
    fn ensure_station(&mut self, name: StationName) -> &mut Station {
        self.stations
            .entry(name.clone())
            .or_insert_with(|| Station::new(name))
    }

    /// Connect two stations in both directions.
    ///
    /// Missing endpoints are created. Inserting the same pair again adds a
    /// parallel connection rather than replacing the first one.
    pub fn add_connection(
        &mut self,
        a: impl Into<StationName>,
        b: impl Into<StationName>,
        time: u32,
        distance: u32,
    ) {
        let a = a.into();
        let b = b.into();

        self.ensure_station(a.clone()).connections.push(Connection {
            to: b.clone(),
            time,
            distance,
        });
        self.ensure_station(b).connections.push(Connection {
            to: a,
            time,
            distance,
        });
    }

    /// Look up a station by name.
    pub fn station(&self, name: &str) -> Option<&Station> {
        self.stations.get(name)
    }

    /// Returns true if a station with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.stations.contains_key(name)
    }

    /// The connections leaving a station.
    pub fn neighbors(&self, name: &str) -> Result<&[Connection], NetworkError> {
        self.station(name)
            .map(Station::connections)
            .ok_or_else(|| NetworkError::StationNotFound(StationName::from(name)))
    }

    /// The lowest-time connection from `from` to `to`, if they are adjacent.
    ///
    /// Fails only if `from` is not a registered station.
    pub fn cheapest_connection(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Option<&Connection>, NetworkError> {
        Ok(self
            .neighbors(from)?
            .iter()
            .filter(|c| c.to.as_str() == to)
            .min_by_key(|c| c.time))
    }

    /// All stations, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Number of registered stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of logical (undirected) connections, counting parallels.
    pub fn connection_count(&self) -> usize {
        self.stations
            .values()
            .map(|s| s.connections.len())
            .sum::<usize>()
            / 2
    }

    /// Returns true if no station has been registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// A read-only copy of the whole network, sorted by station name.
    ///
    /// This is the view handed to anything that draws the network.
    pub fn snapshot(&self) -> NetworkSnapshot {
        let mut stations: Vec<StationSnapshot> = self
            .stations
            .values()
            .map(|s| StationSnapshot {
                name: s.name.clone(),
                connections: s.connections.clone(),
            })
            .collect();
        stations.sort_by(|a, b| a.name.cmp(&b.name));

        NetworkSnapshot { stations }
    }
}

/// Serializable view of a [`Network`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSnapshot {
    pub stations: Vec<StationSnapshot>,
}

/// Serializable view of one station and its connections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSnapshot {
    pub name: StationName,
    pub connections: Vec<Connection>,
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn edges_strategy() -> impl Strategy<Value = Vec<(u8, u8, u32, u32)>> {
        prop::collection::vec((0u8..8, 0u8..8, 0u32..50, 0u32..50), 0..30)
    }

    fn build(edges: &[(u8, u8, u32, u32)]) -> Network {
        let mut network = Network::new();
        for &(a, b, t, d) in edges {
            network.add_connection(format!("S{a}"), format!("S{b}"), t, d);
        }
        network
    }

    proptest! {
        /// Every record on A pointing at B with (t, d) has a twin on B
        #[test]
        fn adjacency_is_symmetric(edges in edges_strategy()) {
            let network = build(&edges);

            for station in network.stations() {
                for c in station.connections() {
                    let back = network.neighbors(c.to.as_str()).unwrap();
                    let forward_count = station
                        .connections()
                        .iter()
                        .filter(|x| x == &c)
                        .count();
                    let twin = Connection {
                        to: station.name().clone(),
                        time: c.time,
                        distance: c.distance,
                    };
                    let back_count = back.iter().filter(|x| **x == twin).count();
                    prop_assert_eq!(forward_count, back_count);
                }
            }
        }

        /// Every connection target is a registered station
        #[test]
        fn targets_are_registered(edges in edges_strategy()) {
            let network = build(&edges);
            for station in network.stations() {
                for c in station.connections() {
                    prop_assert!(network.contains(c.to.as_str()));
                }
            }
        }

        /// Logical edge count equals the number of insertions
        #[test]
        fn connection_count_matches_insertions(edges in edges_strategy()) {
            let network = build(&edges);
            prop_assert_eq!(network.connection_count(), edges.len());
        }
    }
}
