//! Routes returned by the finders.

use std::fmt;

use serde::Serialize;

use crate::network::{Connection, Network, NetworkError, StationName};

/// An ordered sequence of stations from a start to a goal, inclusive.
///
/// A route always holds at least one station. A single-station route is the
/// answer to a query whose start and goal are the same. Routes own their
/// names, so they stay valid after the network that produced them is gone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Route {
    stations: Vec<StationName>,
}

impl Route {
    /// Build a route from a non-empty path.
    pub(crate) fn new(stations: Vec<StationName>) -> Self {
        debug_assert!(!stations.is_empty(), "a route has at least one station");
        Self { stations }
    }

    /// The stations in travel order.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// The first station.
    pub fn start(&self) -> &StationName {
        &self.stations[0]
    }

    /// The last station.
    pub fn goal(&self) -> &StationName {
        &self.stations[self.stations.len() - 1]
    }

    /// Number of stations, including both ends.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of connections travelled.
    pub fn hops(&self) -> usize {
        self.stations.len() - 1
    }

    /// Consecutive station pairs, i.e. the edges to highlight.
    pub fn edges(&self) -> impl Iterator<Item = (&StationName, &StationName)> {
        self.stations.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Total travel time, taking the quickest parallel connection per leg.
    pub fn total_time(&self, network: &Network) -> Result<u64, NetworkError> {
        self.sum_legs(network, |c| c.time)
    }

    /// Total distance, measured along the same connections as
    /// [`total_time`](Self::total_time).
    pub fn total_distance(&self, network: &Network) -> Result<u64, NetworkError> {
        self.sum_legs(network, |c| c.distance)
    }

    fn sum_legs(
        &self,
        network: &Network,
        weight: impl Fn(&Connection) -> u32,
    ) -> Result<u64, NetworkError> {
        let mut total = 0u64;
        for (from, to) in self.edges() {
            let connection = network
                .cheapest_connection(from.as_str(), to.as_str())?
                .ok_or_else(|| NetworkError::NotConnected {
                    from: from.clone(),
                    to: to.clone(),
                })?;
            total += u64::from(weight(connection));
        }
        Ok(total)
    }

    /// Consume the route, returning its stations.
    pub fn into_stations(self) -> Vec<StationName> {
        self.stations
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, station) in self.stations.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{station}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::reference_network;

    fn route(names: &[&str]) -> Route {
        Route::new(names.iter().map(|n| StationName::from(*n)).collect())
    }

    #[test]
    fn single_station_route() {
        let r = route(&["A"]);
        assert_eq!(r.hops(), 0);
        assert_eq!(r.station_count(), 1);
        assert_eq!(r.start(), r.goal());
        assert_eq!(r.edges().count(), 0);
        assert_eq!(r.total_time(&reference_network()).unwrap(), 0);
    }

    #[test]
    fn ends_and_edges() {
        let r = route(&["A", "B", "C", "D"]);
        assert_eq!(r.start().as_str(), "A");
        assert_eq!(r.goal().as_str(), "D");
        assert_eq!(r.hops(), 3);

        let edges: Vec<(&str, &str)> = r.edges().map(|(a, b)| (a.as_str(), b.as_str())).collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "C"), ("C", "D")]);
    }

    #[test]
    fn totals_on_reference_network() {
        let network = reference_network();
        let r = route(&["A", "B", "C", "D"]);
        assert_eq!(r.total_time(&network).unwrap(), 6);
        assert_eq!(r.total_distance(&network).unwrap(), 17);
    }

    #[test]
    fn totals_use_quickest_parallel_connection() {
        let mut network = Network::new();
        network.add_connection("A", "B", 9, 1);
        network.add_connection("A", "B", 4, 3);

        let r = route(&["A", "B"]);
        assert_eq!(r.total_time(&network).unwrap(), 4);
        assert_eq!(r.total_distance(&network).unwrap(), 3);
    }

    #[test]
    fn totals_reject_non_adjacent_legs() {
        let network = reference_network();
        let err = route(&["A", "D"]).total_time(&network).unwrap_err();
        assert_eq!(
            err,
            NetworkError::NotConnected {
                from: StationName::new("A"),
                to: StationName::new("D"),
            }
        );

        let err = route(&["Z", "A"]).total_time(&network).unwrap_err();
        assert_eq!(err, NetworkError::StationNotFound(StationName::new("Z")));
    }

    #[test]
    fn display() {
        assert_eq!(route(&["A", "B", "D"]).to_string(), "A -> B -> D");
        assert_eq!(route(&["A"]).to_string(), "A");
    }

    #[test]
    fn serializes_as_list_of_names() {
        let json = serde_json::to_string(&route(&["A", "B"])).unwrap();
        assert_eq!(json, r#"["A","B"]"#);
    }
}
