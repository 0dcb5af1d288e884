//! Fluent construction of networks, and the reference network.

use super::{Network, StationName};

/// Builder for creating a [`Network`].
///
/// Provides a fluent API for adding connections.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    inner: Network,
}

impl NetworkBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an undirected connection.
    pub fn connect(
        mut self,
        a: impl Into<StationName>,
        b: impl Into<StationName>,
        time: u32,
        distance: u32,
    ) -> Self {
        self.inner.add_connection(a, b, time, distance);
        self
    }

    /// Add a station with no connections.
    pub fn station(mut self, name: impl Into<StationName>) -> Self {
        self.inner.add_station(name);
        self
    }

    /// Build the network.
    pub fn build(self) -> Network {
        self.inner
    }
}

/// The five-edge sample network.
///
/// Its fastest A→D route (A, B, C, D; time 6) beats both two-hop routes,
/// which makes it a handy check that the two finders disagree correctly.
pub fn reference_network() -> Network {
    NetworkBuilder::new()
        .connect("A", "B", 2, 5)
        .connect("B", "C", 3, 10)
        .connect("A", "C", 7, 20)
        .connect("C", "D", 1, 2)
        .connect("B", "D", 5, 15)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_adds_connections_and_stations() {
        let network = NetworkBuilder::new()
            .connect("A", "B", 1, 1)
            .station("Z")
            .build();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.connection_count(), 1);
        assert!(network.neighbors("Z").unwrap().is_empty());
    }

    #[test]
    fn reference_network_shape() {
        let network = reference_network();

        assert_eq!(network.station_count(), 4);
        assert_eq!(network.connection_count(), 5);
        assert_eq!(network.neighbors("A").unwrap().len(), 2);
        assert_eq!(network.neighbors("B").unwrap().len(), 3);
        assert_eq!(network.neighbors("C").unwrap().len(), 3);
        assert_eq!(network.neighbors("D").unwrap().len(), 2);

        let cd = network.cheapest_connection("D", "C").unwrap().unwrap();
        assert_eq!((cd.time, cd.distance), (1, 2));
    }
}
