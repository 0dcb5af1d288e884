//! The transit network model.
//!
//! Stations are identified by name and linked by undirected connections
//! carrying a travel time and a distance. A [`Network`] is built once and
//! then shared read-only with the route finders.

mod builder;
mod description;
mod error;
mod graph;
mod station;

pub use builder::{NetworkBuilder, reference_network};
pub use description::{ConnectionDescription, NetworkDescription};
pub use error::NetworkError;
pub use graph::{Connection, Network, NetworkSnapshot, Station, StationSnapshot};
pub use station::StationName;
