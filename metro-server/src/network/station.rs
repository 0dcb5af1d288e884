//! Station name type.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The name of a station.
///
/// A name is both the station's identity in the [`Network`](super::Network)
/// and its display label. Any string is accepted; two stations are the same
/// station exactly when their names are equal.
///
/// # Examples
///
/// ```
/// use metro_server::network::StationName;
///
/// let a = StationName::new("Central");
/// assert_eq!(a.as_str(), "Central");
/// assert_eq!(a, StationName::from("Central"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationName(String);

impl StationName {
    /// Create a station name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name is empty or only whitespace.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for StationName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StationName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&StationName> for StationName {
    fn from(name: &StationName) -> Self {
        name.clone()
    }
}

// Lets maps keyed by `StationName` be queried with a plain `&str`.
impl Borrow<str> for StationName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
