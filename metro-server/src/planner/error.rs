//! Route search errors.

use crate::network::{NetworkError, StationName};

/// Error from a route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The start station is not in the network
    #[error("station not found: {0}")]
    StationNotFound(StationName),

    /// The goal cannot be reached from the start
    #[error("no route from {start} to {goal}")]
    NoRouteFound { start: StationName, goal: StationName },

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

impl From<NetworkError> for SearchError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::StationNotFound(name) => SearchError::StationNotFound(name),
            other => SearchError::InvalidRequest(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SearchError::StationNotFound(StationName::new("Z"));
        assert_eq!(err.to_string(), "station not found: Z");

        let err = SearchError::NoRouteFound {
            start: StationName::new("A"),
            goal: StationName::new("E"),
        };
        assert_eq!(err.to_string(), "no route from A to E");

        let err = SearchError::InvalidRequest("start station is blank".into());
        assert_eq!(err.to_string(), "invalid search request: start station is blank");
    }

    #[test]
    fn from_network_error() {
        let err: SearchError = NetworkError::StationNotFound(StationName::new("Z")).into();
        assert_eq!(err, SearchError::StationNotFound(StationName::new("Z")));

        let err: SearchError = NetworkError::NotConnected {
            from: StationName::new("A"),
            to: StationName::new("D"),
        }
        .into();
        assert!(matches!(err, SearchError::InvalidRequest(_)));
    }
}
