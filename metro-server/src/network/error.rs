//! Network error types.

use super::StationName;

/// Errors from reading or loading a network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// The named station is not in the network
    #[error("station not found: {0}")]
    StationNotFound(StationName),

    /// Consecutive route stations share no connection
    #[error("stations {from} and {to} are not connected")]
    NotConnected { from: StationName, to: StationName },

    /// Reading a network description failed
    #[error("failed to read network description {path}: {message}")]
    Io { path: String, message: String },

    /// A network description could not be parsed
    #[error("invalid network description: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = NetworkError::StationNotFound(StationName::new("Z"));
        assert_eq!(err.to_string(), "station not found: Z");

        let err = NetworkError::NotConnected {
            from: StationName::new("A"),
            to: StationName::new("D"),
        };
        assert_eq!(err.to_string(), "stations A and D are not connected");

        let err = NetworkError::Io {
            path: "net.json".into(),
            message: "no such file".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read network description net.json: no such file"
        );

        let err = NetworkError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "invalid network description: expected value");
    }
}
