//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::cache::RouteKind;
use crate::planner::{RouteSummary, SearchRequest};

/// Query string for the route endpoints.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Start station name
    pub from: String,

    /// Goal station name
    pub to: String,
}

impl RouteQuery {
    /// Convert into a planner request.
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(self.from.as_str(), self.to.as_str())
    }
}

/// A found route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Station names, start to goal
    pub stations: Vec<String>,

    /// Number of connections travelled
    pub hops: usize,

    /// Sum of connection times
    pub total_time: u64,

    /// Sum of connection distances
    pub total_distance: u64,
}

impl RouteResult {
    /// Build from a measured route.
    pub fn from_summary(summary: &RouteSummary) -> Self {
        Self {
            stations: summary
                .route
                .stations()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            hops: summary.hops,
            total_time: summary.total_time,
            total_distance: summary.total_distance,
        }
    }
}

/// Response for a single-kind route query.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Which finder produced the route
    pub kind: RouteKind,

    /// Start station name
    pub from: String,

    /// Goal station name
    pub to: String,

    /// The route
    pub route: RouteResult,
}

/// Response for a plan query. Either route may be absent.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Start station name
    pub from: String,

    /// Goal station name
    pub to: String,

    /// Route with the fewest connections
    pub fewest_transfers: Option<RouteResult>,

    /// Route with the lowest total time
    pub fastest: Option<RouteResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
