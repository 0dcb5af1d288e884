//! Planner facade over the two route finders.

use serde::Serialize;
use tracing::debug;

use crate::network::{Network, StationName};

use super::best_first::{Heuristic, ZeroHeuristic, find_fastest};
use super::bfs::find_fewest_transfers;
use super::config::SearchConfig;
use super::error::SearchError;
use super::route::Route;

/// What a single finder run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The route, or `None` if the frontier ran out first.
    pub route: Option<Route>,

    /// Number of stations expanded.
    pub expanded: usize,
}

impl SearchOutcome {
    pub(crate) fn found(route: Route, expanded: usize) -> Self {
        Self {
            route: Some(route),
            expanded,
        }
    }

    pub(crate) fn exhausted(expanded: usize) -> Self {
        Self {
            route: None,
            expanded,
        }
    }
}

/// Request for a route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Where the route starts.
    pub start: StationName,

    /// Where the route ends.
    pub goal: StationName,
}

impl SearchRequest {
    /// Create a new search request.
    pub fn new(start: impl Into<StationName>, goal: impl Into<StationName>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
        }
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.start.is_blank() {
            return Err(SearchError::InvalidRequest(
                "start station is blank".to_string(),
            ));
        }

        if self.goal.is_blank() {
            return Err(SearchError::InvalidRequest(
                "goal station is blank".to_string(),
            ));
        }

        Ok(())
    }
}

/// A route together with its measured totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub route: Route,
    pub hops: usize,
    pub total_time: u64,
    pub total_distance: u64,
}

impl RouteSummary {
    /// Measure a route against the network it was found in.
    pub fn measure(route: Route, network: &Network) -> Result<Self, SearchError> {
        let total_time = route.total_time(network)?;
        let total_distance = route.total_distance(network)?;
        Ok(Self {
            hops: route.hops(),
            route,
            total_time,
            total_distance,
        })
    }
}

/// Result of planning both kinds of route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Route with the fewest connections, if any.
    pub fewest_transfers: Option<RouteSummary>,

    /// Route with the lowest total time, if any.
    pub fastest: Option<RouteSummary>,

    /// Stations expanded across both searches.
    pub stations_expanded: usize,
}

/// Route planner over a built network.
///
/// Borrows the network immutably, so any number of planners may query the
/// same network at once, from any thread.
pub struct Planner<'a> {
    network: &'a Network,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(network: &'a Network, config: &'a SearchConfig) -> Self {
        Self { network, config }
    }

    /// The route with the fewest connections.
    pub fn fewest_transfers(&self, start: &str, goal: &str) -> Result<Option<Route>, SearchError> {
        Ok(find_fewest_transfers(self.network, start, goal, self.config)?.route)
    }

    /// The route with the lowest total time.
    pub fn fastest(&self, start: &str, goal: &str) -> Result<Option<Route>, SearchError> {
        self.fastest_with(start, goal, &ZeroHeuristic)
    }

    /// The route with the lowest total time, guided by `heuristic`.
    pub fn fastest_with<H: Heuristic + ?Sized>(
        &self,
        start: &str,
        goal: &str,
        heuristic: &H,
    ) -> Result<Option<Route>, SearchError> {
        Ok(find_fastest(self.network, start, goal, heuristic, self.config)?.route)
    }

    /// Like [`fastest`](Self::fastest), but an unreachable goal is an error.
    pub fn require_fastest(&self, start: &str, goal: &str) -> Result<Route, SearchError> {
        self.fastest(start, goal)?
            .ok_or_else(|| SearchError::NoRouteFound {
                start: StationName::from(start),
                goal: StationName::from(goal),
            })
    }

    /// Run both searches and measure what they find.
    pub fn plan(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        request.validate()?;

        let start = request.start.as_str();
        let goal = request.goal.as_str();

        let fewest = find_fewest_transfers(self.network, start, goal, self.config)?;
        let fastest = find_fastest(self.network, start, goal, &ZeroHeuristic, self.config)?;

        let stations_expanded = fewest.expanded + fastest.expanded;
        debug!(
            start,
            goal,
            stations_expanded,
            "Planned routes"
        );

        Ok(SearchResult {
            fewest_transfers: self.summarize(fewest.route)?,
            fastest: self.summarize(fastest.route)?,
            stations_expanded,
        })
    }

    fn summarize(&self, route: Option<Route>) -> Result<Option<RouteSummary>, SearchError> {
        route
            .map(|r| RouteSummary::measure(r, self.network))
            .transpose()
    }
}
