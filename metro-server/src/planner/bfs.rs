//! Fewest-transfers search.
//!
//! Plain breadth-first search over the undirected network. Each frontier
//! entry carries the full path that reached it, so the answer is available
//! the moment the goal is popped.
//!
//! Stations are marked visited when they are popped, not when they are
//! enqueued. Several pending paths to the same station can therefore sit in
//! the queue at once; the FIFO order guarantees the first of them to pop is
//! a minimum-hop path, and the later ones are discarded unexpanded.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace, warn};

use super::config::SearchConfig;
use super::error::SearchError;
use super::route::Route;
use super::search::SearchOutcome;
use crate::network::{Network, StationName};

/// Find a route from `start` to `goal` with the fewest connections.
///
/// The outcome carries no route when `goal` cannot be reached, which
/// includes a `goal` that is not in the network. Fails with
/// [`SearchError::StationNotFound`] if `start` is not in the network.
///
/// Among routes with equal hop count the one found first wins; that follows
/// connection insertion order and is otherwise unspecified.
pub fn find_fewest_transfers(
    network: &Network,
    start: &str,
    goal: &str,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    if !network.contains(start) {
        return Err(SearchError::StationNotFound(StationName::from(start)));
    }

    let start = StationName::from(start);
    if start.as_str() == goal {
        return Ok(SearchOutcome::found(Route::new(vec![start]), 0));
    }

    let mut queue: VecDeque<(StationName, Vec<StationName>)> = VecDeque::new();
    queue.push_back((start.clone(), vec![start]));

    let mut visited: HashSet<StationName> = HashSet::new();
    let mut expanded = 0;

    while let Some((station, path)) = queue.pop_front() {
        // Goal check comes before the visited check: the first pop wins.
        if station.as_str() == goal {
            debug!(
                goal,
                hops = path.len() - 1,
                expanded,
                "Fewest-transfers route found"
            );
            return Ok(SearchOutcome::found(Route::new(path), expanded));
        }

        if visited.contains(&station) {
            continue;
        }

        if config.expansion_limit_reached(expanded) {
            warn!(goal, expanded, "Fewest-transfers search hit expansion limit");
            return Ok(SearchOutcome::exhausted(expanded));
        }

        visited.insert(station.clone());
        expanded += 1;

        let connections = network.neighbors(station.as_str())?;
        trace!(
            station = %station,
            neighbors = connections.len(),
            queued = queue.len(),
            "BFS expanding station"
        );

        for connection in connections {
            // Skipping visited neighbours here only saves queue space; they
            // would be discarded on pop anyway.
            if visited.contains(&connection.to) {
                continue;
            }
            let mut next = path.clone();
            next.push(connection.to.clone());
            queue.push_back((connection.to.clone(), next));
        }
    }

    debug!(goal, expanded, "Fewest-transfers search exhausted");
    Ok(SearchOutcome::exhausted(expanded))
}
