//! Fastest-route search.
//!
//! A best-first search ordered by `f = g + h`, where `g` is the travel time
//! accumulated along an entry's path and `h` is a [`Heuristic`] estimate of
//! the time still to go. With the default [`ZeroHeuristic`] this is
//! uniform-cost (Dijkstra) search, which returns a minimum-time route as
//! long as every connection time is non-negative. `u32` weights make that
//! hold by construction.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::{debug, trace, warn};

use super::config::SearchConfig;
use super::error::SearchError;
use super::route::Route;
use super::search::SearchOutcome;
use crate::network::{Network, StationName};

/// Estimate of the remaining travel time from a station to the goal.
///
/// An estimate that never exceeds the true remaining time keeps the search
/// optimal.
pub trait Heuristic {
    fn estimate(&self, station: &str, goal: &str) -> u64;
}

/// The heuristic that always estimates zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _station: &str, _goal: &str) -> u64 {
        0
    }
}

/// Frontier entry.
///
/// Ordered so that `BinaryHeap` pops the lowest `priority` first, and among
/// equal priorities the entry pushed first.
#[derive(Debug)]
struct Entry {
    priority: u64,
    seq: u64,
    station: StationName,
    cost: u64,
    path: Vec<StationName>,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl Eq for Entry {}

/// Find the route from `start` to `goal` with the lowest total time.
///
/// The outcome carries no route when `goal` cannot be reached, including
/// when `goal` is not in the network. Fails with
/// [`SearchError::StationNotFound`] if `start` is not in the network.
///
/// Equal-cost alternatives are resolved by push order; callers should only
/// rely on the total time being minimal.
pub fn find_fastest<H: Heuristic + ?Sized>(
    network: &Network,
    start: &str,
    goal: &str,
    heuristic: &H,
    config: &SearchConfig,
) -> Result<SearchOutcome, SearchError> {
    if !network.contains(start) {
        return Err(SearchError::StationNotFound(StationName::from(start)));
    }

    let start = StationName::from(start);

    let mut best_cost: HashMap<StationName, u64> = HashMap::new();
    best_cost.insert(start.clone(), 0);

    let mut visited: HashSet<StationName> = HashSet::new();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0;

    frontier.push(Entry {
        priority: heuristic.estimate(start.as_str(), goal),
        seq,
        station: start.clone(),
        cost: 0,
        path: vec![start],
    });

    while let Some(entry) = frontier.pop() {
        // The first pop of the goal is optimal; check before the visited set.
        if entry.station.as_str() == goal {
            debug!(
                goal,
                total_time = entry.cost,
                hops = entry.path.len() - 1,
                expanded,
                "Fastest route found"
            );
            return Ok(SearchOutcome::found(Route::new(entry.path), expanded));
        }

        // Stale entry for a station already settled at a lower cost.
        if visited.contains(&entry.station) {
            continue;
        }

        if config.expansion_limit_reached(expanded) {
            warn!(goal, expanded, "Fastest-route search hit expansion limit");
            return Ok(SearchOutcome::exhausted(expanded));
        }

        visited.insert(entry.station.clone());
        expanded += 1;

        let connections = network.neighbors(entry.station.as_str())?;
        trace!(
            station = %entry.station,
            cost = entry.cost,
            neighbors = connections.len(),
            frontier = frontier.len(),
            "Expanding station"
        );

        for connection in connections {
            if visited.contains(&connection.to) {
                continue;
            }

            let new_cost = entry.cost + u64::from(connection.time);
            let improves = best_cost
                .get(&connection.to)
                .is_none_or(|&known| new_cost < known);
            if !improves {
                continue;
            }
            best_cost.insert(connection.to.clone(), new_cost);

            let mut path = entry.path.clone();
            path.push(connection.to.clone());

            seq += 1;
            frontier.push(Entry {
                priority: new_cost.saturating_add(heuristic.estimate(connection.to.as_str(), goal)),
                seq,
                station: connection.to.clone(),
                cost: new_cost,
                path,
            });
        }
    }

    debug!(goal, expanded, "Fastest-route search exhausted");
    Ok(SearchOutcome::exhausted(expanded))
}
