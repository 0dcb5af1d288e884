//! Route planning over a transit network.
//!
//! Two independent finders answer a (start, goal) query:
//!
//! - fewest transfers: breadth-first search, minimising the number of
//!   connections travelled;
//! - fastest: best-first search on accumulated time, minimising total
//!   travel time.
//!
//! Both borrow the network read-only and return an owned [`Route`].

mod best_first;
mod bfs;
mod config;
mod error;
mod route;
mod search;


pub use best_first::{Heuristic, ZeroHeuristic, find_fastest};
pub use bfs::find_fewest_transfers;
pub use config::SearchConfig;
pub use error::SearchError;
pub use route::Route;
pub use search::{Planner, RouteSummary, SearchOutcome, SearchRequest, SearchResult};
