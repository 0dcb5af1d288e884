//! Web layer for the metro route planner.
//!
//! Provides JSON endpoints for querying routes and for fetching the network
//! snapshot that a map view draws from.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
