//! Metro route planner.
//!
//! Models a transit network as an undirected graph whose connections carry
//! a travel time and a distance, and answers two questions about any pair
//! of stations: which route needs the fewest connections, and which route
//! is quickest.

pub mod cache;
pub mod config;
pub mod network;
pub mod planner;
pub mod web;
