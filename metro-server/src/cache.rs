//! Caching layer for route answers.
//!
//! A network never changes once it is being queried, so an answer for a
//! given (kind, start, goal) stays correct for the life of the process. The
//! TTL and capacity only bound memory.
//!
//! Errors are not cached: an unknown start station is cheap to detect and
//! keeping it out of the cache stops bad input from evicting good answers.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use serde::Serialize;
use tracing::trace;

use crate::network::{Network, NetworkSnapshot, StationName};
use crate::planner::{Planner, RouteSummary, SearchConfig, SearchError, SearchRequest};

/// Which finder answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    FewestTransfers,
    Fastest,
}

/// Cache key: (kind, start, goal).
pub type RouteKey = (RouteKind, StationName, StationName);

/// Cached answer. `None` means the goal is unreachable.
pub type RouteEntry = Arc<Option<RouteSummary>>;

/// Configuration for the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 10_000,
        }
    }
}

/// Cache for route answers.
pub struct RouteCache {
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl RouteCache {
    /// Create a new cache with the given configuration.
    pub fn new(config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { routes }
    }

    /// Get a cached answer.
    pub async fn get(&self, key: &RouteKey) -> Option<RouteEntry> {
        self.routes.get(key).await
    }

    /// Insert an answer into the cache.
    pub async fn insert(&self, key: RouteKey, entry: RouteEntry) {
        self.routes.insert(key, entry).await;
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.routes.invalidate_all();
    }
}

/// Planner over a shared network, with cached answers.
pub struct CachedPlanner {
    network: Arc<Network>,
    config: SearchConfig,
    cache: RouteCache,
}

impl CachedPlanner {
    /// Create a new cached planner that owns the network.
    pub fn new(network: Network, config: SearchConfig, cache_config: &CacheConfig) -> Self {
        Self {
            network: Arc::new(network),
            config,
            cache: RouteCache::new(cache_config),
        }
    }

    /// The network being queried.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Read-only view of the network for drawing.
    pub fn snapshot(&self) -> NetworkSnapshot {
        self.network.snapshot()
    }

    /// Find a route of the given kind, using the cache if possible.
    pub async fn route(
        &self,
        kind: RouteKind,
        request: &SearchRequest,
    ) -> Result<RouteEntry, SearchError> {
        request.validate()?;

        let key = (kind, request.start.clone(), request.goal.clone());
        if let Some(cached) = self.cache.get(&key).await {
            trace!(?kind, start = %request.start, goal = %request.goal, "Route cache hit");
            return Ok(cached);
        }

        let planner = Planner::new(&self.network, &self.config);
        let start = request.start.as_str();
        let goal = request.goal.as_str();
        let route = match kind {
            RouteKind::FewestTransfers => planner.fewest_transfers(start, goal)?,
            RouteKind::Fastest => planner.fastest(start, goal)?,
        };

        let summary = route
            .map(|r| RouteSummary::measure(r, &self.network))
            .transpose()?;
        let entry = Arc::new(summary);

        self.cache.insert(key, entry.clone()).await;

        Ok(entry)
    }

    /// Find both kinds of route.
    pub async fn plan(
        &self,
        request: &SearchRequest,
    ) -> Result<(RouteEntry, RouteEntry), SearchError> {
        let fewest = self.route(RouteKind::FewestTransfers, request).await?;
        let fastest = self.route(RouteKind::Fastest, request).await?;
        Ok((fewest, fastest))
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.cache.invalidate_all();
    }
}
