//! Search configuration for the route finders.

/// Configuration parameters for route search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of stations a single query may expand.
    /// `None` lets every search run until it finds the goal or its
    /// frontier is empty.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given expansion limit.
    pub fn new(max_expansions: Option<usize>) -> Self {
        Self { max_expansions }
    }

    /// A configuration with no expansion limit.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns true once `expanded` stations have used up the budget.
    pub fn expansion_limit_reached(&self, expanded: usize) -> bool {
        self.max_expansions.is_some_and(|max| expanded >= max)
    }
}
