use crate::heuristic::Heuristic;

/// Per-run search settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub heuristic: Heuristic,
    /// Stop with [`crate::SearchError::BudgetExceeded`] after this many expansions.
    /// Unbounded by default, in which case an unsolvable pair is only reported
    /// once every reachable state has been expanded.
    pub max_expansions: Option<u64>,
    /// Check permutation parity before searching and report unsolvable pairs
    /// immediately.
    pub precheck_solvability: bool,
}

impl SearchConfig {
    pub fn new(heuristic: Heuristic) -> Self {
        SearchConfig {
            heuristic,
            ..Self::default()
        }
    }

    pub fn with_max_expansions(mut self, limit: u64) -> Self {
        self.max_expansions = Some(limit);
        self
    }

    pub fn with_solvability_check(mut self, enabled: bool) -> Self {
        self.precheck_solvability = enabled;
        self
    }
}
