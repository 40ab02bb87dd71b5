use std::time::Duration;

use crate::statistics::log_statistic;
use crate::statistics::log_statistic_postfix;

/// Counters gathered during a single branch-and-bound search.
#[derive(Debug, Default, Clone, Copy)]
pub struct SearchStatistics {
    /// The number of search nodes taken from the node stack, including the root.
    pub num_nodes: u64,
    /// The number of nodes discarded because their objective bound could not beat the incumbent.
    pub num_pruned_nodes: u64,
    /// The number of nodes in which propagation emptied a domain.
    pub num_infeasible_nodes: u64,
    /// The number of improving solutions found.
    pub num_solutions: u64,
    /// The deepest decision level reached.
    pub peak_depth: u64,
    /// The number of individual propagator invocations.
    pub num_propagations: u64,
    pub time_spent_in_search: Duration,
}

impl SearchStatistics {
    /// Logs the statistics through [`log_statistic`], followed by the configured postfix.
    pub fn log(&self, objective: Option<i64>) {
        log_statistic("nodes", self.num_nodes);
        log_statistic("prunedNodes", self.num_pruned_nodes);
        log_statistic("infeasibleNodes", self.num_infeasible_nodes);
        log_statistic("solutions", self.num_solutions);
        log_statistic("peakDepth", self.peak_depth);
        log_statistic("propagations", self.num_propagations);
        log_statistic("solveTime", self.time_spent_in_search.as_secs_f64());
        if let Some(objective) = objective {
            log_statistic("objective", objective);
        }
        log_statistic_postfix();
    }
}
