use super::TerminationCondition;

/// A [`TerminationCondition`] which triggers once a fixed number of search nodes has been
/// explored.
#[derive(Debug, Copy, Clone)]
pub struct NodeBudget {
    budget: u64,
    num_nodes: u64,
}

impl NodeBudget {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            num_nodes: 0,
        }
    }
}

impl TerminationCondition for NodeBudget {
    fn should_stop(&mut self) -> bool {
        self.num_nodes >= self.budget
    }

    fn node_has_been_explored(&mut self) {
        self.num_nodes += 1;
    }
}
