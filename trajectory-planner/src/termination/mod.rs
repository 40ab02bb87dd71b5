//! A [`TerminationCondition`] is polled by the search before every node. It allows search to be
//! cut short, e.g. by a [`TimeBudget`] or a [`NodeBudget`]; an interrupted search reports the best
//! solution found so far without a proof of optimality.
mod combinator;
mod indefinite;
mod node_budget;
mod time_budget;

pub use combinator::Combinator;
pub use indefinite::Indefinite;
pub use node_budget::NodeBudget;
pub use time_budget::TimeBudget;

/// Determines when the search should give up before it has been exhausted.
pub trait TerminationCondition {
    /// Returns `true` when the search should stop, `false` otherwise.
    fn should_stop(&mut self) -> bool;

    /// Called whenever the search takes a node from its stack.
    fn node_has_been_explored(&mut self) {}
}

impl<T: TerminationCondition> TerminationCondition for Option<T> {
    fn should_stop(&mut self) -> bool {
        self.as_mut().is_some_and(|t| t.should_stop())
    }

    fn node_has_been_explored(&mut self) {
        if let Some(t) = self {
            t.node_has_been_explored()
        }
    }
}
