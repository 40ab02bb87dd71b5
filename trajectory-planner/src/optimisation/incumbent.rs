use crate::basic_types::Solution;

/// The best solution found so far by a single search, together with its objective value.
#[derive(Clone, Debug, Default)]
pub(crate) struct Incumbent {
    best: Option<(i64, Solution)>,
}

impl Incumbent {
    pub(crate) fn objective_value(&self) -> Option<i64> {
        self.best.as_ref().map(|(objective_value, _)| *objective_value)
    }

    /// Whether a node whose optimistic bound is `bound` could contain a strictly better solution.
    pub(crate) fn can_be_improved_to(&self, bound: i64) -> bool {
        self.objective_value()
            .is_none_or(|objective_value| bound > objective_value)
    }

    /// Records `solution` if it is strictly better than the incumbent. Returns whether it was
    /// recorded.
    pub(crate) fn offer(&mut self, objective_value: i64, solution: Solution) -> bool {
        if !self.can_be_improved_to(objective_value) {
            return false;
        }

        self.best = Some((objective_value, solution));
        true
    }

    pub(crate) fn into_best(self) -> Option<(i64, Solution)> {
        self.best
    }
}
