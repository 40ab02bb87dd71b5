use crate::basic_types::Solution;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// `\sum speeds - weight * \sum changes`, to be maximised.
///
/// The bounds on the number of changes are those of the aggregate constraint over `changes`; every
/// solution respects them, so they tighten the optimistic bound.
#[derive(Clone, Debug)]
pub(crate) struct Objective {
    speeds: Box<[DomainId]>,
    changes: Box<[DomainId]>,
    weight: i64,
    min_changes: i64,
    max_changes: i64,
}

impl Objective {
    pub(crate) fn new(
        speeds: &[DomainId],
        changes: &[DomainId],
        weight: i32,
        min_changes: i32,
        max_changes: i32,
    ) -> Objective {
        Objective {
            speeds: speeds.into(),
            changes: changes.into(),
            weight: weight.into(),
            min_changes: min_changes.into(),
            max_changes: max_changes.into(),
        }
    }

    pub(crate) fn evaluate(&self, solution: &Solution) -> i64 {
        let speed: i64 = self
            .speeds
            .iter()
            .map(|&speed| i64::from(solution.get_integer_value(speed)))
            .sum();
        let changes: i64 = self
            .changes
            .iter()
            .map(|&change| i64::from(solution.get_integer_value(change)))
            .sum();

        speed - self.weight * changes
    }

    /// An upper bound on the objective value of every solution that can still be reached from the
    /// current domains.
    pub(crate) fn upper_bound(&self, store: &DomainStore) -> i64 {
        let speed: i64 = self
            .speeds
            .iter()
            .map(|&speed| i64::from(store.upper_bound(speed)))
            .sum();

        let changes = if self.weight >= 0 {
            let fewest: i64 = self
                .changes
                .iter()
                .map(|&change| i64::from(store.lower_bound(change)))
                .sum();
            fewest.max(self.min_changes)
        } else {
            let most: i64 = self
                .changes
                .iter()
                .map(|&change| i64::from(store.upper_bound(change)))
                .sum();
            most.min(self.max_changes)
        };

        speed - self.weight * changes
    }
}
