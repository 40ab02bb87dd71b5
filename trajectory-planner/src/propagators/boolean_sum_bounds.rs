use super::Priority;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::engine::DomainId;
use crate::engine::DomainStore;
use crate::engine::EmptyDomain;

/// Propagator for the constraint `lower <= \sum b_i <= upper` over 0-1 variables `b_i`.
///
/// This only detects inconsistency: the propagator fails once the largest attainable sum drops
/// below `lower` or the smallest attainable sum exceeds `upper`, but it never narrows the
/// domains of the `b_i` themselves.
#[derive(Clone, Debug)]
pub(crate) struct BooleanSumBoundsPropagator {
    booleans: Box<[DomainId]>,
    lower: i32,
    upper: i32,
}

impl BooleanSumBoundsPropagator {
    pub(crate) fn new(booleans: Box<[DomainId]>, lower: i32, upper: i32) -> Self {
        BooleanSumBoundsPropagator {
            booleans,
            lower,
            upper,
        }
    }

    fn sum_of(&self, bound: impl Fn(DomainId) -> i32) -> i64 {
        self.booleans.iter().map(|&b| bound(b) as i64).sum()
    }
}

impl Propagator for BooleanSumBoundsPropagator {
    fn name(&self) -> &str {
        "BooleanSumBounds"
    }

    fn priority(&self) -> Priority {
        Priority::Low
    }

    fn scope(&self) -> &[DomainId] {
        &self.booleans
    }

    fn propagate(&self, store: &mut DomainStore) -> PropagationStatus {
        let smallest_sum = self.sum_of(|b| store.lower_bound(b));
        let largest_sum = self.sum_of(|b| store.upper_bound(b));

        if largest_sum < self.lower as i64 || smallest_sum > self.upper as i64 {
            return Err(EmptyDomain);
        }

        Ok(())
    }

    fn is_satisfied(&self, store: &DomainStore) -> bool {
        let sum = self.sum_of(|b| store.value(b));
        self.lower as i64 <= sum && sum <= self.upper as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::propagators::test_helper::assert_bounds;

    fn booleans(store: &mut DomainStore, bounds: &[(i32, i32)]) -> Box<[DomainId]> {
        bounds
            .iter()
            .map(|&(lb, ub)| store.new_variable(lb, ub))
            .collect()
    }

    #[test]
    fn too_few_possible_changes_is_infeasible() {
        let mut store = DomainStore::default();
        let b = booleans(&mut store, &[(0, 0), (0, 1), (0, 0)]);

        let propagator = BooleanSumBoundsPropagator::new(b, 2, 8);

        assert_eq!(Err(EmptyDomain), propagator.propagate(&mut store));
    }

    #[test]
    fn too_many_forced_changes_is_infeasible() {
        let mut store = DomainStore::default();
        let b = booleans(&mut store, &[(1, 1), (1, 1), (0, 1)]);

        let propagator = BooleanSumBoundsPropagator::new(b, 0, 1);

        assert_eq!(Err(EmptyDomain), propagator.propagate(&mut store));
    }

    #[test]
    fn no_narrowing_while_bounds_can_be_met() {
        let mut store = DomainStore::default();
        let b = booleans(&mut store, &[(0, 0), (0, 1), (0, 0)]);

        let propagator = BooleanSumBoundsPropagator::new(b.clone(), 1, 8);
        propagator.propagate(&mut store).expect("feasible");

        // The only boolean that can still be one is not forced to one.
        assert_bounds(&store, b[1], 0, 1);
    }

    #[test]
    fn empty_sum_with_positive_lower_bound_is_infeasible() {
        let mut store = DomainStore::default();

        let propagator = BooleanSumBoundsPropagator::new(Box::new([]), 1, 8);

        assert_eq!(Err(EmptyDomain), propagator.propagate(&mut store));
    }
}
