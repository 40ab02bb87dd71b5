use super::Priority;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// Propagator for the constraint `variable != value`.
#[derive(Clone, Debug)]
pub(crate) struct NotEqualConstantPropagator {
    scope: [DomainId; 1],
    value: i32,
}

impl NotEqualConstantPropagator {
    pub(crate) fn new(variable: DomainId, value: i32) -> Self {
        NotEqualConstantPropagator {
            scope: [variable],
            value,
        }
    }
}

impl Propagator for NotEqualConstantPropagator {
    fn name(&self) -> &str {
        "NotEqualConstant"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn scope(&self) -> &[DomainId] {
        &self.scope
    }

    fn propagate(&self, store: &mut DomainStore) -> PropagationStatus {
        let _ = store.remove(self.scope[0], self.value)?;
        Ok(())
    }

    fn is_satisfied(&self, store: &DomainStore) -> bool {
        store.value(self.scope[0]) != self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EmptyDomain;
    use crate::propagators::test_helper::assert_bounds;

    #[test]
    fn middle_value_becomes_hole() {
        let mut store = DomainStore::default();
        let lane = store.new_variable(1, 3);

        NotEqualConstantPropagator::new(lane, 2)
            .propagate(&mut store)
            .expect("non-empty domain");

        assert_eq!(vec![1, 3], store.values(lane).collect::<Vec<_>>());
    }

    #[test]
    fn endpoint_is_excluded_by_moving_bound() {
        let mut store = DomainStore::default();
        let lane = store.new_variable(1, 3);

        NotEqualConstantPropagator::new(lane, 1)
            .propagate(&mut store)
            .expect("non-empty domain");

        assert_bounds(&store, lane, 2, 3);
    }

    #[test]
    fn singleton_forbidden_value_is_infeasible() {
        let mut store = DomainStore::default();
        let lane = store.new_variable(2, 2);

        assert_eq!(
            Err(EmptyDomain),
            NotEqualConstantPropagator::new(lane, 2).propagate(&mut store)
        );
    }

    #[test]
    fn value_outside_domain_is_no_op() {
        let mut store = DomainStore::default();
        let lane = store.new_variable(1, 3);

        NotEqualConstantPropagator::new(lane, 5)
            .propagate(&mut store)
            .expect("non-empty domain");

        assert_bounds(&store, lane, 1, 3);
        assert_eq!(0, store.drain_modified().count());
    }
}
