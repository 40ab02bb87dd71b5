use super::Priority;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// Propagator for the constraint `|current - previous| <= max_difference`.
///
/// Enforces bounds consistency: each variable is narrowed to the interval spanned by the other
/// variable's bounds widened by `max_difference`.
#[derive(Clone, Debug)]
pub(crate) struct BoundedDifferencePropagator {
    /// `[previous, current]`
    scope: [DomainId; 2],
    max_difference: i32,
}

impl BoundedDifferencePropagator {
    pub(crate) fn new(previous: DomainId, current: DomainId, max_difference: i32) -> Self {
        BoundedDifferencePropagator {
            scope: [previous, current],
            max_difference,
        }
    }

    fn narrow_towards(
        &self,
        store: &mut DomainStore,
        source: DomainId,
        target: DomainId,
    ) -> PropagationStatus {
        let lower_bound = store.lower_bound(source).saturating_sub(self.max_difference);
        let upper_bound = store.upper_bound(source).saturating_add(self.max_difference);
        let _ = store.narrow(target, lower_bound, upper_bound)?;
        Ok(())
    }
}

impl Propagator for BoundedDifferencePropagator {
    fn name(&self) -> &str {
        "BoundedDifference"
    }

    fn priority(&self) -> Priority {
        Priority::High
    }

    fn scope(&self) -> &[DomainId] {
        &self.scope
    }

    fn propagate(&self, store: &mut DomainStore) -> PropagationStatus {
        let [previous, current] = self.scope;

        self.narrow_towards(store, previous, current)?;
        self.narrow_towards(store, current, previous)
    }

    fn is_satisfied(&self, store: &DomainStore) -> bool {
        let [previous, current] = self.scope;
        (store.value(current) as i64 - store.value(previous) as i64).abs()
            <= self.max_difference as i64
    }
}
