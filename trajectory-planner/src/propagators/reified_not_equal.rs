use super::Priority;
use super::Propagator;
use crate::basic_types::PropagationStatus;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// Propagator for the constraint `reif <-> (previous != current)`, where `reif` is a 0-1
/// variable.
///
/// The lanes decide the indicator once they are fixed, or once their domains no longer share a
/// value. In the other direction, an indicator fixed to 0 restricts both domains to their
/// intersection; an indicator fixed to 1 does not narrow the lanes, the disequality is only
/// enforced when both lanes are fixed.
#[derive(Clone, Debug)]
pub(crate) struct ReifiedNotEqualPropagator {
    /// `[previous, current, reif]`
    scope: [DomainId; 3],
}

impl ReifiedNotEqualPropagator {
    pub(crate) fn new(previous: DomainId, current: DomainId, reif: DomainId) -> Self {
        ReifiedNotEqualPropagator {
            scope: [previous, current, reif],
        }
    }

    fn share_a_value(store: &DomainStore, a: DomainId, b: DomainId) -> bool {
        let lower_bound = store.lower_bound(a).max(store.lower_bound(b));
        let upper_bound = store.upper_bound(a).min(store.upper_bound(b));

        (lower_bound..=upper_bound)
            .any(|value| store.contains(a, value) && store.contains(b, value))
    }

    /// Removes every value from `target` which is not in the domain of `source`.
    fn restrict_to(
        store: &mut DomainStore,
        source: DomainId,
        target: DomainId,
    ) -> PropagationStatus {
        let _ = store.narrow(target, store.lower_bound(source), store.upper_bound(source))?;

        let unsupported = store
            .values(target)
            .filter(|&value| !store.contains(source, value))
            .collect::<Vec<_>>();
        for value in unsupported {
            let _ = store.remove(target, value)?;
        }

        Ok(())
    }
}

impl Propagator for ReifiedNotEqualPropagator {
    fn name(&self) -> &str {
        "ReifiedNotEqual"
    }

    fn priority(&self) -> Priority {
        Priority::Medium
    }

    fn scope(&self) -> &[DomainId] {
        &self.scope
    }

    fn propagate(&self, store: &mut DomainStore) -> PropagationStatus {
        let [previous, current, reif] = self.scope;

        if store.is_fixed(previous) && store.is_fixed(current) {
            let differs = store.value(previous) != store.value(current);
            let _ = store.fix(reif, differs as i32)?;
            return Ok(());
        }

        if !Self::share_a_value(store, previous, current) {
            let _ = store.fix(reif, 1)?;
            return Ok(());
        }

        if store.is_fixed(reif) && store.value(reif) == 0 {
            Self::restrict_to(store, current, previous)?;
            Self::restrict_to(store, previous, current)?;
        }

        Ok(())
    }

    fn is_satisfied(&self, store: &DomainStore) -> bool {
        let [previous, current, reif] = self.scope;
        (store.value(previous) != store.value(current)) == (store.value(reif) == 1)
    }
}
