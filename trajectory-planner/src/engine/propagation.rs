use log::trace;

use crate::basic_types::PropagationStatus;
use crate::constraints::ConstraintSet;
use crate::engine::DomainStore;
use crate::engine::PropagatorQueue;
use crate::engine::SearchStatistics;

/// Drives the [`DomainStore`] to a fixpoint of the constraints in a [`ConstraintSet`].
///
/// Only constraints which mention a variable that changed since the previous fixpoint are
/// propagated; [`PropagationEngine::enqueue_all`] seeds the work list with every constraint.
#[derive(Debug, Default, Clone)]
pub(crate) struct PropagationEngine {
    queue: PropagatorQueue,
}

impl PropagationEngine {
    pub(crate) fn enqueue_all(&mut self, constraints: &ConstraintSet) {
        for constraint_id in constraints.ids() {
            self.queue
                .enqueue(constraint_id, constraints[constraint_id].propagator().priority());
        }
    }

    fn enqueue_modified(&mut self, store: &mut DomainStore, constraints: &ConstraintSet) {
        for variable in store.drain_modified() {
            constraints.for_each_touching(variable, |constraint_id, constraint| {
                self.queue
                    .enqueue(constraint_id, constraint.propagator().priority())
            });
        }
    }

    /// Propagates until the work list is empty.
    ///
    /// On failure the work list is cleared and the domains are left as they were when the
    /// failure was detected; the caller is expected to backtrack.
    pub(crate) fn propagate(
        &mut self,
        store: &mut DomainStore,
        constraints: &ConstraintSet,
        statistics: &mut SearchStatistics,
    ) -> PropagationStatus {
        self.enqueue_modified(store, constraints);

        while let Some(constraint_id) = self.queue.pop() {
            statistics.num_propagations += 1;

            let propagator = constraints[constraint_id].propagator();
            if let Err(empty_domain) = propagator.propagate(store) {
                trace!("{} detected an empty domain", propagator.name());
                self.queue.clear();
                store.clear_modified();
                return Err(empty_domain);
            }

            self.enqueue_modified(store, constraints);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints;
    use crate::engine::EmptyDomain;
    use crate::propagators::test_helper::assert_bounds;

    #[test]
    fn narrowing_travels_along_a_chain() {
        let mut store = DomainStore::default();
        let speeds = (0..4)
            .map(|_| store.new_variable(30, 120))
            .collect::<Vec<_>>();

        let mut constraint_set = ConstraintSet::default();
        for window in speeds.windows(2) {
            let _ = constraint_set.add(constraints::speed_continuity(window[0], window[1], 30));
        }

        let mut engine = PropagationEngine::default();
        let mut statistics = SearchStatistics::default();
        engine.enqueue_all(&constraint_set);
        engine
            .propagate(&mut store, &constraint_set, &mut statistics)
            .expect("feasible");

        let _ = store.fix(speeds[0], 30).expect("non-empty domain");
        engine
            .propagate(&mut store, &constraint_set, &mut statistics)
            .expect("feasible");

        assert_bounds(&store, speeds[1], 30, 60);
        assert_bounds(&store, speeds[2], 30, 90);
        assert_bounds(&store, speeds[3], 30, 120);
    }

    #[test]
    fn fixed_lanes_fix_the_indicators() {
        let mut store = DomainStore::default();
        let lanes = (0..3).map(|_| store.new_variable(1, 3)).collect::<Vec<_>>();
        let changes = (0..2).map(|_| store.new_variable(0, 1)).collect::<Vec<_>>();

        let mut constraint_set = ConstraintSet::default();
        for t in 1..3 {
            let _ = constraint_set.add(constraints::lane_change_link(
                lanes[t - 1],
                lanes[t],
                changes[t - 1],
            ));
        }

        let mut engine = PropagationEngine::default();
        let mut statistics = SearchStatistics::default();
        engine.enqueue_all(&constraint_set);

        let _ = store.fix(lanes[0], 1).expect("non-empty domain");
        let _ = store.fix(lanes[1], 1).expect("non-empty domain");
        let _ = store.fix(lanes[2], 3).expect("non-empty domain");
        engine
            .propagate(&mut store, &constraint_set, &mut statistics)
            .expect("feasible");

        assert_bounds(&store, changes[0], 0, 0);
        assert_bounds(&store, changes[1], 1, 1);
    }

    #[test]
    fn failure_clears_the_work_list() {
        let mut store = DomainStore::default();
        let lane = store.new_variable(1, 3);
        let change = store.new_variable(0, 1);

        let mut constraint_set = ConstraintSet::default();
        let _ = constraint_set.add(constraints::obstacle_exclusion(lane, 2));
        let _ = constraint_set.add(constraints::aggregate_bound(&[change], 2, 8));

        let mut engine = PropagationEngine::default();
        let mut statistics = SearchStatistics::default();
        engine.enqueue_all(&constraint_set);

        assert_eq!(
            Err(EmptyDomain),
            engine.propagate(&mut store, &constraint_set, &mut statistics)
        );
        assert!(engine.queue.is_empty());
        assert_eq!(3, statistics.num_propagations);
    }
}
