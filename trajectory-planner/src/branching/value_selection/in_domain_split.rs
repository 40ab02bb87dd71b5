use super::ValueSelector;
use crate::branching::Decision;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// A [`ValueSelector`] which splits the domain in half based on the lower-bound and upper-bound,
/// disregarding holes.
///
/// Note that this strategy will not necessarily result in an equal split if there are holes in the
/// domain.
#[derive(Debug, Copy, Clone)]
pub(crate) struct InDomainSplit;

impl ValueSelector for InDomainSplit {
    fn select_split(&mut self, store: &DomainStore, decision_variable: DomainId) -> Decision {
        let lower_bound = i64::from(store.lower_bound(decision_variable));
        let upper_bound = i64::from(store.upper_bound(decision_variable));

        // The midpoint of two i32 values always fits in an i32.
        let split = (lower_bound + (upper_bound - lower_bound) / 2) as i32;
        Decision::new(store, decision_variable, split)
    }
}
