use crate::engine::DomainId;
use crate::engine::DomainStore;
use crate::planner_assert_moderate;

/// A binary split of the domain of `variable`. The lower child restricts the variable to
/// `[lb, split]` and the upper child to `[split + 1, ub]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Decision {
    pub(crate) variable: DomainId,
    pub(crate) split: i32,
}

/// One side of a [`Decision`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Branch {
    Lower(Decision),
    Upper(Decision),
}

impl Decision {
    pub(crate) fn new(store: &DomainStore, variable: DomainId, split: i32) -> Decision {
        planner_assert_moderate!(
            store.lower_bound(variable) <= split && split < store.upper_bound(variable),
            "the split {split} does not leave both children of {variable} non-empty"
        );
        Decision { variable, split }
    }

    pub(crate) fn lower(self) -> Branch {
        Branch::Lower(self)
    }

    pub(crate) fn upper(self) -> Branch {
        Branch::Upper(self)
    }
}

/// A trait for defining a branching strategy.
pub(crate) trait Brancher {
    /// Returns the next [`Decision`], or [`None`] when every variable the brancher is responsible
    /// for has been fixed.
    fn next_decision(&mut self, store: &DomainStore) -> Option<Decision>;
}
