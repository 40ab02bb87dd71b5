//! The propagators which enforce the constraints of a trajectory model.
//!
//! Each propagator narrows domains through the [`DomainStore`] only; it never inspects or
//! mutates domains in any other way. A propagator is expected to be idempotent with respect to a
//! single invocation, but it may be invoked again whenever a variable in its scope changes.
mod boolean_sum_bounds;
mod bounded_difference;
mod not_equal_constant;
mod reified_not_equal;

pub(crate) use boolean_sum_bounds::BooleanSumBoundsPropagator;
pub(crate) use bounded_difference::BoundedDifferencePropagator;
pub(crate) use not_equal_constant::NotEqualConstantPropagator;
pub(crate) use reified_not_equal::ReifiedNotEqualPropagator;

use crate::basic_types::PropagationStatus;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// The priority with which a propagator is taken from the work list; cheap propagators go first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Priority {
    High = 0,
    Medium = 1,
    Low = 2,
}

impl Priority {
    pub(crate) const NUM_LEVELS: u32 = 3;
}

pub(crate) trait Propagator {
    /// A short name used in log messages.
    fn name(&self) -> &str;

    fn priority(&self) -> Priority;

    /// The variables whose domain changes may allow this propagator to narrow further.
    fn scope(&self) -> &[DomainId];

    /// Narrows the domains of the variables in the scope, or reports that the constraint cannot be
    /// satisfied under the current domains.
    fn propagate(&self, store: &mut DomainStore) -> PropagationStatus;

    /// Checks the constraint on a store in which every variable in the scope is fixed.
    fn is_satisfied(&self, store: &DomainStore) -> bool;
}
