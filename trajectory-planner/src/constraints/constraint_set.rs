use std::ops::Index;

use super::Constraint;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::engine::DomainId;

/// The index of a constraint in a [`ConstraintSet`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct ConstraintId(u32);

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId(index as u32)
    }
}

/// An ordered collection of constraints together with, for every variable, the constraints which
/// mention it. The order only affects the order in which constraints are first propagated.
#[derive(Clone, Debug, Default)]
pub(crate) struct ConstraintSet {
    constraints: KeyedVec<ConstraintId, Constraint>,
    watchers: KeyedVec<DomainId, Vec<ConstraintId>>,
}

impl ConstraintSet {
    pub(crate) fn add(&mut self, constraint: Constraint) -> ConstraintId {
        let scope = constraint.propagator().scope().to_vec();
        let constraint_id = self.constraints.push(constraint);

        for variable in scope {
            self.watchers.accommodate(variable);
            self.watchers[variable].push(constraint_id);
        }

        constraint_id
    }

    pub(crate) fn len(&self) -> usize {
        self.constraints.len()
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// The constraints which have `variable` in their scope, in the order they were added.
    pub(crate) fn touching(&self, variable: DomainId) -> impl Iterator<Item = ConstraintId> + '_ {
        self.watchers
            .get(variable)
            .map(|watchers| watchers.as_slice())
            .unwrap_or_default()
            .iter()
            .copied()
    }

    pub(crate) fn for_each_touching(
        &self,
        variable: DomainId,
        mut f: impl FnMut(ConstraintId, &Constraint),
    ) {
        for constraint_id in self.touching(variable) {
            f(constraint_id, &self.constraints[constraint_id]);
        }
    }
}

impl Index<ConstraintId> for ConstraintSet {
    type Output = Constraint;

    fn index(&self, index: ConstraintId) -> &Self::Output {
        &self.constraints[index]
    }
}
