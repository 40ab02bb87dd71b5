use crate::containers::KeyedVec;
use crate::engine::DomainId;
use crate::engine::DomainStore;
use crate::planner_assert_simple;

/// A complete assignment: the value of every variable of a model at a search node in which all
/// domains were fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Solution {
    values: KeyedVec<DomainId, i32>,
}

impl Solution {
    pub(crate) fn from_store(store: &DomainStore) -> Solution {
        planner_assert_simple!(
            store.all_fixed(),
            "a solution can only be taken from a store in which every domain is fixed"
        );

        Solution {
            values: store.variables().map(|variable| store.value(variable)).collect(),
        }
    }

    pub(crate) fn get_integer_value(&self, variable: DomainId) -> i32 {
        self.values[variable]
    }
}
