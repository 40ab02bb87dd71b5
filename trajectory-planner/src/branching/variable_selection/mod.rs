mod input_order;

pub(crate) use input_order::InputOrder;

use crate::engine::DomainId;
use crate::engine::DomainStore;

/// Selects the variable to branch on next.
pub(crate) trait VariableSelector {
    /// Determines which variable to select next if there are any left to branch on.
    /// Should only return [`None`] when all variables which have been passed to the
    /// [`VariableSelector`] are fixed.
    fn select_variable(&mut self, store: &DomainStore) -> Option<DomainId>;
}
