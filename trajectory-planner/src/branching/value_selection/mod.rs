mod in_domain_split;

pub(crate) use in_domain_split::InDomainSplit;

use crate::branching::Decision;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// Decides where the domain of a selected variable is split.
pub(crate) trait ValueSelector {
    /// Returns the [`Decision`] for `decision_variable`, which is guaranteed not to be fixed.
    fn select_split(&mut self, store: &DomainStore, decision_variable: DomainId) -> Decision;
}
