use log::warn;

use super::VariableSelector;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// A [`VariableSelector`] which selects the first variable which is not fixed given the order in
/// the provided list.
#[derive(Debug)]
pub(crate) struct InputOrder {
    variables: Vec<DomainId>,
}

impl InputOrder {
    pub(crate) fn new(variables: &[DomainId]) -> Self {
        if variables.is_empty() {
            warn!("The InputOrder variable selector was not provided with any variables");
        }
        InputOrder {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector for InputOrder {
    fn select_variable(&mut self, store: &DomainStore) -> Option<DomainId> {
        self.variables
            .iter()
            .find(|&&variable| !store.is_fixed(variable))
            .copied()
    }
}
