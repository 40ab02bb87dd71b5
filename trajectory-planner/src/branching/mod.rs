//! Contains the structures which decide how the search splits a node which propagation could not
//! solve.
//!
//! A [`Brancher`] produces a [`Decision`]: a variable together with the value at which its domain
//! is split into a lower child and an upper child. The [`IndependentVariableValueBrancher`]
//! composes a [`VariableSelector`] (which variable) with a [`ValueSelector`] (where to split).
mod brancher;
mod independent_variable_value_brancher;
pub(crate) mod value_selection;
pub(crate) mod variable_selection;

pub(crate) use brancher::Branch;
pub(crate) use brancher::Brancher;
pub(crate) use brancher::Decision;
pub(crate) use independent_variable_value_brancher::IndependentVariableValueBrancher;
pub(crate) use value_selection::InDomainSplit;
pub(crate) use value_selection::ValueSelector;
pub(crate) use variable_selection::InputOrder;
pub(crate) use variable_selection::VariableSelector;
