//! Branch-and-bound maximisation of a linear [`Objective`] over a model of finite domains.
mod branch_and_bound;
mod incumbent;
mod objective;

pub(crate) use branch_and_bound::BranchAndBound;
pub(crate) use incumbent::Incumbent;
pub(crate) use objective::Objective;

use crate::basic_types::Solution;

/// The outcome of a branch-and-bound search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum OptimisationResult {
    /// The search space was exhausted; no assignment has a larger objective value.
    Optimal {
        solution: Solution,
        objective_value: i64,
    },
    /// The search was interrupted after at least one solution was found.
    Satisfiable {
        best_solution: Solution,
        objective_value: i64,
    },
    /// The search space was exhausted without finding a solution.
    Unsatisfiable,
    /// The search was interrupted before any solution was found.
    Unknown,
}
