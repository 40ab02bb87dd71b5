use crate::engine::EmptyDomain;

/// The result of invoking a propagator. Propagation either succeeds, possibly after narrowing
/// domains, or detects that no solution exists below the current node.
pub(crate) type PropagationStatus = Result<(), EmptyDomain>;
