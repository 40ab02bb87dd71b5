//! Contains containers which are used by the planner.
mod keyed_vec;

use fnv::FnvBuildHasher;
pub(crate) use keyed_vec::*;

/// [`std::collections::HashSet`] that defaults to a deterministic hasher.
pub(crate) type HashSet<K, Hasher = FnvBuildHasher> = std::collections::HashSet<K, Hasher>;
