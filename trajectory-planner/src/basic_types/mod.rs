mod propagation_status;
mod solution;
mod trail;

pub(crate) use propagation_status::PropagationStatus;
pub(crate) use solution::Solution;
pub(crate) use trail::Trail;
