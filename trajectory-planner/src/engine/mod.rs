mod domain_store;
mod propagation;
mod propagator_queue;
mod search_statistics;
mod variables;

pub(crate) use domain_store::DomainStore;
pub(crate) use domain_store::EmptyDomain;
pub(crate) use propagation::PropagationEngine;
pub(crate) use propagator_queue::PropagatorQueue;
pub use search_statistics::SearchStatistics;
pub(crate) use variables::DomainId;
