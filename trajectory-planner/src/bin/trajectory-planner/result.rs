use thiserror::Error;
use trajectory_planner::PlanningError;

pub(crate) type PlannerResult<T> = Result<T, PlannerError>;

#[derive(Error, Debug)]
pub(crate) enum PlannerError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error(transparent)]
    Planning(#[from] PlanningError),
    #[error("The obstacle '{0}' is not of the form T:LANE.")]
    InvalidObstacle(String),
}
