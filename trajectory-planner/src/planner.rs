use thiserror::Error;

use crate::branching::InDomainSplit;
use crate::branching::IndependentVariableValueBrancher;
use crate::branching::InputOrder;
use crate::engine::SearchStatistics;
use crate::model::TrajectoryModel;
use crate::optimisation::BranchAndBound;
use crate::problem::InvalidProblemDefinition;
use crate::problem::ProblemDefinition;
use crate::termination::TerminationCondition;
use crate::trajectory::Trajectory;
use crate::trajectory::TrajectoryError;

/// The errors that can occur between receiving a [`ProblemDefinition`] and returning a
/// [`Trajectory`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanningError {
    #[error("invalid problem definition: {0}")]
    InvalidProblemDefinition(#[from] InvalidProblemDefinition),
    #[error(transparent)]
    Trajectory(#[from] TrajectoryError),
}

/// Plans trajectories for a single [`ProblemDefinition`].
///
/// The model is built, and the definition validated, when the planner is created. Every call to
/// [`TrajectoryPlanner::plan`] searches the model from scratch.
#[derive(Debug)]
pub struct TrajectoryPlanner {
    model: TrajectoryModel,
    statistics: SearchStatistics,
    objective_value: Option<i64>,
}

impl TrajectoryPlanner {
    pub fn new(problem: &ProblemDefinition) -> Result<TrajectoryPlanner, InvalidProblemDefinition> {
        Ok(TrajectoryPlanner {
            model: TrajectoryModel::new(problem)?,
            statistics: SearchStatistics::default(),
            objective_value: None,
        })
    }

    /// Searches for the trajectory with the largest objective value until the search space is
    /// exhausted or `termination` triggers.
    pub fn plan(
        &mut self,
        termination: &mut impl TerminationCondition,
    ) -> Result<Trajectory, TrajectoryError> {
        let mut search = BranchAndBound::new(
            self.model.store().clone(),
            self.model.constraints(),
            self.model.objective(),
        );
        let mut brancher = IndependentVariableValueBrancher::new(
            InputOrder::new(&self.model.branching_order()),
            InDomainSplit,
        );

        let result = search.maximise(&mut brancher, termination);
        self.statistics = *search.statistics();

        let trajectory = Trajectory::build(result, &self.model);
        self.objective_value = trajectory.as_ref().ok().map(Trajectory::objective_value);
        trajectory
    }

    /// The statistics of the most recent call to [`TrajectoryPlanner::plan`].
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub fn log_statistics(&self) {
        self.statistics.log(self.objective_value);
    }
}
