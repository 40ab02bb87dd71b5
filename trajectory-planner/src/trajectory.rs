//! Turns the outcome of the search into the ordered sequence of `(speed, lane)` pairs that a
//! renderer consumes.
use std::fmt::Display;

use itertools::Itertools;
use log::warn;
use thiserror::Error;

use crate::model::TrajectoryModel;
use crate::optimisation::OptimisationResult;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrajectoryError {
    #[error("no plan exists under the current constraints")]
    NoFeasibleTrajectory,
}

/// The planned speed and lane at one time step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrajectoryStep {
    pub time: usize,
    pub speed: i32,
    pub lane: i32,
}

impl Display for TrajectoryStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t={} speed={} lane={}", self.time, self.speed, self.lane)
    }
}

/// A complete plan: one [`TrajectoryStep`] for every time step of the horizon, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trajectory {
    steps: Vec<TrajectoryStep>,
    objective_value: i64,
    is_optimal: bool,
}

impl Trajectory {
    /// Extracts the trajectory from the result of searching `model`.
    ///
    /// A search which ended without a solution, whether it was exhausted or interrupted, yields
    /// [`TrajectoryError::NoFeasibleTrajectory`]; no partial trajectory is ever returned.
    pub(crate) fn build(
        result: OptimisationResult,
        model: &TrajectoryModel,
    ) -> Result<Trajectory, TrajectoryError> {
        let (solution, objective_value, is_optimal) = match result {
            OptimisationResult::Optimal {
                solution,
                objective_value,
            } => (solution, objective_value, true),
            OptimisationResult::Satisfiable {
                best_solution,
                objective_value,
            } => (best_solution, objective_value, false),
            OptimisationResult::Unsatisfiable => return Err(TrajectoryError::NoFeasibleTrajectory),
            OptimisationResult::Unknown => {
                warn!("The search was interrupted before any trajectory was found");
                return Err(TrajectoryError::NoFeasibleTrajectory);
            }
        };

        let steps = model
            .speeds()
            .iter()
            .zip(model.lanes())
            .enumerate()
            .map(|(time, (&speed, &lane))| TrajectoryStep {
                time,
                speed: solution.get_integer_value(speed),
                lane: solution.get_integer_value(lane),
            })
            .collect();

        Ok(Trajectory {
            steps,
            objective_value,
            is_optimal,
        })
    }

    pub fn steps(&self) -> &[TrajectoryStep] {
        &self.steps
    }

    /// The `(speed, lane)` pair of every time step, in order.
    pub fn pairs(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.steps.iter().map(|step| (step.speed, step.lane))
    }

    /// The number of time steps.
    pub fn horizon(&self) -> usize {
        self.steps.len()
    }

    pub fn speed_at(&self, time: usize) -> Option<i32> {
        self.steps.get(time).map(|step| step.speed)
    }

    pub fn lane_at(&self, time: usize) -> Option<i32> {
        self.steps.get(time).map(|step| step.lane)
    }

    /// The number of time steps at which the lane differs from the lane of the previous step.
    pub fn num_lane_changes(&self) -> usize {
        self.steps
            .iter()
            .tuple_windows()
            .filter(|(previous, current)| previous.lane != current.lane)
            .count()
    }

    pub fn objective_value(&self) -> i64 {
        self.objective_value
    }

    /// Whether no other trajectory has a larger objective value. This is `false` only when the
    /// search was interrupted.
    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }
}

impl Display for Trajectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        writeln!(f, "objective={}", self.objective_value)?;
        write!(
            f,
            "status={}",
            if self.is_optimal { "optimal" } else { "feasible" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Solution;
    use crate::problem::ProblemDefinition;

    fn model() -> TrajectoryModel {
        TrajectoryModel::new(&ProblemDefinition {
            horizon: 3,
            obstacles: vec![],
            ..Default::default()
        })
        .expect("valid problem")
    }

    /// A solution of `model` with speeds 40, 50, 60 and lanes 1, 2, 2.
    fn solution(model: &TrajectoryModel) -> Solution {
        let mut store = model.store().clone();
        for (&speed, value) in model.speeds().iter().zip([40, 50, 60]) {
            let _ = store.fix(speed, value).expect("in domain");
        }
        for (&lane, value) in model.lanes().iter().zip([1, 2, 2]) {
            let _ = store.fix(lane, value).expect("in domain");
        }
        for change in store.variables().skip(6).collect::<Vec<_>>() {
            let _ = store.fix(change, 0).expect("in domain");
        }
        Solution::from_store(&store)
    }

    #[test]
    fn steps_are_ordered_by_time() {
        let model = model();
        let result = OptimisationResult::Optimal {
            solution: solution(&model),
            objective_value: 148,
        };

        let trajectory = Trajectory::build(result, &model).expect("a solution was found");

        assert_eq!(
            trajectory.pairs().collect::<Vec<_>>(),
            vec![(40, 1), (50, 2), (60, 2)]
        );
        assert_eq!(trajectory.horizon(), 3);
        assert_eq!(trajectory.num_lane_changes(), 1);
        assert_eq!(trajectory.speed_at(2), Some(60));
        assert_eq!(trajectory.lane_at(3), None);
        assert!(trajectory.is_optimal());
    }

    #[test]
    fn interrupted_result_is_not_optimal() {
        let model = model();
        let result = OptimisationResult::Satisfiable {
            best_solution: solution(&model),
            objective_value: 148,
        };

        let trajectory = Trajectory::build(result, &model).expect("a solution was found");

        assert!(!trajectory.is_optimal());
        assert!(trajectory.to_string().ends_with("objective=148\nstatus=feasible"));
    }

    #[test]
    fn no_solution_is_an_error() {
        let model = model();

        assert_eq!(
            Trajectory::build(OptimisationResult::Unsatisfiable, &model),
            Err(TrajectoryError::NoFeasibleTrajectory)
        );
        assert_eq!(
            Trajectory::build(OptimisationResult::Unknown, &model),
            Err(TrajectoryError::NoFeasibleTrajectory)
        );
    }

    #[test]
    fn steps_render_as_lines() {
        let step = TrajectoryStep {
            time: 5,
            speed: 90,
            lane: 3,
        };

        assert_eq!(step.to_string(), "t=5 speed=90 lane=3");
    }
}
