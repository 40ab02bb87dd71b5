use itertools::Itertools;
use log::debug;

use crate::constraints;
use crate::constraints::ConstraintSet;
use crate::containers::HashSet;
use crate::engine::DomainId;
use crate::engine::DomainStore;
use crate::optimisation::Objective;
use crate::problem::InvalidProblemDefinition;
use crate::problem::Obstacle;
use crate::problem::ProblemDefinition;

/// The finite-domain model of a [`ProblemDefinition`]: one speed and one lane variable per time
/// step, one lane change indicator per pair of consecutive time steps, the constraints over them
/// and the objective.
#[derive(Debug)]
pub(crate) struct TrajectoryModel {
    store: DomainStore,
    constraints: ConstraintSet,
    objective: Objective,
    speeds: Vec<DomainId>,
    lanes: Vec<DomainId>,
    changes: Vec<DomainId>,
}

impl TrajectoryModel {
    pub(crate) fn new(
        problem: &ProblemDefinition,
    ) -> Result<TrajectoryModel, InvalidProblemDefinition> {
        problem.validate()?;

        let mut store = DomainStore::default();
        let mut speeds = Vec::with_capacity(problem.horizon);
        let mut lanes = Vec::with_capacity(problem.horizon);
        for _ in 0..problem.horizon {
            speeds.push(store.new_variable(problem.min_speed, problem.max_speed));
            lanes.push(store.new_variable(problem.min_lane, problem.max_lane));
        }
        let changes = (1..problem.horizon)
            .map(|_| store.new_variable(0, 1))
            .collect::<Vec<_>>();

        let mut constraints = ConstraintSet::default();
        for (t, ((&previous_speed, &speed), (&previous_lane, &lane))) in speeds
            .iter()
            .tuple_windows()
            .zip(lanes.iter().tuple_windows())
            .enumerate()
        {
            let _ = constraints.add(constraints::speed_continuity(
                previous_speed,
                speed,
                problem.max_speed_delta,
            ));
            if let Some(max_lane_delta) = problem.max_lane_delta {
                let _ = constraints.add(constraints::lane_adjacency(
                    previous_lane,
                    lane,
                    max_lane_delta,
                ));
            }
            let _ = constraints.add(constraints::lane_change_link(
                previous_lane,
                lane,
                changes[t],
            ));
        }

        let mut seen: HashSet<Obstacle> = HashSet::default();
        for obstacle in problem
            .obstacles
            .iter()
            .filter(|&&obstacle| seen.insert(obstacle))
        {
            let _ = constraints.add(constraints::obstacle_exclusion(
                lanes[obstacle.time],
                obstacle.lane,
            ));
        }

        let _ = constraints.add(constraints::aggregate_bound(
            &changes,
            problem.min_lane_changes,
            problem.max_lane_changes,
        ));

        let objective = Objective::new(
            &speeds,
            &changes,
            problem.weight_lane_change,
            problem.min_lane_changes,
            problem.max_lane_changes,
        );

        debug!(
            "Built a model with {} variables and {} constraints",
            store.num_domains(),
            constraints.len()
        );

        Ok(TrajectoryModel {
            store,
            constraints,
            objective,
            speeds,
            lanes,
            changes,
        })
    }

    /// The order in which the search branches: the speed and then the lane of every time step,
    /// followed by the lane change indicators.
    pub(crate) fn branching_order(&self) -> Vec<DomainId> {
        self.speeds
            .iter()
            .interleave(self.lanes.iter())
            .chain(self.changes.iter())
            .copied()
            .collect()
    }

    pub(crate) fn store(&self) -> &DomainStore {
        &self.store
    }

    pub(crate) fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    pub(crate) fn objective(&self) -> &Objective {
        &self.objective
    }

    pub(crate) fn speeds(&self) -> &[DomainId] {
        &self.speeds
    }

    pub(crate) fn lanes(&self) -> &[DomainId] {
        &self.lanes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraints::Constraint;

    fn count(model: &TrajectoryModel, kind: fn(&Constraint) -> bool) -> usize {
        model
            .constraints()
            .ids()
            .filter(|&id| kind(&model.constraints()[id]))
            .count()
    }

    #[test]
    fn default_model_has_the_expected_shape() {
        let model = TrajectoryModel::new(&ProblemDefinition::default()).expect("valid problem");

        assert_eq!(model.store().num_domains(), 10 + 10 + 9);
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::SpeedContinuity(_))),
            9
        );
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::LaneAdjacency(_))),
            9
        );
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::LaneChangeLink(_))),
            9
        );
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::ObstacleExclusion(_))),
            1
        );
        assert_eq!(
            count(&model, |c| matches!(c, Constraint::AggregateBound(_))),
            1
        );
    }

    #[test]
    fn lane_adjacency_can_be_disabled() {
        let problem = ProblemDefinition {
            max_lane_delta: None,
            ..Default::default()
        };
        let model = TrajectoryModel::new(&problem).expect("valid problem");

        assert_eq!(
            count(&model, |c| matches!(c, Constraint::LaneAdjacency(_))),
            0
        );
    }

    #[test]
    fn duplicate_obstacles_are_posted_once() {
        let problem = ProblemDefinition {
            obstacles: vec![Obstacle::new(2, 1), Obstacle::new(2, 1), Obstacle::new(4, 3)],
            ..Default::default()
        };
        let model = TrajectoryModel::new(&problem).expect("valid problem");

        assert_eq!(
            count(&model, |c| matches!(c, Constraint::ObstacleExclusion(_))),
            2
        );
    }

    #[test]
    fn branching_interleaves_speed_and_lane() {
        let problem = ProblemDefinition {
            horizon: 3,
            obstacles: vec![],
            ..Default::default()
        };
        let model = TrajectoryModel::new(&problem).expect("valid problem");

        let order = model.branching_order();
        assert_eq!(
            order[..6],
            [
                model.speeds()[0],
                model.lanes()[0],
                model.speeds()[1],
                model.lanes()[1],
                model.speeds()[2],
                model.lanes()[2],
            ]
        );
        assert_eq!(order.len(), 8);
    }

    #[test]
    fn invalid_problem_is_rejected_before_modelling() {
        let problem = ProblemDefinition {
            min_lane: 4,
            ..Default::default()
        };

        assert!(TrajectoryModel::new(&problem).is_err());
    }
}
