//! # Trajectory planner
//! Plans the speed and lane of a vehicle over a fixed number of discrete time steps. A plan has
//! to respect a bound on the change in speed between consecutive steps, keep out of a set of
//! blocked `(time, lane)` cells, and change lanes a bounded number of times. Among all such plans
//! the planner returns one which maximises the total speed minus a penalty per lane change.
//!
//! The problem is solved by a small finite-domain constraint solver: bounds-consistent
//! propagators drive the domains of the variables to a fixpoint, and a depth-first
//! branch-and-bound search splits domains in half until every variable is fixed, pruning every
//! node whose optimistic objective bound cannot beat the best plan found so far.
//!
//! # Planning a trajectory
//! Problems are described by a [`ProblemDefinition`], whose [`Default`] is the standard scenario
//! of ten time steps with an obstacle in lane 2 at time step 5:
//! ```rust
//! # use trajectory_planner::plan_trajectory;
//! # use trajectory_planner::ProblemDefinition;
//! let problem = ProblemDefinition {
//!     horizon: 6,
//!     ..Default::default()
//! };
//!
//! let trajectory = plan_trajectory(&problem).expect("the problem has a solution");
//!
//! assert_eq!(trajectory.horizon(), 6);
//! assert_ne!(trajectory.lane_at(5), Some(2));
//! assert!(trajectory.is_optimal());
//! for (speed, lane) in trajectory.pairs() {
//!     assert!((30..=120).contains(&speed));
//!     assert!((1..=3).contains(&lane));
//! }
//! ```
//!
//! When no plan satisfies the constraints, the error says so:
//! ```rust
//! # use trajectory_planner::plan_trajectory;
//! # use trajectory_planner::PlanningError;
//! # use trajectory_planner::ProblemDefinition;
//! # use trajectory_planner::TrajectoryError;
//! let problem = ProblemDefinition {
//!     min_lane_changes: 10,
//!     max_lane_changes: 10,
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     plan_trajectory(&problem),
//!     Err(PlanningError::Trajectory(TrajectoryError::NoFeasibleTrajectory))
//! );
//! ```
//!
//! The search can be bounded with a [`termination::TerminationCondition`] through a
//! [`TrajectoryPlanner`]; a trajectory found by an interrupted search is not necessarily optimal:
//! ```rust
//! # use std::time::Duration;
//! # use trajectory_planner::termination::TimeBudget;
//! # use trajectory_planner::ProblemDefinition;
//! # use trajectory_planner::TrajectoryPlanner;
//! let mut planner = TrajectoryPlanner::new(&ProblemDefinition::default())?;
//! let mut termination = TimeBudget::starting_now(Duration::from_secs(10));
//!
//! if let Ok(trajectory) = planner.plan(&mut termination) {
//!     println!("{trajectory}");
//! }
//! println!("explored {} nodes", planner.statistics().num_nodes);
//! # Ok::<(), trajectory_planner::InvalidProblemDefinition>(())
//! ```
pub mod asserts;
pub(crate) mod basic_types;
pub(crate) mod branching;
pub(crate) mod constraints;
pub(crate) mod containers;
pub(crate) mod engine;
pub(crate) mod model;
pub(crate) mod optimisation;
mod planner;
mod problem;
pub(crate) mod propagators;
pub mod statistics;
pub mod termination;
mod trajectory;

pub use engine::SearchStatistics;
pub use planner::PlanningError;
pub use planner::TrajectoryPlanner;
pub use problem::InvalidProblemDefinition;
pub use problem::Obstacle;
pub use problem::ProblemDefinition;
pub use trajectory::Trajectory;
pub use trajectory::TrajectoryError;
pub use trajectory::TrajectoryStep;

use crate::termination::Indefinite;

/// Plans the optimal trajectory for `problem`, searching until the search space is exhausted.
pub fn plan_trajectory(problem: &ProblemDefinition) -> Result<Trajectory, PlanningError> {
    let mut planner = TrajectoryPlanner::new(problem)?;
    Ok(planner.plan(&mut Indefinite)?)
}
