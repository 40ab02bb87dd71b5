//! The parameters of one planning problem.
//!
//! A [`ProblemDefinition`] is a plain set of fields with sensible defaults; individual parameters
//! are overridden with struct-update syntax:
//!
//! ```rust
//! # use trajectory_planner::ProblemDefinition;
//! let problem = ProblemDefinition {
//!     horizon: 6,
//!     max_speed: 90,
//!     ..Default::default()
//! };
//! assert!(problem.validate().is_ok());
//! ```
use thiserror::Error;

/// A cell which may not be occupied: the lane `lane` at time step `time`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Obstacle {
    pub time: usize,
    pub lane: i32,
}

impl Obstacle {
    pub fn new(time: usize, lane: i32) -> Obstacle {
        Obstacle { time, lane }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProblemDefinition {
    /// The number of time steps.
    pub horizon: usize,
    pub min_speed: i32,
    pub max_speed: i32,
    pub min_lane: i32,
    pub max_lane: i32,
    /// The largest change in speed between two consecutive time steps.
    pub max_speed_delta: i32,
    /// The largest change in lane between two consecutive time steps; [`None`] allows the vehicle
    /// to jump between any two lanes.
    pub max_lane_delta: Option<i32>,
    pub obstacles: Vec<Obstacle>,
    /// The inclusive bounds on the number of time steps at which the vehicle changes lane.
    pub min_lane_changes: i32,
    pub max_lane_changes: i32,
    /// The objective penalty of a single lane change.
    pub weight_lane_change: i32,
}

impl Default for ProblemDefinition {
    fn default() -> Self {
        ProblemDefinition {
            horizon: 10,
            min_speed: 30,
            max_speed: 120,
            min_lane: 1,
            max_lane: 3,
            max_speed_delta: 30,
            max_lane_delta: Some(1),
            obstacles: vec![Obstacle::new(5, 2)],
            min_lane_changes: 1,
            max_lane_changes: 8,
            weight_lane_change: 2,
        }
    }
}

/// The ways in which a [`ProblemDefinition`] can be malformed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidProblemDefinition {
    #[error("the horizon has to contain at least one time step")]
    EmptyHorizon,
    #[error("the minimum speed {min_speed} exceeds the maximum speed {max_speed}")]
    SpeedBounds { min_speed: i32, max_speed: i32 },
    #[error("the minimum lane {min_lane} exceeds the maximum lane {max_lane}")]
    LaneBounds { min_lane: i32, max_lane: i32 },
    #[error("the maximum speed delta {0} is negative")]
    NegativeSpeedDelta(i32),
    #[error("the maximum lane delta {0} is negative")]
    NegativeLaneDelta(i32),
    #[error("the minimum number of lane changes {0} is negative")]
    NegativeLaneChanges(i32),
    #[error(
        "the minimum number of lane changes {min_lane_changes} exceeds the maximum \
         {max_lane_changes}"
    )]
    LaneChangeBounds {
        min_lane_changes: i32,
        max_lane_changes: i32,
    },
    #[error("the obstacle at time step {time} lies outside the horizon of {horizon} steps")]
    ObstacleTime { time: usize, horizon: usize },
    #[error("the obstacle in lane {lane} lies outside the lanes [{min_lane}, {max_lane}]")]
    ObstacleLane {
        lane: i32,
        min_lane: i32,
        max_lane: i32,
    },
}

impl ProblemDefinition {
    /// Checks the parameters for combinations which do not describe a planning problem.
    ///
    /// Parameters which describe a problem without solutions, such as requiring more lane changes
    /// than there are time steps, are accepted; they are reported by the search.
    pub fn validate(&self) -> Result<(), InvalidProblemDefinition> {
        if self.horizon == 0 {
            return Err(InvalidProblemDefinition::EmptyHorizon);
        }
        if self.min_speed > self.max_speed {
            return Err(InvalidProblemDefinition::SpeedBounds {
                min_speed: self.min_speed,
                max_speed: self.max_speed,
            });
        }
        if self.min_lane > self.max_lane {
            return Err(InvalidProblemDefinition::LaneBounds {
                min_lane: self.min_lane,
                max_lane: self.max_lane,
            });
        }
        if self.max_speed_delta < 0 {
            return Err(InvalidProblemDefinition::NegativeSpeedDelta(
                self.max_speed_delta,
            ));
        }
        if let Some(max_lane_delta) = self.max_lane_delta.filter(|&delta| delta < 0) {
            return Err(InvalidProblemDefinition::NegativeLaneDelta(max_lane_delta));
        }
        if self.min_lane_changes < 0 {
            return Err(InvalidProblemDefinition::NegativeLaneChanges(
                self.min_lane_changes,
            ));
        }
        if self.min_lane_changes > self.max_lane_changes {
            return Err(InvalidProblemDefinition::LaneChangeBounds {
                min_lane_changes: self.min_lane_changes,
                max_lane_changes: self.max_lane_changes,
            });
        }

        for obstacle in &self.obstacles {
            if obstacle.time >= self.horizon {
                return Err(InvalidProblemDefinition::ObstacleTime {
                    time: obstacle.time,
                    horizon: self.horizon,
                });
            }
            if !(self.min_lane..=self.max_lane).contains(&obstacle.lane) {
                return Err(InvalidProblemDefinition::ObstacleLane {
                    lane: obstacle.lane,
                    min_lane: self.min_lane,
                    max_lane: self.max_lane,
                });
            }
        }

        Ok(())
    }
}
