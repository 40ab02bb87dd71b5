//! The declarative constraints of a trajectory model.
//!
//! A [`Constraint`] is a tagged variant naming the role a relation plays in the model; each
//! variant carries the propagator which enforces it. Constraints are collected in a
//! [`ConstraintSet`] which knows, for every variable, which constraints mention it.
mod constraint_set;

pub(crate) use constraint_set::ConstraintId;
pub(crate) use constraint_set::ConstraintSet;

use crate::engine::DomainId;
use crate::propagators::BooleanSumBoundsPropagator;
use crate::propagators::BoundedDifferencePropagator;
use crate::propagators::NotEqualConstantPropagator;
use crate::propagators::Propagator;
use crate::propagators::ReifiedNotEqualPropagator;

#[derive(Clone, Debug)]
pub(crate) enum Constraint {
    /// `|speed(t) - speed(t - 1)| <= max_speed_delta`
    SpeedContinuity(BoundedDifferencePropagator),
    /// `|lane(t) - lane(t - 1)| <= max_lane_delta`
    LaneAdjacency(BoundedDifferencePropagator),
    /// `lane(t) != forbidden_lane`
    ObstacleExclusion(NotEqualConstantPropagator),
    /// `change(t) <-> lane(t) != lane(t - 1)`
    LaneChangeLink(ReifiedNotEqualPropagator),
    /// `min_lane_changes <= \sum change(t) <= max_lane_changes`
    AggregateBound(BooleanSumBoundsPropagator),
}

impl Constraint {
    pub(crate) fn propagator(&self) -> &dyn Propagator {
        match self {
            Constraint::SpeedContinuity(propagator) | Constraint::LaneAdjacency(propagator) => {
                propagator
            }
            Constraint::ObstacleExclusion(propagator) => propagator,
            Constraint::LaneChangeLink(propagator) => propagator,
            Constraint::AggregateBound(propagator) => propagator,
        }
    }
}

/// Creates the constraint `|current - previous| <= max_speed_delta` between two speeds.
pub(crate) fn speed_continuity(
    previous: DomainId,
    current: DomainId,
    max_speed_delta: i32,
) -> Constraint {
    Constraint::SpeedContinuity(BoundedDifferencePropagator::new(
        previous,
        current,
        max_speed_delta,
    ))
}

/// Creates the constraint `|current - previous| <= max_lane_delta` between two lanes.
pub(crate) fn lane_adjacency(
    previous: DomainId,
    current: DomainId,
    max_lane_delta: i32,
) -> Constraint {
    Constraint::LaneAdjacency(BoundedDifferencePropagator::new(
        previous,
        current,
        max_lane_delta,
    ))
}

/// Creates the constraint `lane != forbidden_lane`.
pub(crate) fn obstacle_exclusion(lane: DomainId, forbidden_lane: i32) -> Constraint {
    Constraint::ObstacleExclusion(NotEqualConstantPropagator::new(lane, forbidden_lane))
}

/// Creates the constraint `change <-> previous != current`.
pub(crate) fn lane_change_link(
    previous: DomainId,
    current: DomainId,
    change: DomainId,
) -> Constraint {
    Constraint::LaneChangeLink(ReifiedNotEqualPropagator::new(previous, current, change))
}

/// Creates the constraint `low <= \sum changes <= high`.
pub(crate) fn aggregate_bound(changes: &[DomainId], low: i32, high: i32) -> Constraint {
    Constraint::AggregateBound(BooleanSumBoundsPropagator::new(changes.into(), low, high))
}
