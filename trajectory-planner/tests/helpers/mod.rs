//! Shared helpers for the integration tests of the planner.
#![allow(
    dead_code,
    reason = "is used in integration tests but unable to find a way to silence these warnings"
)]

use std::io::Read;
use std::path::PathBuf;
use std::process::Command;
use std::process::ExitStatus;
use std::process::Stdio;
use std::time::Duration;

use trajectory_planner::ProblemDefinition;
use trajectory_planner::Trajectory;
use wait_timeout::ChildExt;

/// Asserts that `trajectory` satisfies every constraint of `problem`.
pub(crate) fn assert_satisfies(problem: &ProblemDefinition, trajectory: &Trajectory) {
    assert_eq!(trajectory.horizon(), problem.horizon);

    for (time, step) in trajectory.steps().iter().enumerate() {
        assert_eq!(step.time, time);
        assert!(
            (problem.min_speed..=problem.max_speed).contains(&step.speed),
            "speed {} at time {time} is out of bounds",
            step.speed
        );
        assert!(
            (problem.min_lane..=problem.max_lane).contains(&step.lane),
            "lane {} at time {time} is out of bounds",
            step.lane
        );
    }

    for window in trajectory.steps().windows(2) {
        assert!(
            (window[1].speed - window[0].speed).abs() <= problem.max_speed_delta,
            "speed jumps from {} to {} at time {}",
            window[0].speed,
            window[1].speed,
            window[1].time
        );
        if let Some(max_lane_delta) = problem.max_lane_delta {
            assert!((window[1].lane - window[0].lane).abs() <= max_lane_delta);
        }
    }

    for obstacle in &problem.obstacles {
        assert_ne!(
            trajectory.lane_at(obstacle.time),
            Some(obstacle.lane),
            "the trajectory drives through the obstacle at time {}",
            obstacle.time
        );
    }

    let changes = i32::try_from(trajectory.num_lane_changes()).expect("few lane changes");
    assert!(
        (problem.min_lane_changes..=problem.max_lane_changes).contains(&changes),
        "{changes} lane changes"
    );

    assert_eq!(trajectory.objective_value(), objective_of(problem, trajectory));
}

fn objective_of(problem: &ProblemDefinition, trajectory: &Trajectory) -> i64 {
    let speed: i64 = trajectory.pairs().map(|(speed, _)| i64::from(speed)).sum();
    let changes = i64::try_from(trajectory.num_lane_changes()).expect("few lane changes");

    speed - i64::from(problem.weight_lane_change) * changes
}

/// Computes the best objective value of `problem` by enumerating every trajectory, or [`None`]
/// when there is no trajectory at all.
pub(crate) fn brute_force_optimum(problem: &ProblemDefinition) -> Option<i64> {
    let mut best = None;
    let mut speeds = Vec::with_capacity(problem.horizon);
    let mut lanes = Vec::with_capacity(problem.horizon);
    enumerate(problem, &mut speeds, &mut lanes, &mut best);
    best
}

fn enumerate(
    problem: &ProblemDefinition,
    speeds: &mut Vec<i32>,
    lanes: &mut Vec<i32>,
    best: &mut Option<i64>,
) {
    let time = speeds.len();
    if time == problem.horizon {
        let changes = lanes.windows(2).filter(|pair| pair[0] != pair[1]).count() as i32;
        if changes < problem.min_lane_changes || changes > problem.max_lane_changes {
            return;
        }

        let value = speeds.iter().map(|&speed| i64::from(speed)).sum::<i64>()
            - i64::from(problem.weight_lane_change) * i64::from(changes);
        if best.is_none_or(|best| value > best) {
            *best = Some(value);
        }
        return;
    }

    for speed in problem.min_speed..=problem.max_speed {
        if speeds
            .last()
            .is_some_and(|&previous| (speed - previous).abs() > problem.max_speed_delta)
        {
            continue;
        }

        for lane in problem.min_lane..=problem.max_lane {
            if problem
                .obstacles
                .iter()
                .any(|obstacle| obstacle.time == time && obstacle.lane == lane)
            {
                continue;
            }
            if let (Some(&previous), Some(max_lane_delta)) = (lanes.last(), problem.max_lane_delta)
            {
                if (lane - previous).abs() > max_lane_delta {
                    continue;
                }
            }

            speeds.push(speed);
            lanes.push(lane);
            enumerate(problem, speeds, lanes, best);
            let _ = speeds.pop();
            let _ = lanes.pop();
        }
    }
}

/// The captured result of running the planner binary.
#[derive(Debug)]
pub(crate) struct PlannerOutput {
    pub(crate) status: ExitStatus,
    pub(crate) stdout: String,
}

pub(crate) fn run_planner<'a>(args: impl IntoIterator<Item = &'a str>) -> PlannerOutput {
    const TEST_TIMEOUT: Duration = Duration::from_secs(60);

    let planner = PathBuf::from(env!("CARGO_BIN_EXE_trajectory-planner"));

    let mut child = Command::new(planner)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .stdin(Stdio::null())
        .spawn()
        .expect("Failed to run planner.");

    let status = match child.wait_timeout(TEST_TIMEOUT) {
        Ok(None) => {
            let _ = child.kill();
            panic!("planner took more than {} seconds", TEST_TIMEOUT.as_secs())
        }
        Ok(Some(status)) => status,
        Err(e) => panic!("error starting planner: {e}"),
    };

    let mut stdout = String::new();
    let _ = child
        .stdout
        .take()
        .expect("stdout is piped")
        .read_to_string(&mut stdout)
        .expect("stdout is valid UTF-8");

    PlannerOutput { status, stdout }
}
