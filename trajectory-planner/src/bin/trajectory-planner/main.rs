mod os_signal_termination;
mod result;

use std::io::Write;
use std::time::Duration;

use clap::Parser;
use convert_case::Case;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::PlannerError;
use result::PlannerResult;
use trajectory_planner::statistics::configure_statistic_logging;
use trajectory_planner::statistics::should_log_statistics;
use trajectory_planner::termination::Combinator;
use trajectory_planner::termination::NodeBudget;
use trajectory_planner::termination::TimeBudget;
use trajectory_planner::Obstacle;
use trajectory_planner::PlanningError;
use trajectory_planner::ProblemDefinition;
use trajectory_planner::TrajectoryPlanner;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about
)]
struct Args {
    /// The number of time steps to plan for.
    ///
    /// Possible values: usize [default: 10]
    #[arg(long, verbatim_doc_comment)]
    horizon: Option<usize>,

    /// The lowest speed at any time step.
    ///
    /// Possible values: i32 [default: 30]
    #[arg(long = "min-speed", verbatim_doc_comment)]
    min_speed: Option<i32>,

    /// The highest speed at any time step.
    ///
    /// Possible values: i32 [default: 120]
    #[arg(long = "max-speed", verbatim_doc_comment)]
    max_speed: Option<i32>,

    /// The lowest lane index.
    ///
    /// Possible values: i32 [default: 1]
    #[arg(long = "min-lane", verbatim_doc_comment)]
    min_lane: Option<i32>,

    /// The highest lane index.
    ///
    /// Possible values: i32 [default: 3]
    #[arg(long = "max-lane", verbatim_doc_comment)]
    max_lane: Option<i32>,

    /// The largest change in speed between two consecutive time steps.
    ///
    /// Possible values: i32 [default: 30]
    #[arg(long = "max-speed-delta", verbatim_doc_comment)]
    max_speed_delta: Option<i32>,

    /// The largest change in lane between two consecutive time steps.
    ///
    /// Possible values: i32 [default: 1]
    #[arg(long = "max-lane-delta", verbatim_doc_comment)]
    max_lane_delta: Option<i32>,

    /// Allows the vehicle to move between any two lanes in a single time step; overrides
    /// "--max-lane-delta".
    ///
    /// Possible values: bool
    #[arg(
        long = "no-lane-adjacency",
        conflicts_with = "max_lane_delta",
        verbatim_doc_comment
    )]
    no_lane_adjacency: bool,

    /// A blocked cell, given as the time step and the lane separated by a colon (e.g. "5:2").
    ///
    /// Can be given multiple times; when it is given, the default obstacle (5:2) is replaced.
    ///
    /// Possible values: T:LANE
    #[arg(
        long = "obstacle",
        value_name = "T:LANE",
        value_parser = parse_obstacle,
        verbatim_doc_comment
    )]
    obstacles: Vec<Obstacle>,

    /// Removes every obstacle, including the default one.
    ///
    /// Possible values: bool
    #[arg(
        long = "no-obstacles",
        conflicts_with = "obstacles",
        verbatim_doc_comment
    )]
    no_obstacles: bool,

    /// The fewest lane changes a trajectory has to make.
    ///
    /// Possible values: i32 [default: 1]
    #[arg(long = "min-lane-changes", verbatim_doc_comment)]
    min_lane_changes: Option<i32>,

    /// The most lane changes a trajectory may make.
    ///
    /// Possible values: i32 [default: 8]
    #[arg(long = "max-lane-changes", verbatim_doc_comment)]
    max_lane_changes: Option<i32>,

    /// The objective penalty of a single lane change.
    ///
    /// Possible values: i32 [default: 2]
    #[arg(long = "weight-lane-change", allow_negative_numbers = true, verbatim_doc_comment)]
    weight_lane_change: Option<i32>,

    /// The time budget for the search, given in milliseconds.
    ///
    /// When the budget runs out, the best trajectory found so far is reported as feasible rather
    /// than optimal.
    ///
    /// Possible values: u64 (Optional)
    #[arg(short = 't', long = "time-limit", verbatim_doc_comment)]
    time_limit: Option<u64>,

    /// The maximum number of search nodes to explore.
    ///
    /// Possible values: u64 (Optional)
    #[arg(long = "node-limit", verbatim_doc_comment)]
    node_limit: Option<u64>,

    /// Enables log message output from the planner.
    ///
    /// Possible values: bool
    #[arg(short = 'v', long = "verbose", verbatim_doc_comment)]
    verbose: bool,

    /// Enables logging of statistics from the search.
    ///
    /// Possible values: bool
    #[arg(short = 's', long = "log-statistics", verbatim_doc_comment)]
    log_statistics: bool,
}

impl Args {
    fn problem_definition(&self) -> ProblemDefinition {
        let defaults = ProblemDefinition::default();

        let obstacles = if self.no_obstacles {
            vec![]
        } else if self.obstacles.is_empty() {
            defaults.obstacles
        } else {
            self.obstacles.clone()
        };
        let max_lane_delta = if self.no_lane_adjacency {
            None
        } else {
            self.max_lane_delta.or(defaults.max_lane_delta)
        };

        ProblemDefinition {
            horizon: self.horizon.unwrap_or(defaults.horizon),
            min_speed: self.min_speed.unwrap_or(defaults.min_speed),
            max_speed: self.max_speed.unwrap_or(defaults.max_speed),
            min_lane: self.min_lane.unwrap_or(defaults.min_lane),
            max_lane: self.max_lane.unwrap_or(defaults.max_lane),
            max_speed_delta: self.max_speed_delta.unwrap_or(defaults.max_speed_delta),
            max_lane_delta,
            obstacles,
            min_lane_changes: self.min_lane_changes.unwrap_or(defaults.min_lane_changes),
            max_lane_changes: self.max_lane_changes.unwrap_or(defaults.max_lane_changes),
            weight_lane_change: self
                .weight_lane_change
                .unwrap_or(defaults.weight_lane_change),
        }
    }
}

fn parse_obstacle(obstacle: &str) -> PlannerResult<Obstacle> {
    let invalid = || PlannerError::InvalidObstacle(obstacle.to_owned());

    let (time, lane) = obstacle.split_once(':').ok_or_else(invalid)?;
    let time = time.trim().parse().map_err(|_| invalid())?;
    let lane = lane.trim().parse().map_err(|_| invalid())?;

    Ok(Obstacle::new(time, lane))
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging("%% stat:", None, Some(Case::Camel), None);
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| writeln!(buf, "{}", record.args()))
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(PlannerError::Planning(PlanningError::Trajectory(e))) => {
            println!("{e}");
            std::process::exit(1);
        }
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> PlannerResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if trajectory_planner::asserts::PLANNER_ASSERT_LEVEL_DEFINITION
        >= trajectory_planner::asserts::PLANNER_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the planner assert level is set to {}, meaning many debug asserts are active.",
            trajectory_planner::asserts::PLANNER_ASSERT_LEVEL_DEFINITION
        );
    }

    let problem = args.problem_definition();
    let mut planner = TrajectoryPlanner::new(&problem).map_err(PlanningError::from)?;

    let time_budget = args
        .time_limit
        .map(|time_limit| TimeBudget::starting_now(Duration::from_millis(time_limit)));
    let node_budget = args.node_limit.map(NodeBudget::new);
    let mut termination = Combinator::new(
        OsSignal::install()?,
        Combinator::new(time_budget, node_budget),
    );

    let result = planner.plan(&mut termination);
    if should_log_statistics() {
        planner.log_statistics();
    }

    let trajectory = result.map_err(PlanningError::from)?;
    println!("{trajectory}");

    Ok(())
}
