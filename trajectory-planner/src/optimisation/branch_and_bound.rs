use std::time::Instant;

use log::debug;
use log::info;
use log::trace;
use log::warn;

use super::Incumbent;
use super::Objective;
use super::OptimisationResult;
use crate::basic_types::Solution;
use crate::branching::Branch;
use crate::branching::Brancher;
use crate::constraints::ConstraintSet;
use crate::engine::DomainStore;
use crate::engine::EmptyDomain;
use crate::engine::PropagationEngine;
use crate::engine::SearchStatistics;
use crate::planner_assert_advanced;
use crate::planner_assert_simple;
use crate::termination::TerminationCondition;

/// A node on the search stack: the decision level of its parent and the branch which leads to it
/// from there. The root is the only node without a branch.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    parent_level: usize,
    branch: Option<Branch>,
}

/// What happened to a node once it was taken from the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NodeOutcome {
    Branching,
    Pruned,
    Infeasible,
    Solution,
}

/// Depth-first branch-and-bound maximisation of an [`Objective`].
///
/// Each node is propagated to a fixpoint of the [`ConstraintSet`]. A node is pruned when the
/// optimistic bound of the objective over its domains cannot beat the incumbent; this is checked
/// before the node is propagated and again before it is split. Children are explored lower half
/// first, and the domains of a parent are restored through the trail of the [`DomainStore`].
#[derive(Debug)]
pub(crate) struct BranchAndBound<'model> {
    store: DomainStore,
    constraints: &'model ConstraintSet,
    objective: &'model Objective,
    propagation: PropagationEngine,
    statistics: SearchStatistics,
}

impl<'model> BranchAndBound<'model> {
    pub(crate) fn new(
        store: DomainStore,
        constraints: &'model ConstraintSet,
        objective: &'model Objective,
    ) -> BranchAndBound<'model> {
        planner_assert_simple!(
            store.get_decision_level() == 0,
            "search has to start from the root"
        );

        BranchAndBound {
            store,
            constraints,
            objective,
            propagation: PropagationEngine::default(),
            statistics: SearchStatistics::default(),
        }
    }

    pub(crate) fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    pub(crate) fn maximise(
        &mut self,
        brancher: &mut impl Brancher,
        termination: &mut impl TerminationCondition,
    ) -> OptimisationResult {
        let started_at = Instant::now();
        info!(
            "Starting branch-and-bound over {} variables and {} constraints",
            self.store.num_domains(),
            self.constraints.len()
        );

        let mut incumbent = Incumbent::default();
        let mut stack = vec![SearchNode {
            parent_level: 0,
            branch: None,
        }];
        let mut interrupted = false;

        while let Some(node) = stack.pop() {
            if termination.should_stop() {
                interrupted = true;
                break;
            }
            termination.node_has_been_explored();

            let outcome = self.explore(node, brancher, &mut incumbent, &mut stack);
            trace!(
                "Node {} at level {}: {outcome:?}",
                self.statistics.num_nodes,
                self.store.get_decision_level()
            );
        }

        self.store.synchronise(0);
        self.statistics.time_spent_in_search += started_at.elapsed();

        let result = match (incumbent.into_best(), interrupted) {
            (Some((objective_value, solution)), false) => OptimisationResult::Optimal {
                solution,
                objective_value,
            },
            (Some((objective_value, best_solution)), true) => OptimisationResult::Satisfiable {
                best_solution,
                objective_value,
            },
            (None, false) => OptimisationResult::Unsatisfiable,
            (None, true) => OptimisationResult::Unknown,
        };

        if interrupted {
            warn!(
                "Search was interrupted after {} nodes; optimality is not proven",
                self.statistics.num_nodes
            );
        }
        info!(
            "Search finished after {} nodes in {:.3}s: {}",
            self.statistics.num_nodes,
            self.statistics.time_spent_in_search.as_secs_f64(),
            match &result {
                OptimisationResult::Optimal {
                    objective_value, ..
                } => format!("optimal with objective {objective_value}"),
                OptimisationResult::Satisfiable {
                    objective_value, ..
                } => format!("best objective {objective_value}"),
                OptimisationResult::Unsatisfiable => "unsatisfiable".to_owned(),
                OptimisationResult::Unknown => "unknown".to_owned(),
            }
        );

        result
    }

    fn explore(
        &mut self,
        node: SearchNode,
        brancher: &mut impl Brancher,
        incumbent: &mut Incumbent,
        stack: &mut Vec<SearchNode>,
    ) -> NodeOutcome {
        self.statistics.num_nodes += 1;
        self.store.synchronise(node.parent_level);

        match node.branch {
            None => self.propagation.enqueue_all(self.constraints),
            Some(branch) => {
                self.store.increase_decision_level();
                self.statistics.peak_depth = self
                    .statistics
                    .peak_depth
                    .max(self.store.get_decision_level() as u64);

                if self.apply(branch).is_err() {
                    self.statistics.num_infeasible_nodes += 1;
                    return NodeOutcome::Infeasible;
                }
            }
        }

        if !incumbent.can_be_improved_to(self.objective.upper_bound(&self.store)) {
            self.statistics.num_pruned_nodes += 1;
            return NodeOutcome::Pruned;
        }

        if self
            .propagation
            .propagate(&mut self.store, self.constraints, &mut self.statistics)
            .is_err()
        {
            self.statistics.num_infeasible_nodes += 1;
            return NodeOutcome::Infeasible;
        }

        if !incumbent.can_be_improved_to(self.objective.upper_bound(&self.store)) {
            self.statistics.num_pruned_nodes += 1;
            return NodeOutcome::Pruned;
        }

        let Some(decision) = brancher.next_decision(&self.store) else {
            self.record_solution(incumbent);
            return NodeOutcome::Solution;
        };

        let parent_level = self.store.get_decision_level();
        stack.push(SearchNode {
            parent_level,
            branch: Some(decision.upper()),
        });
        stack.push(SearchNode {
            parent_level,
            branch: Some(decision.lower()),
        });

        NodeOutcome::Branching
    }

    fn apply(&mut self, branch: Branch) -> Result<bool, EmptyDomain> {
        match branch {
            Branch::Lower(decision) => self
                .store
                .set_upper_bound(decision.variable, decision.split),
            Branch::Upper(decision) => self
                .store
                .set_lower_bound(decision.variable, decision.split + 1),
        }
    }

    fn record_solution(&mut self, incumbent: &mut Incumbent) {
        let solution = Solution::from_store(&self.store);
        planner_assert_advanced!(
            self.constraints
                .iter()
                .all(|constraint| constraint.propagator().is_satisfied(&self.store)),
            "a solution has to satisfy every constraint"
        );

        let objective_value = self.objective.evaluate(&solution);
        if incumbent.offer(objective_value, solution) {
            self.statistics.num_solutions += 1;
            debug!(
                "New incumbent with objective {objective_value} after {} nodes",
                self.statistics.num_nodes
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branching::InDomainSplit;
    use crate::branching::IndependentVariableValueBrancher;
    use crate::branching::InputOrder;
    use crate::constraints;
    use crate::engine::DomainId;
    use crate::termination::Indefinite;
    use crate::termination::NodeBudget;

    struct Instance {
        store: DomainStore,
        constraints: ConstraintSet,
        objective: Objective,
        order: Vec<DomainId>,
    }

    /// Two steps, two lanes with the second lane blocked at the first step, and at least one lane
    /// change.
    fn two_step_instance(min_changes: i32) -> Instance {
        let mut store = DomainStore::default();
        let speeds = [store.new_variable(0, 4), store.new_variable(0, 4)];
        let lanes = [store.new_variable(1, 2), store.new_variable(1, 2)];
        let change = store.new_variable(0, 1);

        let mut constraints = ConstraintSet::default();
        let _ = constraints.add(constraints::speed_continuity(speeds[0], speeds[1], 1));
        let _ = constraints.add(constraints::obstacle_exclusion(lanes[0], 2));
        let _ = constraints.add(constraints::lane_change_link(lanes[0], lanes[1], change));
        let _ = constraints.add(constraints::aggregate_bound(&[change], min_changes, 1));

        let objective = Objective::new(&speeds, &[change], 2, min_changes, 1);
        let order = vec![speeds[0], lanes[0], speeds[1], lanes[1], change];

        Instance {
            store,
            constraints,
            objective,
            order,
        }
    }

    fn solve(
        instance: Instance,
        termination: &mut impl TerminationCondition,
    ) -> (OptimisationResult, SearchStatistics) {
        let mut search =
            BranchAndBound::new(instance.store, &instance.constraints, &instance.objective);
        let mut brancher =
            IndependentVariableValueBrancher::new(InputOrder::new(&instance.order), InDomainSplit);

        let result = search.maximise(&mut brancher, termination);
        (result, *search.statistics())
    }

    #[test]
    fn finds_the_optimum() {
        let instance = two_step_instance(1);
        let second_lane = instance.order[3];
        let (result, statistics) = solve(instance, &mut Indefinite);

        let OptimisationResult::Optimal {
            solution,
            objective_value,
        } = result
        else {
            panic!("expected an optimal result, got {result:?}");
        };

        assert_eq!(objective_value, 4 + 4 - 2);
        assert_eq!(solution.get_integer_value(second_lane), 2);
        assert!(statistics.num_solutions >= 1);
        assert!(statistics.num_nodes >= statistics.num_solutions);
    }

    #[test]
    fn staying_in_lane_is_preferred_when_changes_are_optional() {
        let (result, _) = solve(two_step_instance(0), &mut Indefinite);

        let OptimisationResult::Optimal {
            objective_value, ..
        } = result
        else {
            panic!("expected an optimal result, got {result:?}");
        };
        assert_eq!(objective_value, 8);
    }

    #[test]
    fn infeasible_root_is_unsatisfiable() {
        let mut instance = two_step_instance(1);
        let _ = instance
            .constraints
            .add(constraints::obstacle_exclusion(instance.order[3], 1));
        let _ = instance
            .constraints
            .add(constraints::obstacle_exclusion(instance.order[3], 2));

        let (result, statistics) = solve(instance, &mut Indefinite);

        assert_eq!(result, OptimisationResult::Unsatisfiable);
        assert_eq!(statistics.num_solutions, 0);
        assert_eq!(statistics.num_infeasible_nodes, 1);
    }

    #[test]
    fn exhausted_budget_before_the_root_is_unknown() {
        let (result, statistics) = solve(two_step_instance(1), &mut NodeBudget::new(0));

        assert_eq!(result, OptimisationResult::Unknown);
        assert_eq!(statistics.num_nodes, 0);
    }

    #[test]
    fn interrupted_search_with_a_solution_is_satisfiable() {
        let outcomes = (1..1_000)
            .map(|budget| solve(two_step_instance(1), &mut NodeBudget::new(budget)).0)
            .collect::<Vec<_>>();

        assert!(outcomes
            .iter()
            .any(|result| matches!(result, OptimisationResult::Satisfiable { .. })));
        assert!(matches!(
            outcomes.last(),
            Some(OptimisationResult::Optimal { .. })
        ));
    }
}
