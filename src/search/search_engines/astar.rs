//! A* search

use crate::search::{
    expand,
    search_engines::{SearchEngine, SearchOutcome, SearchResult},
    NodeId, PriorityQueue, Problem, SearchError, SearchNode, SearchSpace, SearchStatistics,
};
use std::collections::HashMap;
use tracing::{debug, info, trace};

/// A* search, ordering the frontier by `g + h` where `g` is the path cost of a
/// node and `h` the heuristic value the problem gives it.
///
/// Instead of decreasing keys in the frontier, a `reached` table keeps the
/// cheapest node found per state. A strictly cheaper path to a state is pushed
/// as a new frontier entry, and the superseded entry is skipped when it is
/// eventually popped. Solutions are optimal when the heuristic is admissible
/// and action costs are non-negative.
#[derive(Debug, Clone, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl<P: Problem> SearchEngine<P> for AStar {
    fn search(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        info!(engine = "astar");
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let root_node = search_space.get_root_node().clone();

        let mut reached: HashMap<P::State, NodeId> = HashMap::new();
        reached.insert(root_node.get_state().clone(), root_node.get_node_id());
        let mut frontier = PriorityQueue::from_items(
            [root_node],
            |node: &SearchNode<P::State, P::Action>| {
                node.get_path_cost() + problem.heuristic(node)
            },
        );

        while let Some(node) = frontier.pop() {
            let node_id = node.get_node_id();
            let best_cost = reached
                .get(node.get_state())
                .map(|&best_id| search_space.get_node(best_id).get_path_cost());
            if best_cost.is_some_and(|best_cost| node.get_path_cost() > best_cost) {
                trace!(state = ?node.get_state(), "skipped stale entry");
                statistics.increment_stale_nodes();
                continue;
            }

            if problem.is_goal(node.get_state()) {
                return Ok(SearchResult::finalise(
                    SearchOutcome::Solved(node_id),
                    search_space,
                    statistics,
                ));
            }

            statistics.increment_expanded_nodes();
            debug!(state = ?node.get_state(), path_cost = node.get_path_cost().into_inner());
            let children = expand(problem, &node)?;
            statistics.increment_generated_nodes(children.len());

            for child in children {
                let improves = match reached.get(&child.state) {
                    None => true,
                    Some(&best_id) => {
                        child.path_cost < search_space.get_node(best_id).get_path_cost()
                    }
                };
                if !improves {
                    trace!(state = ?child.state, "discarded dominated child");
                    statistics.increment_dominated_nodes();
                    continue;
                }

                let state = child.state.clone();
                let child_node = search_space.insert_child(node_id, child).clone();
                if reached
                    .insert(state, child_node.get_node_id())
                    .is_some()
                {
                    statistics.increment_reopened_nodes();
                }
                statistics.increment_enqueued_nodes();
                frontier.add(child_node);
            }
            statistics.register_frontier_size(frontier.len());
        }

        Ok(SearchResult::finalise(
            SearchOutcome::Failure,
            search_space,
            statistics,
        ))
    }
}

/// Run [`AStar`] on `problem`.
pub fn astar<P: Problem>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    AStar::new().search(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        route::{RouteMap, RouteProblem},
        search::InstrumentedProblem,
        test_utils::*,
    };
    use assert_approx_eq::assert_approx_eq;
    use ordered_float::OrderedFloat;
    use std::sync::Arc;

    #[test]
    fn astar_finds_cheapest_route() {
        let problem = romania_problem("A", "B");
        let result = astar(&problem).unwrap();
        assert_eq!(result.path_states(), vec!["A", "S", "R", "P", "B"]);
        assert_eq!(result.path_actions(), vec!["S", "R", "P", "B"]);
        assert_eq!(result.path_cost(), OrderedFloat(418.));
    }

    #[test]
    fn astar_matches_exhaustive_reference() {
        let map = Arc::new(romania_map());
        let locations = ["A", "B", "C", "E", "L", "N", "O", "T", "Z"];
        for from in locations {
            for to in locations {
                let (from, to) = (from.to_string(), to.to_string());
                let problem = RouteProblem::new(from.clone(), to.clone(), map.clone());
                let result = astar(&problem).unwrap();
                let expected = reference_cheapest_cost(&map, &from, &to).unwrap();
                assert_approx_eq!(result.path_cost().into_inner(), expected);
            }
        }
    }

    #[test]
    fn astar_with_zero_heuristic_is_optimal() {
        // without coordinates the straight-line heuristic is zero everywhere
        let map = Arc::new(romania_map_without_locations());
        let problem = RouteProblem::new("A".to_string(), "B".to_string(), map.clone());
        let node = SearchNode::detached("L".to_string());
        assert_eq!(problem.heuristic(&node), OrderedFloat(0.));

        let result = astar(&problem).unwrap();
        let expected = reference_cheapest_cost(&map, &"A".to_string(), &"B".to_string());
        assert_eq!(result.path_cost().into_inner(), expected.unwrap());
        assert_eq!(result.path_cost(), OrderedFloat(418.));
    }

    #[test]
    fn astar_replaces_reached_entry_with_cheaper_path() {
        // 3 is first reached directly at cost 10, then through 1 at cost 2
        let map = RouteMap::new(
            [((0, 3), 10.), ((0, 1), 1.), ((1, 3), 1.), ((3, 4), 20.)],
            true,
        );
        let problem = RouteProblem::new(0, 4, Arc::new(map));
        let result = astar(&problem).unwrap();

        assert_eq!(result.path_states(), vec![0, 1, 3, 4]);
        assert_eq!(result.path_cost(), OrderedFloat(22.));
        let statistics = result.statistics();
        assert_eq!(statistics.reopened_nodes(), 1);
        // the entry for 3 at cost 10 is popped after the cheaper one
        assert_eq!(statistics.stale_nodes(), 1);
        assert_eq!(statistics.expanded_nodes(), 3);
    }

    #[test]
    fn astar_discards_non_improving_duplicates() {
        // both routes to 3 cost 2, only the first one found is kept
        let map = RouteMap::new(
            [((0, 1), 1.), ((0, 2), 1.), ((1, 3), 1.), ((2, 3), 1.)],
            true,
        );
        let problem = RouteProblem::new(0, 3, Arc::new(map));
        let result = astar(&problem).unwrap();

        assert_eq!(result.path_cost(), OrderedFloat(2.));
        assert_eq!(result.path_states(), vec![0, 2, 3]);
        assert_eq!(result.statistics().dominated_nodes(), 1);
        assert_eq!(result.statistics().reopened_nodes(), 0);
    }

    #[test]
    fn astar_fails_on_unreachable_goal() {
        let map = RouteMap::unweighted([(0, 1), (1, 2), (2, 0), (5, 6)], false);
        let problem = RouteProblem::new(0, 6, Arc::new(map));
        let result = astar(&problem).unwrap();
        assert_eq!(result.outcome(), SearchOutcome::Failure);
        assert!(result.path_states().is_empty());
        assert!(result.path_cost().into_inner().is_infinite());
    }

    #[test]
    fn astar_expands_fewer_nodes_than_uniform_cost() {
        let informed = InstrumentedProblem::new(romania_problem("A", "B"));
        astar(&informed).unwrap();

        let map = Arc::new(romania_map_without_locations());
        let uninformed =
            InstrumentedProblem::new(RouteProblem::new("A".to_string(), "B".to_string(), map));
        astar(&uninformed).unwrap();

        assert!(informed.counters().actions < uninformed.counters().actions);
    }
}
