//! Breadth first graph search

use crate::search::{
    expand,
    search_engines::{SearchEngine, SearchOutcome, SearchResult, DEFAULT_CYCLE_LOOKBACK},
    Problem, SearchError, SearchSpace, SearchStatistics,
};
use std::collections::VecDeque;
use tracing::{debug, info, trace};

/// Breadth first search over a FIFO frontier, with the same bounded cycle
/// check as [`crate::search::search_engines::DepthFirstSearch`]. With unit
/// action costs the returned path has the fewest actions.
#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    cycle_lookback: usize,
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl BreadthFirstSearch {
    pub fn new() -> Self {
        Self::with_cycle_lookback(DEFAULT_CYCLE_LOOKBACK)
    }

    pub fn with_cycle_lookback(cycle_lookback: usize) -> Self {
        Self { cycle_lookback }
    }
}

impl<P: Problem> SearchEngine<P> for BreadthFirstSearch {
    fn search(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        info!(engine = "bfs", cycle_lookback = self.cycle_lookback);
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let mut queue = VecDeque::new();
        queue.push_back(search_space.get_root_node().get_node_id());

        while let Some(node_id) = queue.pop_front() {
            let node = search_space.get_node(node_id);
            if problem.is_goal(node.get_state()) {
                return Ok(SearchResult::finalise(
                    SearchOutcome::Solved(node_id),
                    search_space,
                    statistics,
                ));
            }

            statistics.increment_expanded_nodes();
            debug!(state = ?node.get_state(), path_cost = node.get_path_cost().into_inner());
            let children = expand(problem, node)?;
            statistics.increment_generated_nodes(children.len());

            for child in children {
                if search_space.is_cycle(&child.state, node_id, self.cycle_lookback) {
                    trace!(state = ?child.state, "pruned cycle");
                    statistics.increment_cycle_pruned_nodes();
                    continue;
                }
                let child_id = search_space.insert_child(node_id, child).get_node_id();
                statistics.increment_enqueued_nodes();
                queue.push_back(child_id);
            }
            statistics.register_frontier_size(queue.len());
        }

        Ok(SearchResult::finalise(
            SearchOutcome::Failure,
            search_space,
            statistics,
        ))
    }
}

/// Run [`BreadthFirstSearch`] with the default cycle look-back.
pub fn breadth_first_graph_search<P: Problem>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    BreadthFirstSearch::new().search(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        route::{RouteMap, RouteProblem},
        test_utils::*,
    };
    use ordered_float::OrderedFloat;
    use std::sync::Arc;

    #[test]
    fn bfs_finds_fewest_edges_with_unit_costs() {
        let map = Arc::new(romania_map_unweighted());
        for (from, to) in [("A", "B"), ("O", "E"), ("T", "N"), ("Z", "C")] {
            let problem = RouteProblem::new(from.to_string(), to.to_string(), map.clone());
            let result = breadth_first_graph_search(&problem).unwrap();
            let expected = reference_fewest_edges(&map, &from.to_string(), &to.to_string());
            assert_eq!(result.path_len(), expected.unwrap(), "{} -> {}", from, to);
            assert_eq!(result.path_cost(), OrderedFloat(expected.unwrap() as f64));
        }
    }

    #[test]
    fn bfs_is_not_cost_optimal() {
        // A-S-F-B has the fewest edges but A-S-R-P-B is cheaper
        let problem = romania_problem("A", "B");
        let result = breadth_first_graph_search(&problem).unwrap();
        assert_eq!(result.path_states(), vec!["A", "S", "F", "B"]);
        assert_eq!(result.path_cost(), OrderedFloat(450.));
    }

    #[test]
    fn bfs_expands_in_discovery_order() {
        let map = RouteMap::unweighted([(0, 1), (0, 2), (1, 3), (2, 3), (3, 4)], true);
        let problem = RouteProblem::new(0, 4, Arc::new(map));
        let result = breadth_first_graph_search(&problem).unwrap();
        // neighbours are listed in descending order, so 2 is discovered first
        assert_eq!(result.path_states(), vec![0, 2, 3, 4]);
        // 3 is reached twice, once through each of 1 and 2
        assert_eq!(result.statistics().expanded_nodes(), 5);
    }

    #[test]
    fn bfs_fails_on_unreachable_goal() {
        let map = RouteMap::unweighted([(0, 1), (1, 2), (2, 0)], false);
        let problem = RouteProblem::new(0, 7, Arc::new(map));
        let result = breadth_first_graph_search(&problem).unwrap();
        assert_eq!(result.outcome(), SearchOutcome::Failure);
        assert!(result.path_actions().is_empty());
    }

    #[test]
    fn bfs_respects_direction() {
        let map = RouteMap::unweighted([(0, 1), (1, 2)], true);
        let problem = RouteProblem::new(2, 0, Arc::new(map));
        let result = breadth_first_graph_search(&problem).unwrap();
        assert_eq!(result.outcome(), SearchOutcome::Failure);
    }
}
