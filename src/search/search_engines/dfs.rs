//! Depth first graph search

use crate::search::{
    expand,
    search_engines::{SearchEngine, SearchOutcome, SearchResult, DEFAULT_CYCLE_LOOKBACK},
    Problem, SearchError, SearchSpace, SearchStatistics,
};
use tracing::{debug, info, trace};

/// Depth first search over a LIFO frontier. Instead of a closed list it only
/// rejects children that repeat a state among their closest `cycle_lookback`
/// ancestors, so it is not complete on graphs with longer cycles.
#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    cycle_lookback: usize,
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl DepthFirstSearch {
    pub fn new() -> Self {
        Self::with_cycle_lookback(DEFAULT_CYCLE_LOOKBACK)
    }

    pub fn with_cycle_lookback(cycle_lookback: usize) -> Self {
        Self { cycle_lookback }
    }
}

impl<P: Problem> SearchEngine<P> for DepthFirstSearch {
    fn search(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        info!(engine = "dfs", cycle_lookback = self.cycle_lookback);
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new(problem.initial_state().clone());
        let mut frontier = vec![search_space.get_root_node().get_node_id()];

        while let Some(node_id) = frontier.pop() {
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
                frontier.push(child_id);
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

/// Run [`DepthFirstSearch`] with the default cycle look-back.
pub fn depth_first_graph_search<P: Problem>(
    problem: &P,
) -> Result<SearchResult<P::State, P::Action>, SearchError> {
    DepthFirstSearch::new().search(problem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        route::{RouteMap, RouteProblem},
        search::{validate, InstrumentedProblem},
        test_utils::*,
    };
    use std::sync::Arc;

    #[test]
    fn dfs_reaches_goal() {
        let problem = romania_problem("A", "B");
        let result = depth_first_graph_search(&problem).unwrap();

        assert!(result.is_solved());
        let states = result.path_states();
        assert_eq!(states.first().unwrap(), "A");
        assert_eq!(states.last().unwrap(), "B");
        assert_eq!(result.path_actions().len(), states.len() - 1);
        assert!(validate(&problem, &result.path_actions(), result.path_cost()).is_ok());
    }

    #[test]
    fn dfs_explores_newest_child_first() {
        // children of 0 are pushed as [3, 2, 1], so 1 is explored first
        let map = RouteMap::unweighted([(0, 1), (0, 2), (0, 3), (1, 4), (2, 4)], false);
        let problem = RouteProblem::new(0, 4, Arc::new(map));
        let result = depth_first_graph_search(&problem).unwrap();
        assert_eq!(result.path_states(), vec![0, 1, 4]);
    }

    #[test]
    fn dfs_fails_on_unreachable_goal() {
        let map = RouteMap::unweighted([(0, 1), (1, 2), (2, 0), (3, 4)], false);
        let problem = RouteProblem::new(0, 4, Arc::new(map));
        let result = depth_first_graph_search(&problem).unwrap();
        assert_eq!(result.outcome(), SearchOutcome::Failure);
        assert!(result.path_states().is_empty());
        assert!(result.statistics().cycle_pruned_nodes() > 0);
    }

    #[test]
    fn dfs_terminates_when_lookback_covers_cycle() {
        let problem = RouteProblem::new(0, 999, Arc::new(ring_map(40)));
        let instrumented = InstrumentedProblem::new(&problem).with_expansion_limit(10_000);
        let result = DepthFirstSearch::with_cycle_lookback(40)
            .search(&instrumented)
            .unwrap();

        assert_eq!(result.outcome(), SearchOutcome::Failure);
        assert!(!instrumented.budget_exhausted());
        // one simple path around the ring in each direction
        assert!(instrumented.counters().actions <= 2 * 40);
    }

    #[test]
    fn dfs_does_not_detect_cycles_longer_than_lookback() {
        let problem = RouteProblem::new(0, 999, Arc::new(ring_map(40)));
        let instrumented = InstrumentedProblem::new(&problem).with_expansion_limit(10_000);
        let result = depth_first_graph_search(&instrumented).unwrap();

        // only the call-site budget stops the search
        assert_eq!(result.outcome(), SearchOutcome::Failure);
        assert!(instrumented.budget_exhausted());
        assert!(instrumented.counters().actions >= 10_000);
    }

    #[test]
    fn dfs_terminates_on_short_cycles_with_default_lookback() {
        let problem = RouteProblem::new(0, 999, Arc::new(ring_map(20)));
        let result = depth_first_graph_search(&problem).unwrap();
        assert_eq!(result.outcome(), SearchOutcome::Failure);
    }
}
