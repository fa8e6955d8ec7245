use crate::search::{
    search_engines::{AStar, BreadthFirstSearch, DepthFirstSearch},
    Cost, NodeId, Problem, SearchError, SearchNode, SearchSpace, SearchStatistics,
};
use ordered_float::{Float, OrderedFloat};
use tracing::info;

/// How the bounded cycle check of the uninformed searches looks back by
/// default, in ancestors.
pub const DEFAULT_CYCLE_LOOKBACK: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The search reached a goal, this is the goal node
    Solved(NodeId),
    /// The frontier was exhausted without reaching a goal
    Failure,
    /// The search was cut off before it could decide. Reserved for depth
    /// limited searches, none of the engines here return it.
    Cutoff,
}

impl SearchOutcome {
    pub fn node_id(&self) -> Option<NodeId> {
        match self {
            SearchOutcome::Solved(node_id) => Some(*node_id),
            SearchOutcome::Failure | SearchOutcome::Cutoff => None,
        }
    }
}

/// Everything a search hands back: the outcome, the search space holding the
/// nodes it created, and statistics about the run.
#[derive(Debug)]
pub struct SearchResult<S, A> {
    outcome: SearchOutcome,
    search_space: SearchSpace<S, A>,
    statistics: SearchStatistics,
}

impl<S: Clone, A: Clone> SearchResult<S, A> {
    /// Close off a search, finalising its statistics.
    pub(crate) fn finalise(
        outcome: SearchOutcome,
        search_space: SearchSpace<S, A>,
        mut statistics: SearchStatistics,
    ) -> Self {
        match outcome {
            SearchOutcome::Solved(node_id) => {
                let goal_node = search_space.get_node(node_id);
                info!(
                    path_cost = goal_node.get_path_cost().into_inner(),
                    path_len = search_space.depth(node_id),
                    "goal reached"
                );
            }
            SearchOutcome::Failure => info!("frontier exhausted without reaching a goal"),
            SearchOutcome::Cutoff => info!("search cut off"),
        }
        statistics.finalise_search();
        Self {
            outcome,
            search_space,
            statistics,
        }
    }

    pub fn outcome(&self) -> SearchOutcome {
        self.outcome
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SearchOutcome::Solved(_))
    }

    pub fn goal_node(&self) -> Option<&SearchNode<S, A>> {
        self.outcome
            .node_id()
            .map(|node_id| self.search_space.get_node(node_id))
    }

    /// Cost of the solution, infinite when there is none.
    pub fn path_cost(&self) -> Cost {
        self.goal_node()
            .map_or(OrderedFloat::infinity(), |node| node.get_path_cost())
    }

    /// States from the initial state to the goal, empty without a solution.
    pub fn path_states(&self) -> Vec<S> {
        self.outcome
            .node_id()
            .map_or_else(Vec::new, |node_id| self.search_space.path_states(node_id))
    }

    /// Actions from the initial state to the goal, empty without a solution.
    pub fn path_actions(&self) -> Vec<A> {
        self.outcome
            .node_id()
            .map_or_else(Vec::new, |node_id| self.search_space.path_actions(node_id))
    }

    /// Number of actions in the solution, zero without one.
    pub fn path_len(&self) -> usize {
        self.outcome
            .node_id()
            .map_or(0, |node_id| self.search_space.depth(node_id))
    }

    pub fn search_space(&self) -> &SearchSpace<S, A> {
        &self.search_space
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

pub trait SearchEngine<P: Problem> {
    fn search(
        &mut self,
        problem: &P,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError>;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(
        name = "dfs",
        alias = "depth-first-graph-search",
        help = "Depth first search with a bounded cycle check."
    )]
    DepthFirst,
    #[clap(
        name = "bfs",
        alias = "breadth-first-graph-search",
        help = "Breadth first search with a bounded cycle check."
    )]
    BreadthFirst,
    #[clap(help = "A* search using the problem's heuristic.")]
    Astar,
}

impl SearchEngineName {
    pub fn name(&self) -> &'static str {
        match self {
            SearchEngineName::DepthFirst => "dfs",
            SearchEngineName::BreadthFirst => "bfs",
            SearchEngineName::Astar => "astar",
        }
    }

    /// Run the named search engine on `problem`. The cycle look-back only
    /// applies to the uninformed searches.
    pub fn search<P: Problem>(
        &self,
        problem: &P,
        cycle_lookback: usize,
    ) -> Result<SearchResult<P::State, P::Action>, SearchError> {
        match self {
            SearchEngineName::DepthFirst => {
                DepthFirstSearch::with_cycle_lookback(cycle_lookback).search(problem)
            }
            SearchEngineName::BreadthFirst => {
                BreadthFirstSearch::with_cycle_lookback(cycle_lookback).search(problem)
            }
            SearchEngineName::Astar => AStar::new().search(problem),
        }
    }
}
