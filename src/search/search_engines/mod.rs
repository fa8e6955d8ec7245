mod astar;
mod bfs;
mod dfs;
mod search_engine;

pub use astar::{astar, AStar};
pub use bfs::{breadth_first_graph_search, BreadthFirstSearch};
pub use dfs::{depth_first_graph_search, DepthFirstSearch};
pub use search_engine::{
    SearchEngine, SearchEngineName, SearchOutcome, SearchResult, DEFAULT_CYCLE_LOOKBACK,
};
