mod error;
mod instrumented_problem;
mod priority_queue;
mod problem;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use error::SearchError;
pub use instrumented_problem::{InstrumentedProblem, ProblemCounters};
pub use self::priority_queue::PriorityQueue;
pub use problem::{Cost, Problem};
pub use search_engines::{SearchOutcome, SearchResult};
pub use search_node::{expand, ChildNode, NodeId, SearchNode, NO_NODE};
pub use search_space::{Ancestors, SearchSpace};
pub use search_statistics::SearchStatistics;
pub use validate::validate;
pub use verbosity::Verbosity;
