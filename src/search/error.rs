use thiserror::Error;

/// Errors raised while running or checking a search. Exhausting the frontier
/// is not an error, see [`crate::search::SearchOutcome::Failure`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// An action cost was requested for a pair of states that are not joined
    /// by an edge.
    #[error("no edge from {from} to {to}")]
    MissingEdge { from: String, to: String },
    #[error("action {action} is not applicable in state {state} (step {step})")]
    InapplicableAction {
        step: usize,
        state: String,
        action: String,
    },
    #[error("path does not reach a goal state, final state is {state}")]
    GoalNotReached { state: String },
    #[error("path costs {actual} but {expected} was reported")]
    CostMismatch { expected: f64, actual: f64 },
}
