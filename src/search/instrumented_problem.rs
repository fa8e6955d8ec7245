use crate::search::{Cost, Problem, SearchError, SearchNode};
use serde::Serialize;
use std::cell::Cell;

/// Number of calls made to each [`Problem`] method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProblemCounters {
    /// Calls to [`Problem::actions`], one per expanded node
    pub actions: usize,
    /// Calls to [`Problem::result`], one per generated node
    pub result: usize,
    pub is_goal: usize,
    pub action_cost: usize,
    pub heuristic: usize,
}

/// Wraps a problem, forwarding every call and counting how often each method
/// is used.
///
/// An expansion limit can be set as a search budget: once
/// [`Problem::actions`] has been answered that many times, every further call
/// returns no actions, so any search drains its frontier and stops.
#[derive(Debug)]
pub struct InstrumentedProblem<P> {
    problem: P,
    expansion_limit: Option<usize>,
    actions: Cell<usize>,
    result: Cell<usize>,
    is_goal: Cell<usize>,
    action_cost: Cell<usize>,
    heuristic: Cell<usize>,
    budget_exhausted: Cell<bool>,
}

fn increment(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl<P: Problem> InstrumentedProblem<P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            expansion_limit: None,
            actions: Cell::new(0),
            result: Cell::new(0),
            is_goal: Cell::new(0),
            action_cost: Cell::new(0),
            heuristic: Cell::new(0),
            budget_exhausted: Cell::new(false),
        }
    }

    pub fn with_expansion_limit(mut self, expansion_limit: usize) -> Self {
        self.expansion_limit = Some(expansion_limit);
        self
    }

    pub fn counters(&self) -> ProblemCounters {
        ProblemCounters {
            actions: self.actions.get(),
            result: self.result.get(),
            is_goal: self.is_goal.get(),
            action_cost: self.action_cost.get(),
            heuristic: self.heuristic.get(),
        }
    }

    /// Whether the expansion limit was hit, in which case a failed search does
    /// not prove the goal unreachable.
    pub fn budget_exhausted(&self) -> bool {
        self.budget_exhausted.get()
    }

    pub fn inner(&self) -> &P {
        &self.problem
    }
}

impl<P: Problem> Problem for InstrumentedProblem<P> {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> &Self::State {
        self.problem.initial_state()
    }

    fn goal(&self) -> Option<&Self::State> {
        self.problem.goal()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        if self
            .expansion_limit
            .is_some_and(|limit| self.actions.get() >= limit)
        {
            self.budget_exhausted.set(true);
            return vec![];
        }
        increment(&self.actions);
        self.problem.actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        increment(&self.result);
        self.problem.result(state, action)
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        increment(&self.is_goal);
        self.problem.is_goal(state)
    }

    fn action_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        result: &Self::State,
    ) -> Result<Cost, SearchError> {
        increment(&self.action_cost);
        self.problem.action_cost(state, action, result)
    }

    fn heuristic(&self, node: &SearchNode<Self::State, Self::Action>) -> Cost {
        increment(&self.heuristic);
        self.problem.heuristic(node)
    }
}
