use crate::search::{SearchError, SearchNode};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;

/// Path costs, action costs and heuristic estimates all share this type so
/// that they can be added and ordered directly.
pub type Cost = OrderedFloat<f64>;

/// A [`Problem`] describes a search space: where the search starts, which
/// actions are available in a state, where they lead and what they cost.
///
/// Only [`Problem::initial_state`], [`Problem::actions`] and
/// [`Problem::result`] have to be provided. The defaults give a unit action
/// cost, a zero heuristic, and a goal test comparing against
/// [`Problem::goal`].
pub trait Problem {
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;

    fn initial_state(&self) -> &Self::State;

    /// The single goal state, if the problem has one. Problems with a goal
    /// predicate instead should override [`Problem::is_goal`].
    fn goal(&self) -> Option<&Self::State> {
        None
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goal().is_some_and(|goal| goal == state)
    }

    /// Cost of going from `state` to `result` via `action`. Costs are assumed
    /// to be non-negative.
    fn action_cost(
        &self,
        _state: &Self::State,
        _action: &Self::Action,
        _result: &Self::State,
    ) -> Result<Cost, SearchError> {
        Ok(OrderedFloat(1.))
    }

    /// Estimate of the remaining cost from `node` to a goal. A* only returns
    /// optimal solutions if this never overestimates.
    fn heuristic(&self, _node: &SearchNode<Self::State, Self::Action>) -> Cost {
        OrderedFloat(0.)
    }
}

impl<P: Problem + ?Sized> Problem for &P {
    type State = P::State;
    type Action = P::Action;

    fn initial_state(&self) -> &Self::State {
        (**self).initial_state()
    }

    fn goal(&self) -> Option<&Self::State> {
        (**self).goal()
    }

    fn actions(&self, state: &Self::State) -> Vec<Self::Action> {
        (**self).actions(state)
    }

    fn result(&self, state: &Self::State, action: &Self::Action) -> Self::State {
        (**self).result(state, action)
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        (**self).is_goal(state)
    }

    fn action_cost(
        &self,
        state: &Self::State,
        action: &Self::Action,
        result: &Self::State,
    ) -> Result<Cost, SearchError> {
        (**self).action_cost(state, action, result)
    }

    fn heuristic(&self, node: &SearchNode<Self::State, Self::Action>) -> Cost {
        (**self).heuristic(node)
    }
}
