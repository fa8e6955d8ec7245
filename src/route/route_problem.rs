use crate::route::{Point, RouteMap};
use crate::search::{Cost, Problem, SearchError, SearchNode};
use ordered_float::OrderedFloat;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Straight-line distance between two points.
pub fn straight_line_distance(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// A problem to find a route between two places on a [`RouteMap`]. States are
/// places, and the action to go to a neighbouring place is that place.
///
/// The heuristic is the straight-line distance to the goal, which is zero
/// everywhere if the map has no locations.
#[derive(Debug, Clone)]
pub struct RouteProblem<L> {
    initial: L,
    goal: L,
    map: Arc<RouteMap<L>>,
}

impl<L> RouteProblem<L> {
    pub fn new(initial: L, goal: L, map: Arc<RouteMap<L>>) -> Self {
        Self { initial, goal, map }
    }

    pub fn map(&self) -> &RouteMap<L> {
        &self.map
    }
}

impl<L> Problem for RouteProblem<L>
where
    L: Clone + Eq + Hash + Ord + Debug,
{
    type State = L;
    type Action = L;

    fn initial_state(&self) -> &L {
        &self.initial
    }

    fn goal(&self) -> Option<&L> {
        Some(&self.goal)
    }

    fn actions(&self, state: &L) -> Vec<L> {
        self.map.neighbors(state).to_vec()
    }

    /// Go to `action` if it neighbours `state`, otherwise stay put.
    fn result(&self, state: &L, action: &L) -> L {
        if self.map.neighbors(state).contains(action) {
            action.clone()
        } else {
            state.clone()
        }
    }

    fn action_cost(&self, state: &L, _action: &L, result: &L) -> Result<Cost, SearchError> {
        self.map
            .distance(state, result)
            .map(OrderedFloat)
            .ok_or_else(|| SearchError::MissingEdge {
                from: format!("{:?}", state),
                to: format!("{:?}", result),
            })
    }

    fn heuristic(&self, node: &SearchNode<L, L>) -> Cost {
        OrderedFloat(straight_line_distance(
            self.map.location(node.get_state()),
            self.map.location(&self.goal),
        ))
    }
}
