use crate::search::{Cost, Problem, SearchError};
use ordered_float::OrderedFloat;
use std::hash::{Hash, Hasher};

/// Index of a node in a [`crate::search::SearchSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// Marker for "no node", used as the parent of root nodes and as the id of
/// nodes that do not belong to a search space.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// A [`SearchNode`] records a state together with how it was reached: the
/// parent node, the action applied in the parent and the accumulated path
/// cost. Nodes are immutable once they are in a search space.
///
/// Two nodes are equal when they are the same node of the same search space,
/// i.e. equality and hashing only look at the node id.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    node_id: NodeId,
    state: S,
    parent_id: NodeId,
    action: Option<A>,
    path_cost: Cost,
}

impl<S, A> SearchNode<S, A> {
    pub(crate) fn new(
        node_id: NodeId,
        state: S,
        parent_id: NodeId,
        action: Option<A>,
        path_cost: Cost,
    ) -> Self {
        Self {
            node_id,
            state,
            parent_id,
            action,
            path_cost,
        }
    }

    /// A root node that is not part of any search space. Useful for
    /// evaluating a heuristic on a bare state.
    pub fn detached(state: S) -> Self {
        Self::new(NO_NODE, state, NO_NODE, None, OrderedFloat(0.))
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }

    /// The action that produced this node, `None` for root nodes.
    pub fn get_action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    pub fn get_path_cost(&self) -> Cost {
        self.path_cost
    }

    pub fn is_root(&self) -> bool {
        self.parent_id == NO_NODE
    }
}

impl<S, A> PartialEq for SearchNode<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}

impl<S, A> Eq for SearchNode<S, A> {}

impl<S, A> Hash for SearchNode<S, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id.hash(state);
    }
}

/// A successor produced by [`expand`] that has not been attached to a search
/// space yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildNode<S, A> {
    pub state: S,
    pub action: A,
    pub path_cost: Cost,
}

/// Generate the children of `node`, one per applicable action and in the order
/// the problem lists its actions. Nothing is cached, so calling this twice on
/// the same node gives the same children for a stateless problem.
pub fn expand<P: Problem>(
    problem: &P,
    node: &SearchNode<P::State, P::Action>,
) -> Result<Vec<ChildNode<P::State, P::Action>>, SearchError> {
    let state = node.get_state();
    problem
        .actions(state)
        .into_iter()
        .map(|action| {
            let successor = problem.result(state, &action);
            let cost = problem.action_cost(state, &action, &successor)?;
            Ok(ChildNode {
                state: successor,
                action,
                path_cost: node.get_path_cost() + cost,
            })
        })
        .collect()
}
