use crate::search::{ChildNode, Cost, NodeId, SearchNode, NO_NODE};
use ordered_float::OrderedFloat;
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node created during a search. Nodes refer to
/// their parent by [`NodeId`], so the search tree is an append-only arena and
/// paths are rebuilt by walking parent ids back to the root.
#[derive(Debug)]
pub struct SearchSpace<S, A> {
    root_node_id: NodeId,
    nodes: SegVec<SearchNode<S, A>, Linear>,
}

impl<S: Clone, A: Clone> SearchSpace<S, A> {
    pub fn new(initial_state: S) -> Self {
        Self::with_root_cost(initial_state, OrderedFloat(0.))
    }

    /// Create a search space whose root starts with a path cost other than
    /// zero.
    pub fn with_root_cost(initial_state: S, root_cost: Cost) -> Self {
        let mut nodes = SegVec::new();
        let root_node_id = NodeId::new(0);
        nodes.push(SearchNode::new(
            root_node_id,
            initial_state,
            NO_NODE,
            None,
            root_cost,
        ));

        Self {
            root_node_id,
            nodes,
        }
    }

    /// Attach `child` below `parent_id` and return the new node.
    pub fn insert_child(&mut self, parent_id: NodeId, child: ChildNode<S, A>) -> &SearchNode<S, A> {
        debug_assert!(parent_id.id() < self.nodes.len(), "Unknown parent node");
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::new(
            node_id,
            child.state,
            parent_id,
            Some(child.action),
            child.path_cost,
        ));
        self.get_node(node_id)
    }

    #[inline(always)]
    pub fn get_root_node(&self) -> &SearchNode<S, A> {
        self.get_node(self.root_node_id)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode<S, A> {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    /// Iterate over `node_id` and its ancestors, ending with the root.
    pub fn ancestors(&self, node_id: NodeId) -> Ancestors<'_, S, A> {
        Ancestors {
            space: self,
            next: node_id,
        }
    }

    /// Whether a child with `state` placed below `parent_id` would revisit a
    /// state seen among its closest `lookback` ancestors. The check is bounded
    /// on purpose, so longer cycles go undetected.
    pub fn is_cycle(&self, state: &S, parent_id: NodeId, lookback: usize) -> bool
    where
        S: PartialEq,
    {
        self.ancestors(parent_id)
            .take(lookback)
            .any(|ancestor| ancestor.get_state() == state)
    }

    /// Actions from the root to `node_id`, empty for the root.
    pub fn path_actions(&self, node_id: NodeId) -> Vec<A> {
        let mut actions: Vec<A> = self
            .ancestors(node_id)
            .filter_map(|node| node.get_action().cloned())
            .collect();
        actions.reverse();
        actions
    }

    /// States from the root to `node_id`, both ends included.
    pub fn path_states(&self, node_id: NodeId) -> Vec<S> {
        let mut states: Vec<S> = self
            .ancestors(node_id)
            .map(|node| node.get_state().clone())
            .collect();
        states.reverse();
        states
    }

    /// Number of actions between the root and `node_id`.
    pub fn depth(&self, node_id: NodeId) -> usize {
        self.ancestors(node_id).count() - 1
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug)]
pub struct Ancestors<'a, S, A> {
    space: &'a SearchSpace<S, A>,
    next: NodeId,
}

impl<'a, S: Clone, A: Clone> Iterator for Ancestors<'a, S, A> {
    type Item = &'a SearchNode<S, A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == NO_NODE {
            return None;
        }
        let node = self.space.get_node(self.next);
        self.next = node.get_parent_id();
        Some(node)
    }
}
