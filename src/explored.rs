//! Closed set: every node that has been expanded, kept in an arena so that
//! child nodes can point back at their parents by [`NodeId`].

use rustc_hash::FxHashMap;

use crate::grid::Grid;
use crate::node::{Node, NodeId};
use crate::state::State;

#[derive(Debug, Default)]
pub struct Explored {
    nodes: Vec<Node>,
    index: FxHashMap<State, NodeId>,
}

impl Explored {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `node` as expanded. Entries are never moved or evicted, so the
    /// returned id stays valid for the rest of the search.
    ///
    /// A state is only ever expanded once; inserting it again returns the id
    /// of the first expansion.
    pub fn insert(&mut self, node: Node) -> NodeId {
        if let Some(&id) = self.index.get(&node.state) {
            return id;
        }
        let id = NodeId::new(self.nodes.len());
        self.index.insert(node.state.clone(), id);
        self.nodes.push(node);
        id
    }

    pub fn contains(&self, state: &State) -> bool {
        self.index.contains_key(state)
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub fn id_of(&self, state: &State) -> Option<NodeId> {
        self.index.get(state).copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Grids from the root to `node` inclusive, following parent links.
    pub fn path_to(&self, node: &Node) -> Vec<Grid> {
        let mut path = vec![node.state.grid().clone()];
        let mut parent = node.parent;
        while let Some(id) = parent {
            let n = self.get(id);
            path.push(n.state.grid().clone());
            parent = n.parent;
        }
        path.reverse();
        path
    }
}
