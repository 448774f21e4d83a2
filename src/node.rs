//! Search-tree records.

use crate::state::State;

/// Stable handle to a node stored in the explored arena.
///
/// Parents are referenced by index rather than by address, so the arena can
/// grow freely while every back-link stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> NodeId {
        NodeId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A state annotated with its search bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub state: State,
    /// Moves taken from the start.
    pub g: u32,
    /// Heuristic estimate of the moves left.
    pub h: u32,
    /// The expanded node this one was generated from; `None` for the root.
    pub parent: Option<NodeId>,
}

impl Node {
    pub fn root(state: State, h: u32) -> Node {
        Node {
            state,
            g: 0,
            h,
            parent: None,
        }
    }

    pub fn child(state: State, parent: NodeId, g: u32, h: u32) -> Node {
        Node {
            state,
            g,
            h,
            parent: Some(parent),
        }
    }

    /// Total estimated cost `g + h`.
    pub fn f(&self) -> u32 {
        self.g.saturating_add(self.h)
    }
}

/// Frontier ordering key: lowest `f` first, then earliest insertion.
///
/// Field order matters; the derived `Ord` compares `f` before `seq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FrontierKey {
    pub f: u32,
    pub seq: u64,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn f_is_g_plus_h() {
        let state = State::new(Grid::ordered(3).unwrap());
        let node = Node::child(state, NodeId::new(4), 3, 7);
        assert_eq!(node.f(), 10);
        assert_eq!(node.parent.map(NodeId::index), Some(4));
    }

    #[test]
    fn key_orders_by_f_then_insertion() {
        let a = FrontierKey { f: 1, seq: 9 };
        let b = FrontierKey { f: 2, seq: 0 };
        let c = FrontierKey { f: 1, seq: 3 };
        assert!(a < b, "lower f should sort first");
        assert!(c < a, "earlier insertion should win an f tie");
    }
}
