//! Open set for A*: a min-heap on `(f, insertion order)`.
//!
//! A state may sit in the frontier more than once when it is rediscovered
//! along another path; nothing is re-keyed. [`Frontier::remove`] retires every
//! open entry for a state at once. Retired entries stay in the heap and are
//! skipped when they surface, which keeps removal O(1).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;

use crate::node::{FrontierKey, Node};
use crate::state::State;

/// `BinaryHeap` is a max-heap, so keys are wrapped in `Reverse`.
#[derive(Debug)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: Node,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Live entries for one state. Heap entries for the state inserted before
/// `since` belong to an earlier, removed generation.
#[derive(Debug)]
struct OpenState {
    live: usize,
    since: u64,
}

#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    open: FxHashMap<State, OpenState>,
    next_seq: u64,
    live: usize,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: Node) {
        let seq = self.next_seq;
        self.next_seq += 1;

        self.open
            .entry(node.state.clone())
            .or_insert(OpenState {
                live: 0,
                since: seq,
            })
            .live += 1;
        self.live += 1;
        self.high_water = self.high_water.max(self.live);

        self.heap.push(FrontierEntry {
            key: Reverse(FrontierKey { f: node.f(), seq }),
            node,
        });
    }

    /// Removes and returns the open node with the smallest `f`, preferring the
    /// earliest inserted among equals.
    pub fn extract_min(&mut self) -> Option<Node> {
        while let Some(entry) = self.heap.pop() {
            let Some(open) = self.open.get_mut(&entry.node.state) else {
                continue;
            };
            if entry.key.0.seq < open.since {
                continue;
            }

            open.live -= 1;
            if open.live == 0 {
                self.open.remove(&entry.node.state);
            }
            self.live -= 1;
            return Some(entry.node);
        }
        None
    }

    pub fn contains(&self, state: &State) -> bool {
        self.open.contains_key(state)
    }

    /// Drops every open entry for `state`. Returns how many were dropped.
    pub fn remove(&mut self, state: &State) -> usize {
        let dropped = self.open.remove(state).map_or(0, |open| open.live);
        self.live -= dropped;
        if self.live == 0 {
            self.heap.clear();
        }
        dropped
    }

    /// Open entries, counting duplicates of the same state.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Largest number of open entries seen at once.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
