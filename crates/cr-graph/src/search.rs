//! Output shared by both searches, and the frontier entry they push.

use std::cmp::Ordering;

use cr_core::NodeId;

// ── PredecessorMap ────────────────────────────────────────────────────────────

/// Per-node record of the previous node on its best-known path.
///
/// Indexed by `NodeId`; `NodeId::INVALID` marks "no entry" (the source, and
/// nodes never reached).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredecessorMap {
    prev: Vec<NodeId>,
}

impl PredecessorMap {
    /// A map with room for `node_count` nodes and no entries.
    pub fn new(node_count: usize) -> Self {
        Self { prev: vec![NodeId::INVALID; node_count] }
    }

    /// Predecessor of `node`, if one was recorded.
    #[inline]
    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        match self.prev.get(node.index()) {
            Some(&p) if p != NodeId::INVALID => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn set(&mut self, node: NodeId, prev: NodeId) {
        self.prev[node.index()] = prev;
    }

    /// Number of node slots (the graph's node count).
    pub fn len(&self) -> usize {
        self.prev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prev.is_empty()
    }

    /// Number of nodes with a recorded predecessor.
    pub fn entry_count(&self) -> usize {
        self.prev.iter().filter(|&&p| p != NodeId::INVALID).count()
    }
}

// ── SearchTree ────────────────────────────────────────────────────────────────

/// Accumulated cost and predecessor per node, as left by a search.
///
/// For Dijkstra `cost` holds final distances of settled nodes (and upper
/// bounds of frontier nodes if it stopped early at the target); for A* it
/// holds `g` values.  Unreached nodes hold `f64::INFINITY`.
#[derive(Clone, Debug)]
pub struct SearchTree {
    pub cost: Vec<f64>,
    pub prev: PredecessorMap,
}

impl SearchTree {
    pub(crate) fn new(node_count: usize, source: NodeId) -> Self {
        let mut cost = vec![f64::INFINITY; node_count];
        cost[source.index()] = 0.0;
        Self { cost, prev: PredecessorMap::new(node_count) }
    }

    /// Accumulated cost of `node`; infinity if never reached.
    #[inline]
    pub fn cost(&self, node: NodeId) -> f64 {
        self.cost.get(node.index()).copied().unwrap_or(f64::INFINITY)
    }

    #[inline]
    pub fn is_reached(&self, node: NodeId) -> bool {
        self.cost(node).is_finite()
    }

    /// Number of nodes with a finite cost.
    pub fn reached_count(&self) -> usize {
        self.cost.iter().filter(|c| c.is_finite()).count()
    }
}

// ── Frontier entry ────────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `key` first.  Equal keys fall back to the smaller `NodeId` for
/// reproducible tie-breaking.
#[derive(Copy, Clone, Debug)]
pub(crate) struct QueueEntry {
    pub key:  f64,
    pub node: NodeId,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
