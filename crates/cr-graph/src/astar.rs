//! Heuristic-guided search (A*).
//!
//! # Admissibility
//!
//! A* returns an optimal path only if the heuristic never overestimates the
//! remaining cost.  [`GreatCircle`] is a lower bound on road `distance`
//! (assuming distances in kilometres that are at least the straight-line
//! distance), so it is admissible for [`WeightSelector::Distance`] only.
//! Pairing it with `Time` or `Cost` is allowed but may return a suboptimal
//! path; use [`ZeroHeuristic`] (or Dijkstra) when optimality matters for
//! those selectors.

use std::collections::BinaryHeap;

use tracing::debug;

use cr_core::{NodeId, WeightSelector, great_circle_distance};

use crate::graph::CityGraph;
use crate::search::{QueueEntry, SearchTree};
use crate::{GraphError, GraphResult};

// ── Heuristic ─────────────────────────────────────────────────────────────────

/// Estimate of the remaining cost from `node` to `target`.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, graph: &CityGraph, node: NodeId, target: NodeId) -> f64;
}

/// Haversine distance between the two locations' coordinates; `0.0` when
/// either has none.
#[derive(Copy, Clone, Debug, Default)]
pub struct GreatCircle;

impl Heuristic for GreatCircle {
    #[inline]
    fn estimate(&self, graph: &CityGraph, node: NodeId, target: NodeId) -> f64 {
        great_circle_distance(graph.location(node).pos, graph.location(target).pos)
    }
}

/// Always `0.0`; turns A* into uniform-cost search.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    #[inline]
    fn estimate(&self, _graph: &CityGraph, _node: NodeId, _target: NodeId) -> f64 {
        0.0
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

/// Least-cost path search from `source` to `target`, frontier ordered by
/// `g + h`.
///
/// Stops when `target` is popped.  Nodes already expanded are kept in a
/// closed set and their later (stale) frontier entries are skipped.  The
/// returned tree holds `g` for every node reached and the came-from links
/// for [`reconstruct_path`](crate::reconstruct_path).  Like
/// [`dijkstra`](crate::dijkstra), `g` and `f` saturate at `f64::MAX`.
pub fn a_star<H: Heuristic + ?Sized>(
    graph: &CityGraph,
    source: NodeId,
    target: NodeId,
    weight: WeightSelector,
    heuristic: &H,
) -> GraphResult<SearchTree> {
    for node in [source, target] {
        if !graph.contains(node) {
            return Err(GraphError::UnknownLocation(node.to_string()));
        }
    }

    let n = graph.node_count();
    let mut tree = SearchTree::new(n, source);
    let mut closed = vec![false; n];
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry { key: heuristic.estimate(graph, source, target), node: source });

    let mut expanded = 0usize;
    while let Some(QueueEntry { node: current, .. }) = heap.pop() {
        if current == target {
            break;
        }
        if closed[current.index()] {
            continue;
        }
        closed[current.index()] = true;
        expanded += 1;

        let g_current = tree.cost[current.index()];
        for edge in graph.out_edges(current) {
            let neighbor = edge.to;
            let tentative = (g_current + edge.attrs.weight(weight)).min(f64::MAX);
            if tentative < tree.cost[neighbor.index()] {
                tree.prev.set(neighbor, current);
                tree.cost[neighbor.index()] = tentative;
                let f = (tentative + heuristic.estimate(graph, neighbor, target)).min(f64::MAX);
                heap.push(QueueEntry { key: f, node: neighbor });
            }
        }
    }

    debug!(%source, %target, %weight, expanded, "a* finished");
    Ok(tree)
}
