//! Uniform-cost search (Dijkstra).

use std::collections::BinaryHeap;

use tracing::debug;

use cr_core::{NodeId, WeightSelector};

use crate::graph::CityGraph;
use crate::search::{QueueEntry, SearchTree};
use crate::{GraphError, GraphResult};

/// Least-cost distances from `source` under `weight`.
///
/// Runs to exhaustion, or stops as soon as `target` is popped from the
/// frontier; the target's distance is final either way.  The frontier uses
/// reinsertion instead of decrease-key: an entry whose key exceeds the
/// recorded best distance is stale and skipped.
///
/// A `target` outside the graph is not an error; it simply never appears in
/// the returned tree.  Weights are assumed non-negative (enforced by
/// [`CityGraph::add_road`]).  Path sums saturate at `f64::MAX` so a reachable
/// node is never left at the `INFINITY` "unreached" mark.
pub fn dijkstra(
    graph: &CityGraph,
    source: NodeId,
    target: Option<NodeId>,
    weight: WeightSelector,
) -> GraphResult<SearchTree> {
    if !graph.contains(source) {
        return Err(GraphError::UnknownSource(source.to_string()));
    }

    let mut tree = SearchTree::new(graph.node_count(), source);
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry { key: 0.0, node: source });

    let mut settled = 0usize;
    while let Some(QueueEntry { key: d, node: u }) = heap.pop() {
        // Skip stale heap entries.
        if d > tree.cost[u.index()] {
            continue;
        }
        settled += 1;

        if Some(u) == target {
            break;
        }

        for edge in graph.out_edges(u) {
            let v = edge.to;
            let nd = (d + edge.attrs.weight(weight)).min(f64::MAX);
            if nd < tree.cost[v.index()] {
                tree.cost[v.index()] = nd;
                tree.prev.set(v, u);
                heap.push(QueueEntry { key: nd, node: v });
            }
        }
    }

    debug!(%source, ?target, %weight, settled, "dijkstra finished");
    Ok(tree)
}
