//! Path reconstruction from a predecessor map.

use cr_core::NodeId;

use crate::search::PredecessorMap;

/// Ordered node sequence from `source` to `target`, both inclusive.
///
/// Walks the predecessor links backward from `target`.  Returns `None` when
/// a link is missing before `source` is reached; a partial path is never
/// returned.  `source == target` yields `[source]` regardless of the map.
///
/// The walk takes at most `prev.len()` steps, so a malformed map containing
/// a cycle ends in `None` instead of looping.
pub fn reconstruct_path(prev: &PredecessorMap, source: NodeId, target: NodeId) -> Option<Vec<NodeId>> {
    if source == target {
        return Some(vec![source]);
    }

    let mut path = vec![target];
    let mut cur = target;
    for _ in 0..prev.len() {
        cur = prev.get(cur)?;
        path.push(cur);
        if cur == source {
            path.reverse();
            return Some(path);
        }
    }
    None
}
