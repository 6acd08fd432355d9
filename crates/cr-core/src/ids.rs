//! Dense node index.
//!
//! Locations are addressed by string keys at the API boundary, but the graph
//! assigns each one a dense `NodeId` in insertion order so the searches can
//! keep their per-node state in plain `Vec`s.

use std::fmt;

/// Dense index of a location in a `CityGraph`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Marks "no node" in per-node tables such as a predecessor map.  Never
    /// handed out by [`NodeId::from_index`].
    pub const INVALID: NodeId = NodeId(u32::MAX);

    /// Id for the `n`-th location, or `None` once the `u32` space (minus
    /// the sentinel) is exhausted.
    pub fn from_index(n: usize) -> Option<NodeId> {
        u32::try_from(n).ok().filter(|&i| i != u32::MAX).map(NodeId)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
