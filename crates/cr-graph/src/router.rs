//! Routing trait, the two built-in routers, and string-keyed queries.
//!
//! # Pluggability
//!
//! Callers route through the [`Router`] trait, so a front end can switch
//! between [`DijkstraRouter`] and [`AStarRouter`] (or a custom heuristic)
//! without touching the search code.
//!
//! # Cost units
//!
//! `Route::total` is the sum of the selected weight along the path, in the
//! units the road records were given in.

use std::str::FromStr;

use cr_core::{CoreError, NodeId, WeightSelector};

use crate::astar::{GreatCircle, Heuristic, a_star};
use crate::dijkstra::dijkstra;
use crate::graph::CityGraph;
use crate::path::reconstruct_path;
use crate::search::SearchTree;
use crate::{GraphError, GraphResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// The result of a routing query: the visited nodes in order and the total
/// weight along them.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes to traverse in order, source and destination included.
    pub nodes: Vec<NodeId>,
    /// Accumulated weight of the destination.
    pub total: f64,
}

impl Route {
    /// `true` if the source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Location keys along the route.
    pub fn ids<'g>(&self, graph: &'g CityGraph) -> Vec<&'g str> {
        self.nodes
            .iter()
            .map(|&n| graph.location(n).id.as_str())
            .collect()
    }

    /// Build a route from a finished search, or `None` if `to` was not
    /// reached.
    fn from_tree(tree: &SearchTree, from: NodeId, to: NodeId) -> Option<Route> {
        let nodes = reconstruct_path(&tree.prev, from, to)?;
        Some(Route { nodes, total: tree.cost(to) })
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable routing engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can serve queries
/// from several Rayon workers against a shared graph.
pub trait Router: Send + Sync {
    /// Compute a route from `from` to `to` minimising `weight`.
    ///
    /// Returns `Ok(None)` if `to` is unreachable.  `from == to` is a
    /// single-node route with total `0.0`.
    fn route(
        &self,
        graph: &CityGraph,
        from: NodeId,
        to: NodeId,
        weight: WeightSelector,
    ) -> GraphResult<Option<Route>>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Uniform-cost search, stopping early at the destination.
///
/// Optimal for every [`WeightSelector`].  An out-of-range `from` fails with
/// `UnknownSource`; an out-of-range `to` is reported as unreachable.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(
        &self,
        graph: &CityGraph,
        from: NodeId,
        to: NodeId,
        weight: WeightSelector,
    ) -> GraphResult<Option<Route>> {
        let tree = dijkstra(graph, from, Some(to), weight)?;
        if !graph.contains(to) {
            return Ok(None);
        }
        Ok(Route::from_tree(&tree, from, to))
    }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* with a pluggable heuristic (great-circle by default).
///
/// See the [`astar`](crate::astar) module for when the result is optimal.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarRouter<H = GreatCircle> {
    pub heuristic: H,
}

impl<H: Heuristic> AStarRouter<H> {
    pub fn with_heuristic(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<H: Heuristic> Router for AStarRouter<H> {
    fn route(
        &self,
        graph: &CityGraph,
        from: NodeId,
        to: NodeId,
        weight: WeightSelector,
    ) -> GraphResult<Option<Route>> {
        let tree = a_star(graph, from, to, weight, &self.heuristic)?;
        Ok(Route::from_tree(&tree, from, to))
    }
}

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Which search a [`RouteQuery`] runs.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar    => "astar",
        }
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            other => Err(CoreError::Parse(format!(
                "invalid algorithm {other:?}: expected \"dijkstra\" or \"astar\""
            ))),
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── RouteQuery ────────────────────────────────────────────────────────────────

/// A query addressed by location keys.
///
/// Unknown keys follow each algorithm's contract: Dijkstra fails with
/// `UnknownSource` for a missing source and treats a missing target as
/// unreachable; A* fails with `UnknownLocation` for either.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteQuery {
    pub source:    String,
    pub target:    String,
    pub algorithm: Algorithm,
    pub weight:    WeightSelector,
}

impl RouteQuery {
    /// Dijkstra over `distance`.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source:    source.into(),
            target:    target.into(),
            algorithm: Algorithm::default(),
            weight:    WeightSelector::default(),
        }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn weight(mut self, weight: WeightSelector) -> Self {
        self.weight = weight;
        self
    }

    /// Resolve the keys and run the selected search.
    pub fn run(&self, graph: &CityGraph) -> GraphResult<Option<Route>> {
        match self.algorithm {
            Algorithm::Dijkstra => {
                let from = graph
                    .node_id(&self.source)
                    .ok_or_else(|| GraphError::UnknownSource(self.source.clone()))?;
                let Some(to) = graph.node_id(&self.target) else {
                    return Ok(None);
                };
                DijkstraRouter.route(graph, from, to, self.weight)
            }
            Algorithm::AStar => {
                let from = graph.resolve(&self.source)?;
                let to = graph.resolve(&self.target)?;
                AStarRouter::<GreatCircle>::default().route(graph, from, to, self.weight)
            }
        }
    }
}
