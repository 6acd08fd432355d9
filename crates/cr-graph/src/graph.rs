//! Road graph representation.
//!
//! # Data layout
//!
//! Each location gets a dense [`NodeId`] in insertion order.  Per-node data
//! lives in `Vec`s indexed by that id, and the string key is resolved once
//! through an `FxHashMap` at the API boundary.  Outgoing roads are stored as
//! adjacency lists keyed by the source node:
//!
//! ```text
//! adjacency[n] = [ Adjacency { to, attrs }, ... ]
//! ```
//!
//! A two-way road in an undirected graph is stored twice (u→v and v→u) with
//! the same `RoadAttrs`, so both directions report identical weights.
//!
//! # Lifecycle
//!
//! Locations and roads are added once, then the graph is queried through
//! `&CityGraph`.  There is no interior mutability: a built graph can be
//! shared across threads and searched concurrently.

use rustc_hash::FxHashMap;

use cr_core::{GeoPoint, GraphConfig, NodeId, WeightSelector};

use crate::{GraphError, GraphResult};

// ── Location ──────────────────────────────────────────────────────────────────

/// A named point in the graph, optionally geo-referenced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id:   String,
    pub name: String,
    pub pos:  Option<GeoPoint>,
}

impl Location {
    /// A location without coordinates.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), pos: None }
    }

    /// Attach a position.
    pub fn at(mut self, pos: GeoPoint) -> Self {
        self.pos = Some(pos);
        self
    }
}

// ── Road ──────────────────────────────────────────────────────────────────────

/// Input record for [`CityGraph::add_road`].
///
/// `time` is optional; when absent the graph derives it from `distance` and
/// its configured default speed.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub u:        String,
    pub v:        String,
    pub distance: f64,
    pub time:     Option<f64>,
    pub cost:     f64,
    pub one_way:  bool,
}

impl Road {
    /// A two-way road with no explicit time and zero cost.
    pub fn new(u: impl Into<String>, v: impl Into<String>, distance: f64) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
            distance,
            time: None,
            cost: 0.0,
            one_way: false,
        }
    }

    pub fn time(mut self, time: f64) -> Self {
        self.time = Some(time);
        self
    }

    pub fn cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    pub fn one_way(mut self) -> Self {
        self.one_way = true;
        self
    }
}

/// Weights carried by every adjacency entry.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoadAttrs {
    pub distance: f64,
    pub time:     f64,
    pub cost:     f64,
    pub one_way:  bool,
}

impl RoadAttrs {
    /// Edge cost under the given selector.
    #[inline]
    pub fn weight(&self, selector: WeightSelector) -> f64 {
        match selector {
            WeightSelector::Distance => self.distance,
            WeightSelector::Time     => self.time,
            WeightSelector::Cost     => self.cost,
        }
    }
}

/// One outgoing road: neighbour plus attribute bundle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Adjacency {
    pub to:    NodeId,
    pub attrs: RoadAttrs,
}

// ── CityGraph ─────────────────────────────────────────────────────────────────

/// Locations and weighted roads, directed or undirected.
///
/// # Example
///
/// ```
/// use cr_graph::{CityGraph, Location, Road};
///
/// let mut g = CityGraph::new(false);
/// g.add_location(Location::new("A", "Alpha")).unwrap();
/// g.add_location(Location::new("B", "Beta")).unwrap();
/// g.add_road(Road::new("A", "B", 100.0)).unwrap();
/// assert_eq!(g.edge_count(), 2); // mirrored
/// assert_eq!(g.neighbors("B")[0].attrs.time, 2.0); // 100 / 50
/// ```
#[derive(Clone, Debug, Default)]
pub struct CityGraph {
    config:    GraphConfig,
    locations: Vec<Location>,
    index:     FxHashMap<String, NodeId>,
    adjacency: Vec<Vec<Adjacency>>,
    edges:     usize,
}

impl CityGraph {
    /// Empty graph with the default speed policy.
    pub fn new(directed: bool) -> Self {
        Self {
            config: GraphConfig { directed, ..GraphConfig::default() },
            ..Self::default()
        }
    }

    /// Empty graph with explicit settings.  Fails if the config is invalid.
    pub fn with_config(config: GraphConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::default() })
    }

    // ── Construction ──────────────────────────────────────────────────────

    /// Insert a location and return its `NodeId`.
    pub fn add_location(&mut self, loc: Location) -> GraphResult<NodeId> {
        if self.index.contains_key(&loc.id) {
            return Err(GraphError::DuplicateLocation(loc.id));
        }
        let id = NodeId::from_index(self.locations.len())
            .ok_or(GraphError::CapacityExceeded(self.locations.len()))?;
        self.index.insert(loc.id.clone(), id);
        self.locations.push(loc);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Insert a road.
    ///
    /// Creates `u→v`, plus `v→u` when the graph is undirected and the road is
    /// not `one_way`.  All checks run before anything is written, so a failed
    /// call leaves the graph untouched.
    pub fn add_road(&mut self, road: Road) -> GraphResult<()> {
        let u = self.resolve(&road.u)?;
        let v = self.resolve(&road.v)?;

        let time = road.time.unwrap_or_else(|| self.config.default_time(road.distance));
        for (field, value) in [("distance", road.distance), ("time", time), ("cost", road.cost)] {
            if !value.is_finite() || value < 0.0 {
                return Err(GraphError::InvalidWeight { u: road.u, v: road.v, field, value });
            }
        }

        let attrs = RoadAttrs {
            distance: road.distance,
            time,
            cost: road.cost,
            one_way: road.one_way,
        };

        self.adjacency[u.index()].push(Adjacency { to: v, attrs });
        self.edges += 1;
        if !road.one_way && !self.config.directed {
            self.adjacency[v.index()].push(Adjacency { to: u, attrs });
            self.edges += 1;
        }
        Ok(())
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    /// Dense id of a location key, if present.
    #[inline]
    pub fn node_id(&self, id: &str) -> Option<NodeId> {
        self.index.get(id).copied()
    }

    /// Like [`node_id`](Self::node_id) but fails with `UnknownLocation`.
    pub fn resolve(&self, id: &str) -> GraphResult<NodeId> {
        self.node_id(id)
            .ok_or_else(|| GraphError::UnknownLocation(id.to_owned()))
    }

    /// `true` if `node` is a valid index into this graph.
    #[inline]
    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.locations.len()
    }

    /// The location stored under `node`.
    ///
    /// # Panics
    /// Panics if `node` does not belong to this graph.
    #[inline]
    pub fn location(&self, node: NodeId) -> &Location {
        &self.locations[node.index()]
    }

    /// All locations in insertion order (index = `NodeId`).
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Location keys in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.locations.iter().map(|l| l.id.as_str())
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// Outgoing roads of the location keyed `id`.  Unknown keys yield an
    /// empty slice.
    pub fn neighbors(&self, id: &str) -> &[Adjacency] {
        match self.node_id(id) {
            Some(n) => &self.adjacency[n.index()],
            None => &[],
        }
    }

    /// Outgoing roads of `node`.  Empty for ids outside the graph.
    #[inline]
    pub fn out_edges(&self, node: NodeId) -> &[Adjacency] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.locations.len()
    }

    /// Number of adjacency entries (a mirrored road counts twice).
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }
}
