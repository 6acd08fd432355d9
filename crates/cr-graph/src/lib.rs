//! `cr-graph` — road graph store, shortest-path search and routing.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`graph`]     | `CityGraph`, `Location`, `Road`, `RoadAttrs`, `Adjacency`  |
//! | [`search`]    | `SearchTree`, `PredecessorMap` (shared search output)      |
//! | [`dijkstra`]  | Uniform-cost search                                        |
//! | [`astar`]     | Heuristic-guided search, `Heuristic` trait                 |
//! | [`path`]      | `reconstruct_path`                                         |
//! | [`router`]    | `Router` trait, `Route`, `Algorithm`, `RouteQuery`         |
//! | [`batch`]     | `route_many`                                               |
//! | [`loader`]    | CSV graph loading                                          |
//! | [`error`]     | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | `route_many` runs queries on the Rayon pool.              |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |
//!
//! # Example
//!
//! ```
//! use cr_core::{GeoPoint, WeightSelector};
//! use cr_graph::{Algorithm, CityGraph, Location, Road, RouteQuery};
//!
//! let mut g = CityGraph::new(false);
//! g.add_location(Location::new("A", "Alpha").at(GeoPoint::new(0.0, 0.0))).unwrap();
//! g.add_location(Location::new("B", "Beta").at(GeoPoint::new(0.0, 1.0))).unwrap();
//! g.add_road(Road::new("A", "B", 120.0)).unwrap();
//!
//! let route = RouteQuery::new("B", "A")
//!     .algorithm(Algorithm::AStar)
//!     .weight(WeightSelector::Distance)
//!     .run(&g)
//!     .unwrap()
//!     .expect("B reaches A over the mirrored road");
//! assert_eq!(route.ids(&g), vec!["B", "A"]);
//! assert_eq!(route.total, 120.0);
//! ```

pub mod astar;
pub mod batch;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod loader;
pub mod path;
pub mod router;
pub mod search;


pub use astar::{GreatCircle, Heuristic, ZeroHeuristic, a_star};
pub use batch::route_many;
pub use dijkstra::dijkstra;
pub use error::{GraphError, GraphResult};
pub use graph::{Adjacency, CityGraph, Location, Road, RoadAttrs};
pub use loader::{load_graph_csv, load_graph_reader};
pub use path::reconstruct_path;
pub use router::{AStarRouter, Algorithm, DijkstraRouter, Route, RouteQuery, Router};
pub use search::{PredecessorMap, SearchTree};
