//! CSV graph loader.
//!
//! # CSV formats
//!
//! Locations, one row per location.  `lat` and `lon` are either both filled
//! or both empty:
//!
//! ```csv
//! id,name,lat,lon
//! A,Alpha,28.61,77.20
//! B,Beta,28.70,77.10
//! X,Depot,,
//! ```
//!
//! Roads, one row per road.  `time`, `cost` and `one_way` may be empty or
//! the columns omitted entirely:
//!
//! ```csv
//! u,v,distance,time,cost,one_way
//! A,B,15.2,,,
//! B,X,3.0,0.1,2.5,true
//! ```
//!
//! | Column    | Empty means                                  |
//! |-----------|----------------------------------------------|
//! | `time`    | `distance / default_speed`                   |
//! | `cost`    | `0.0`                                        |
//! | `one_way` | `false` (`true`/`1`/`yes` mark a one-way)    |
//!
//! Rows are applied in file order through [`CityGraph::add_location`] and
//! [`CityGraph::add_road`], so construction errors (duplicate ids, unknown
//! endpoints, negative weights) surface unchanged.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use cr_core::{GeoPoint, GraphConfig};

use crate::graph::{CityGraph, Location, Road};
use crate::{GraphError, GraphResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LocationRecord {
    id:   String,
    name: String,
    #[serde(default)]
    lat:  Option<f64>,
    #[serde(default)]
    lon:  Option<f64>,
}

#[derive(Deserialize)]
struct RoadRecord {
    u:        String,
    v:        String,
    distance: f64,
    #[serde(default)]
    time:     Option<f64>,
    #[serde(default)]
    cost:     Option<f64>,
    #[serde(default)]
    one_way:  Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a graph from a locations CSV and a roads CSV on disk.
pub fn load_graph_csv(
    locations: &Path,
    roads:     &Path,
    config:    GraphConfig,
) -> GraphResult<CityGraph> {
    let loc_file  = std::fs::File::open(locations)?;
    let road_file = std::fs::File::open(roads)?;
    load_graph_reader(loc_file, road_file, config)
}

/// Like [`load_graph_csv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data embedded in a
/// binary.
pub fn load_graph_reader<L: Read, R: Read>(
    locations: L,
    roads:     R,
    config:    GraphConfig,
) -> GraphResult<CityGraph> {
    let mut graph = CityGraph::with_config(config)?;

    // ── Locations ─────────────────────────────────────────────────────────
    let mut reader = csv_reader(locations);
    for result in reader.deserialize::<LocationRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        graph.add_location(location_from(row)?)?;
    }

    // ── Roads ─────────────────────────────────────────────────────────────
    let mut reader = csv_reader(roads);
    for result in reader.deserialize::<RoadRecord>() {
        let row = result.map_err(|e| GraphError::Parse(e.to_string()))?;
        graph.add_road(road_from(row)?)?;
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        "graph loaded from CSV"
    );
    Ok(graph)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn location_from(row: LocationRecord) -> GraphResult<Location> {
    let pos = match (row.lat, row.lon) {
        (Some(lat), Some(lon)) => Some(GeoPoint::new(lat, lon)),
        (None, None) => None,
        _ => {
            return Err(GraphError::Parse(format!(
                "location {:?}: lat and lon must both be set or both be empty",
                row.id
            )));
        }
    };
    Ok(Location { id: row.id, name: row.name, pos })
}

fn road_from(row: RoadRecord) -> GraphResult<Road> {
    let one_way = match row.one_way.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("") | Some("false") | Some("0") | Some("no") => false,
        Some("true") | Some("1") | Some("yes") => true,
        Some(other) => {
            return Err(GraphError::Parse(format!(
                "road {:?} -> {:?}: invalid one_way {other:?}",
                row.u, row.v
            )));
        }
    };
    Ok(Road {
        u: row.u,
        v: row.v,
        distance: row.distance,
        time: row.time,
        cost: row.cost.unwrap_or(0.0),
        one_way,
    })
}
