//! cityroute — command-line front end for the `cr-*` road router.
//!
//! Loads a graph from a locations CSV and a roads CSV (see
//! `cr_graph::loader` for the formats), then answers one query per run:
//!
//! ```text
//! cityroute route --src A --dst J --algo astar --weight distance
//! cityroute locations
//! cityroute matrix --weight time
//! cityroute --config data/config.json --directed route --src H --dst D
//! ```
//!
//! Results go to stdout as JSON; logs go to stderr and are filtered with
//! `RUST_LOG` (e.g. `RUST_LOG=cr_graph=debug`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use cr_core::{GraphConfig, NodeId, WeightSelector};
use cr_graph::{
    AStarRouter, Algorithm, CityGraph, DijkstraRouter, GreatCircle, Route, RouteQuery, Router,
    load_graph_csv, route_many,
};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Shortest paths between named locations on a road graph.
#[derive(Parser, Debug)]
#[command(name = "cityroute", version, about)]
struct Cli {
    #[command(flatten)]
    graph: GraphArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args, Debug)]
struct GraphArgs {
    /// Locations CSV (`id,name,lat,lon`).
    #[arg(long, global = true, default_value = "data/locations.csv")]
    locations: PathBuf,

    /// Roads CSV (`u,v,distance,time,cost,one_way`).
    #[arg(long, global = true, default_value = "data/roads.csv")]
    roads: PathBuf,

    /// JSON graph settings (`directed`, `default_speed`).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Do not mirror two-way roads (overrides the config file).
    #[arg(long, global = true)]
    directed: bool,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Shortest path between two locations.
    Route(RouteArgs),
    /// List every location with its coordinates.
    Locations,
    /// Total weight between every pair of locations.
    Matrix(MatrixArgs),
}

#[derive(clap::Args, Debug)]
struct RouteArgs {
    /// Source location id.
    #[arg(long)]
    src: String,

    /// Destination location id.
    #[arg(long)]
    dst: String,

    /// `dijkstra` or `astar`.
    #[arg(long, default_value = "dijkstra")]
    algo: Algorithm,

    /// `distance`, `time` or `cost`.
    #[arg(long, default_value = "distance")]
    weight: WeightSelector,
}

#[derive(clap::Args, Debug)]
struct MatrixArgs {
    /// `dijkstra` or `astar`.
    #[arg(long, default_value = "dijkstra")]
    algo: Algorithm,

    /// `distance`, `time` or `cost`.
    #[arg(long, default_value = "distance")]
    weight: WeightSelector,
}

// ── Output ────────────────────────────────────────────────────────────────────

/// `{ "path": [ids...], "distance": number | null }`.
#[derive(Serialize, Debug, PartialEq)]
struct RouteResponse {
    path:     Vec<String>,
    distance: Option<f64>,
}

impl RouteResponse {
    fn new(graph: &CityGraph, route: Option<&Route>) -> Self {
        match route {
            Some(r) => Self {
                path:     r.ids(graph).into_iter().map(str::to_owned).collect(),
                distance: Some(r.total),
            },
            None => Self { path: Vec::new(), distance: None },
        }
    }
}

#[derive(Serialize, Debug)]
struct LocationView<'g> {
    id:   &'g str,
    name: &'g str,
    lat:  Option<f64>,
    lon:  Option<f64>,
}

// ── Commands ──────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let graph = load_graph(&cli.graph)?;

    let json = match cli.command {
        Commands::Route(args) => serde_json::to_string_pretty(&run_route(&graph, &args)?)?,
        Commands::Locations => serde_json::to_string_pretty(&list_locations(&graph))?,
        Commands::Matrix(args) => serde_json::to_string_pretty(&run_matrix(&graph, &args)?)?,
    };
    println!("{json}");
    Ok(())
}

fn load_graph(args: &GraphArgs) -> Result<CityGraph> {
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => GraphConfig::default(),
    };
    if args.directed {
        config.directed = true;
    }

    let t0 = Instant::now();
    let graph = load_graph_csv(&args.locations, &args.roads, config).with_context(|| {
        format!(
            "loading graph from {} and {}",
            args.locations.display(),
            args.roads.display()
        )
    })?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        directed = graph.is_directed(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "graph ready"
    );
    Ok(graph)
}

fn read_config(path: &Path) -> Result<GraphConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

/// Missing fields fall back to `GraphConfig::default()`.
fn parse_config(text: &str) -> Result<GraphConfig> {
    Ok(serde_json::from_str(text)?)
}

fn warn_if_inadmissible(algo: Algorithm, weight: WeightSelector) {
    if algo == Algorithm::AStar && !weight.is_geodesic() {
        warn!(
            %weight,
            "great-circle heuristic is not admissible for this weight; the A* path may be suboptimal"
        );
    }
}

fn run_route(graph: &CityGraph, args: &RouteArgs) -> Result<RouteResponse> {
    for id in [&args.src, &args.dst] {
        if graph.node_id(id).is_none() {
            bail!("unknown location {id:?}");
        }
    }
    warn_if_inadmissible(args.algo, args.weight);

    let t0 = Instant::now();
    let route = RouteQuery::new(args.src.as_str(), args.dst.as_str())
        .algorithm(args.algo)
        .weight(args.weight)
        .run(graph)?;
    info!(
        src = %args.src,
        dst = %args.dst,
        algo = %args.algo,
        weight = %args.weight,
        found = route.is_some(),
        elapsed_us = t0.elapsed().as_micros() as u64,
        "route query"
    );
    Ok(RouteResponse::new(graph, route.as_ref()))
}

fn list_locations(graph: &CityGraph) -> Vec<LocationView<'_>> {
    graph
        .locations()
        .iter()
        .map(|l| LocationView {
            id:   &l.id,
            name: &l.name,
            lat:  l.pos.map(|p| p.lat),
            lon:  l.pos.map(|p| p.lon),
        })
        .collect()
}

/// `matrix[from][to]` = total weight, `null` where unreachable.
fn run_matrix<'g>(
    graph: &'g CityGraph,
    args:  &MatrixArgs,
) -> Result<BTreeMap<&'g str, BTreeMap<&'g str, Option<f64>>>> {
    warn_if_inadmissible(args.algo, args.weight);

    let n = graph.node_count() as u32;
    let pairs: Vec<(NodeId, NodeId)> = (0..n)
        .flat_map(|a| (0..n).map(move |b| (NodeId(a), NodeId(b))))
        .collect();

    let astar = AStarRouter::<GreatCircle>::default();
    let router: &dyn Router = match args.algo {
        Algorithm::Dijkstra => &DijkstraRouter,
        Algorithm::AStar => &astar,
    };
    let results = route_many(graph, router, &pairs, args.weight);

    let mut matrix: BTreeMap<&str, BTreeMap<&str, Option<f64>>> = BTreeMap::new();
    for (&(a, b), result) in pairs.iter().zip(results) {
        let total = result
            .with_context(|| format!("routing {} -> {}", graph.location(a).id, graph.location(b).id))?
            .map(|r| r.total);
        matrix
            .entry(graph.location(a).id.as_str())
            .or_default()
            .insert(graph.location(b).id.as_str(), total);
    }
    Ok(matrix)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
