//! Many independent queries against one graph.
//!
//! Each query only reads the graph, so with the `parallel` Cargo feature the
//! pairs are routed on Rayon's thread pool with no synchronisation.  Results
//! come back in input order either way.

use cr_core::{NodeId, WeightSelector};

use crate::graph::CityGraph;
use crate::router::{Route, Router};
use crate::GraphResult;

/// Route every `(from, to)` pair with `router`.
pub fn route_many<R: Router + ?Sized>(
    graph:  &CityGraph,
    router: &R,
    pairs:  &[(NodeId, NodeId)],
    weight: WeightSelector,
) -> Vec<GraphResult<Option<Route>>> {
    #[cfg(not(feature = "parallel"))]
    {
        pairs
            .iter()
            .map(|&(from, to)| router.route(graph, from, to, weight))
            .collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .map(|&(from, to)| router.route(graph, from, to, weight))
            .collect()
    }
}
