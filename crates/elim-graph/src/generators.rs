use elim_core::errors::ElimError;
use elim_core::rng::RngHandle;
use rand::seq::index;
use rand::Rng;
use tracing::debug;

use crate::flags::{EdgeCount, ErdosRenyiConfig};
use crate::graph::Graph;
use crate::ids::{make_vertex, max_edges, pair_from_index};

/// Generates a `G(n, m)` Erdős–Rényi graph with deterministic randomness.
///
/// Vertices are `0..n`; the `m` edges are distinct pairs drawn uniformly
/// without replacement. A disconnected draw is repaired through
/// [`Graph::connect`] unless the configuration disables it.
pub fn gen_erdos_renyi(config: &ErdosRenyiConfig, rng: &mut RngHandle) -> Result<Graph, ElimError> {
    let n = config.vertices;
    if n == 0 {
        return Err(ElimError::graph(
            "empty-graph",
            "erdos-renyi generator requires at least one vertex",
        ));
    }
    let capacity = max_edges(n);
    let m = match config.edges {
        EdgeCount::Exact(m) => m,
        EdgeCount::Uniform => rng.gen_range((n - 1)..=capacity.max(n - 1)),
    };
    if m > capacity {
        return Err(ElimError::graph(
            "too-many-edges",
            "requested more edges than distinct vertex pairs",
        )
        .with_context("vertices", n)
        .with_context("edges", m)
        .with_context("capacity", capacity));
    }

    let mut graph = Graph::from_vertices((0..n).map(make_vertex));
    for slot in index::sample(rng, capacity, m).into_iter() {
        let (a, b) = pair_from_index(n, slot);
        graph.add_edge(make_vertex(a), make_vertex(b));
    }
    if config.repair_connectivity && !graph.is_connected() {
        graph.connect();
    }
    debug!(
        vertices = graph.size(),
        edges = graph.edge_size(),
        sampled = m,
        "generated erdos-renyi graph"
    );
    Ok(graph)
}

/// Generates a connected random graph whose vertex count plus edge count is `elements`.
///
/// The vertex count is drawn among the sizes able to hold the remaining edges;
/// connectivity repair may add a few edges on top of the budget.
pub fn gen_precise(elements: usize, rng: &mut RngHandle) -> Result<Graph, ElimError> {
    if elements == 0 {
        return Err(ElimError::graph(
            "empty-graph",
            "precise generator requires at least one element",
        ));
    }
    let mut smallest = 1usize;
    while smallest + max_edges(smallest) < elements {
        smallest += 1;
    }
    let n = rng.gen_range(smallest..=smallest.max(elements / 2));
    let config = ErdosRenyiConfig {
        vertices: n,
        edges: EdgeCount::Exact(elements - n),
        repair_connectivity: true,
    };
    gen_erdos_renyi(&config, rng)
}
