/// Configuration for the Erdős–Rényi generator ([`gen_erdos_renyi`](crate::gen_erdos_renyi)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErdosRenyiConfig {
    /// Number of vertices, labelled `0..vertices`.
    pub vertices: usize,
    /// How many edges to sample.
    pub edges: EdgeCount,
    /// Whether a disconnected result is repaired with [`Graph::connect`](crate::Graph::connect).
    pub repair_connectivity: bool,
}

impl ErdosRenyiConfig {
    /// Configuration for `n` vertices with a uniformly drawn edge count.
    pub fn with_vertices(vertices: usize) -> Self {
        Self {
            vertices,
            ..Self::default()
        }
    }
}

impl Default for ErdosRenyiConfig {
    fn default() -> Self {
        Self {
            vertices: 16,
            edges: EdgeCount::Uniform,
            repair_connectivity: true,
        }
    }
}

/// Edge budget of a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeCount {
    /// Exactly this many distinct edges.
    Exact(usize),
    /// Drawn uniformly in `[n - 1, n(n - 1) / 2]`.
    Uniform,
}
