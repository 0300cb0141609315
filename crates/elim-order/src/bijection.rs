use std::collections::HashMap;

use elim_core::errors::ElimError;
use elim_core::VertexId;
use elim_graph::Graph;

/// Bijection between ranks `0..n` and vertex identities.
///
/// `alpha(i)` is the vertex eliminated `i`-th, `alpha_inverse(v)` its rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankBijection {
    alpha: Vec<VertexId>,
    alpha_inverse: HashMap<VertexId, usize>,
}

impl RankBijection {
    /// Builds the bijection from an ordering of distinct vertices.
    pub fn new<I, V>(ordering: I) -> Result<Self, ElimError>
    where
        I: IntoIterator<Item = V>,
        V: Into<VertexId>,
    {
        let alpha: Vec<VertexId> = ordering.into_iter().map(Into::into).collect();
        let mut alpha_inverse = HashMap::with_capacity(alpha.len());
        for (rank, vertex) in alpha.iter().enumerate() {
            if let Some(previous) = alpha_inverse.insert(*vertex, rank) {
                return Err(ElimError::ordering(
                    "duplicate-vertex",
                    "vertex appears twice in the ordering",
                )
                .with_context("vertex", vertex)
                .with_context("first_rank", previous)
                .with_context("second_rank", rank));
            }
        }
        Ok(Self {
            alpha,
            alpha_inverse,
        })
    }

    /// Builds the bijection and checks that it covers the graph's vertex set exactly.
    pub fn for_graph<I, V>(graph: &Graph, ordering: I) -> Result<Self, ElimError>
    where
        I: IntoIterator<Item = V>,
        V: Into<VertexId>,
    {
        let bijection = Self::new(ordering)?;
        bijection.ensure_covers(graph)?;
        Ok(bijection)
    }

    /// Fails unless the domain is exactly the vertex set of `graph`.
    pub fn ensure_covers(&self, graph: &Graph) -> Result<(), ElimError> {
        if self.len() != graph.size() {
            return Err(mismatch()
                .with_context("expected", graph.size())
                .with_context("found", self.len()));
        }
        if let Some(missing) = graph
            .vertices()
            .find(|vertex| !self.alpha_inverse.contains_key(vertex))
        {
            return Err(mismatch().with_context("missing", missing));
        }
        Ok(())
    }

    /// Vertex at `rank`.
    pub fn alpha(&self, rank: usize) -> Result<VertexId, ElimError> {
        self.alpha.get(rank).copied().ok_or_else(|| {
            ElimError::ordering("rank-out-of-range", "rank exceeds the bijection size")
                .with_context("rank", rank)
                .with_context("len", self.alpha.len())
        })
    }

    /// Rank of `vertex`.
    pub fn alpha_inverse(&self, vertex: impl Into<VertexId>) -> Result<usize, ElimError> {
        let vertex = vertex.into();
        self.alpha_inverse.get(&vertex).copied().ok_or_else(|| {
            ElimError::ordering("unknown-vertex", "vertex is outside the bijection domain")
                .with_context("vertex", vertex)
        })
    }

    /// Number of ranked vertices.
    pub fn len(&self) -> usize {
        self.alpha.len()
    }

    /// Returns whether the bijection is empty.
    pub fn is_empty(&self) -> bool {
        self.alpha.is_empty()
    }

    /// The ordering, indexed by rank.
    pub fn ordering(&self) -> &[VertexId] {
        &self.alpha
    }
}

fn mismatch() -> ElimError {
    ElimError::ordering(
        "ordering-mismatch",
        "ordering does not cover the graph's vertex set exactly once",
    )
    .with_hint("pass every graph vertex exactly once")
}
