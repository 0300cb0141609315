//! Chordality and elimination checks built on top of lex-P and fill-in.

use elim_core::errors::ElimError;
use elim_core::VertexId;
use elim_graph::Graph;
use tracing::debug;

use crate::bijection::RankBijection;
use crate::fill_in::fill_in;
use crate::lex_p::lex_p;

/// Returns whether the ordering needs no fill edge on `graph`.
pub fn is_perfect_elimination_ordering(
    graph: &Graph,
    bijection: &RankBijection,
) -> Result<bool, ElimError> {
    let mut scratch = graph.clone();
    Ok(fill_in(&mut scratch, bijection)? == 0)
}

/// Returns whether `graph` is chordal.
///
/// A graph is chordal exactly when its lex-P ordering is perfect.
pub fn is_chordal(graph: &Graph) -> Result<bool, ElimError> {
    let ordering = lex_p(graph)?;
    let bijection = RankBijection::for_graph(graph, ordering)?;
    is_perfect_elimination_ordering(graph, &bijection)
}

/// Plays the elimination game on a copy of `graph`.
///
/// Vertices are deleted in rank order; each must leave behind neighbours that
/// are pairwise adjacent. Fails with `elimination-not-clique` on the first
/// vertex that does not.
pub fn verify_elimination_game(graph: &Graph, bijection: &RankBijection) -> Result<(), ElimError> {
    bijection.ensure_covers(graph)?;
    let mut scratch = graph.clone();
    for rank in 0..bijection.len() {
        let vertex = bijection.alpha(rank)?;
        let neighbours: Vec<VertexId> = scratch.neighbors(vertex)?.iter().copied().collect();
        for (idx, a) in neighbours.iter().enumerate() {
            if let Some(b) = neighbours[idx + 1..]
                .iter()
                .find(|b| !scratch.is_adjacent(*a, **b))
            {
                return Err(ElimError::ordering(
                    "elimination-not-clique",
                    "remaining neighbours of an eliminated vertex are not pairwise adjacent",
                )
                .with_context("vertex", vertex)
                .with_context("rank", rank)
                .with_context("pair", format!("{a}-{b}")));
            }
        }
        scratch.delete_vertex(vertex);
    }
    Ok(())
}

/// Returns whether `triangulated` is a minimal triangulation given its fill edges.
///
/// The graph must be chordal and dropping any single fill edge must break
/// chordality; for triangulations that single-edge test is equivalent to
/// inclusion-minimality.
pub fn is_minimal_triangulation(
    triangulated: &Graph,
    fill_edges: &[(VertexId, VertexId)],
) -> Result<bool, ElimError> {
    if !is_chordal(triangulated)? {
        return Ok(false);
    }
    let mut scratch = triangulated.clone();
    for (a, b) in fill_edges.iter().copied() {
        if !scratch.remove_edge(a, b) {
            continue;
        }
        let still_chordal = is_chordal(&scratch)?;
        scratch.add_edge(a, b);
        if still_chordal {
            debug!(%a, %b, "fill edge is redundant");
            return Ok(false);
        }
    }
    Ok(true)
}
