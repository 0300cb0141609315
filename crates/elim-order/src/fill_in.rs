use elim_core::errors::ElimError;
use elim_graph::Graph;
use tracing::{debug, instrument};

use crate::bijection::RankBijection;

/// Adds the fill-in edges of the elimination game played in rank order.
///
/// For every vertex `v` (except the last ranked) the earliest later neighbour
/// `m(v)` becomes adjacent to all other later neighbours of `v`. Afterwards the
/// later neighbours of each vertex are pairwise adjacent. Returns the number of
/// edges added.
#[instrument(skip_all, fields(vertices = graph.size(), edges = graph.edge_size()))]
pub fn fill_in(graph: &mut Graph, bijection: &RankBijection) -> Result<usize, ElimError> {
    bijection.ensure_covers(graph)?;
    let before = graph.edge_size();
    let mut later: Vec<usize> = Vec::new();
    for rank in 0..graph.size().saturating_sub(1) {
        let vertex = bijection.alpha(rank)?;
        later.clear();
        for neighbour in graph.neighbors(vertex)? {
            let neighbour_rank = bijection.alpha_inverse(*neighbour)?;
            if neighbour_rank > rank {
                later.push(neighbour_rank);
            }
        }
        let Some(parent_rank) = later.iter().min().copied() else {
            continue;
        };
        let parent = bijection.alpha(parent_rank)?;
        for other in later.iter().copied().filter(|r| *r > parent_rank) {
            graph.add_edge(parent, bijection.alpha(other)?);
        }
    }
    let added = graph.edge_size() - before;
    debug!(added, "fill-in complete");
    Ok(added)
}
