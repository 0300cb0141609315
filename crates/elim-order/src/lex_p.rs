use std::collections::HashMap;

use elim_core::errors::ElimError;
use elim_core::VertexId;
use elim_graph::Graph;
use tracing::{debug, instrument, trace};

use crate::partition::{CellId, OrderedPartition};

/// Lexicographic BFS ordering (lex-P).
///
/// Returns `ordering` with `ordering[i]` the vertex of rank `i`. The first
/// vertex picked gets the highest rank. The ordering is perfect exactly when
/// [`fill_in`](crate::fill_in) adds no edge; no chordality claim is made here.
#[instrument(skip_all, fields(vertices = graph.size(), edges = graph.edge_size()))]
pub fn lex_p(graph: &Graph) -> Result<Vec<VertexId>, ElimError> {
    let n = graph.size();
    let mut partition = OrderedPartition::new(graph.vertices());
    let mut ordering = Vec::with_capacity(n);
    // old cell -> cell split off it during the current round
    let mut split: HashMap<CellId, CellId> = HashMap::new();

    for rank in (0..n).rev() {
        let released = partition.clear_empty_cells();
        let vertex = partition.get()?;
        partition.remove_definitely(vertex);
        ordering.push(vertex);

        // numbered vertices have no position left
        for neighbour in graph.neighbors(vertex)? {
            let Some(old) = partition.position(*neighbour) else {
                continue;
            };
            partition.remove(*neighbour);
            match split.get(&old).copied() {
                Some(new) => {
                    partition.add_to_cell(new, *neighbour);
                }
                None => {
                    if let Some(new) = partition.split_before(old, *neighbour) {
                        split.insert(old, new);
                    }
                }
            }
        }
        trace!(rank, %vertex, released, splits = split.len(), "numbered vertex");
        split.clear();
    }

    ordering.reverse();
    debug!(vertices = n, "lex-p ordering complete");
    Ok(ordering)
}
