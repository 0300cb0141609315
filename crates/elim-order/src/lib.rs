#![deny(missing_docs)]

//! Elimination orderings and fill-in for simple undirected graphs.
//!
//! - [`fill_in`] plays the elimination game for a given ordering and adds the
//!   resulting fill edges.
//! - [`lex_p`] runs lexicographic BFS on an [`OrderedPartition`]; the ordering
//!   is perfect iff the graph is chordal.
//! - [`lex_m`] computes a minimal elimination ordering and adds the
//!   corresponding minimal fill to the graph.
//!
//! Orderings are plain `Vec<VertexId>` indexed by rank and are turned into a
//! [`RankBijection`] before being handed to [`fill_in`].

mod bijection;
mod check;
mod fill_in;
mod label_rank;
mod lex_m;
mod lex_p;
mod partition;

pub use bijection::RankBijection;
pub use check::{
    is_chordal, is_minimal_triangulation, is_perfect_elimination_ordering,
    verify_elimination_game,
};
pub use fill_in::fill_in;
pub use label_rank::{stable_label_rank, RankedLabels};
pub use lex_m::{lex_m, lex_m_with_fill, Label, LexMOutcome};
pub use lex_p::lex_p;
pub use partition::{CellId, OrderedPartition};
