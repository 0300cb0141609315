#![deny(missing_docs)]

//! Simple undirected graphs for elimination orderings, plus seeded random generators.

mod flags;
mod generators;
mod graph;
mod ids;

pub use flags::{EdgeCount, ErdosRenyiConfig};
pub use generators::{gen_erdos_renyi, gen_precise};
pub use graph::Graph;
