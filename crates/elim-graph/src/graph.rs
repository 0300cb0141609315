use std::collections::{BTreeSet, HashSet};

use elim_core::errors::ElimError;
use elim_core::VertexId;
use indexmap::IndexMap;
use tracing::debug;

use crate::ids::canonical_pair;

/// Simple undirected graph with a symmetric adjacency relation.
///
/// Vertices keep their insertion order, adjacency sets are sorted so every
/// traversal is reproducible. Self-loops, parallel edges and edges touching an
/// absent vertex are silently ignored: the graph stays simple no matter what
/// the caller feeds it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: IndexMap<VertexId, BTreeSet<VertexId>>,
    num_edges: usize,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph holding the provided vertices and no edges.
    pub fn from_vertices<I, V>(vertices: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<VertexId>,
    {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Creates a graph from a vertex list and parallel source/destination arrays.
    ///
    /// When the two edge arrays differ in length no edge is added.
    pub fn from_parts<V>(vertices: &[V], sources: &[V], destinations: &[V]) -> Self
    where
        V: Into<VertexId> + Copy,
    {
        let mut graph = Self::from_vertices(vertices.iter().copied());
        if sources.len() == destinations.len() {
            for (src, dst) in sources.iter().zip(destinations) {
                graph.add_edge(*src, *dst);
            }
        }
        graph
    }

    /// Inserts a vertex. Returns `false` when it was already present.
    pub fn add_vertex(&mut self, vertex: impl Into<VertexId>) -> bool {
        let vertex = vertex.into();
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeSet::new());
        true
    }

    /// Inserts the undirected edge `{first, second}`.
    ///
    /// Returns `true` only when a new edge was created.
    pub fn add_edge(&mut self, first: impl Into<VertexId>, second: impl Into<VertexId>) -> bool {
        let (first, second) = (first.into(), second.into());
        if first == second || !self.contains(first) || !self.contains(second) {
            return false;
        }
        if self.is_adjacent(first, second) || self.is_adjacent(second, first) {
            return false;
        }
        if let Some(set) = self.adjacency.get_mut(&first) {
            set.insert(second);
        }
        if let Some(set) = self.adjacency.get_mut(&second) {
            set.insert(first);
        }
        self.num_edges += 1;
        true
    }

    /// Removes the undirected edge `{first, second}`. Returns `false` when absent.
    pub fn remove_edge(&mut self, first: impl Into<VertexId>, second: impl Into<VertexId>) -> bool {
        let (first, second) = (first.into(), second.into());
        let removed = self
            .adjacency
            .get_mut(&first)
            .is_some_and(|set| set.remove(&second));
        if !removed {
            return false;
        }
        if let Some(set) = self.adjacency.get_mut(&second) {
            set.remove(&first);
        }
        self.num_edges -= 1;
        true
    }

    /// Number of vertices.
    pub fn size(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_size(&self) -> usize {
        self.num_edges
    }

    /// Returns whether the graph has no vertex.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns whether the vertex belongs to the graph.
    pub fn contains(&self, vertex: impl Into<VertexId>) -> bool {
        self.adjacency.contains_key(&vertex.into())
    }

    /// Returns whether `second` appears in the adjacency set of `first`.
    pub fn is_adjacent(&self, first: impl Into<VertexId>, second: impl Into<VertexId>) -> bool {
        let second = second.into();
        self.adjacency
            .get(&first.into())
            .is_some_and(|set| set.contains(&second))
    }

    /// Returns the sorted neighbourhood of a vertex.
    pub fn neighbors(&self, vertex: impl Into<VertexId>) -> Result<&BTreeSet<VertexId>, ElimError> {
        let vertex = vertex.into();
        self.adjacency.get(&vertex).ok_or_else(|| unknown_vertex(vertex))
    }

    /// Returns the degree of a vertex.
    pub fn degree(&self, vertex: impl Into<VertexId>) -> Result<usize, ElimError> {
        Ok(self.neighbors(vertex)?.len())
    }

    /// Iterates over the vertices in insertion order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterates over every edge once, as `(smaller, larger)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency.iter().flat_map(|(vertex, set)| {
            set.iter()
                .filter(move |other| *other > vertex)
                .map(move |other| canonical_pair(*vertex, *other))
        })
    }

    /// Checks that every vertex is reachable from the first inserted one.
    ///
    /// Uses an explicit stack, so the depth of the graph never reaches the call stack.
    pub fn is_connected(&self) -> bool {
        let Some(start) = self.adjacency.keys().next().copied() else {
            return true;
        };
        let mut visited: HashSet<VertexId> = HashSet::with_capacity(self.size());
        let mut stack = vec![start];
        visited.insert(start);
        while let Some(vertex) = stack.pop() {
            if let Some(set) = self.adjacency.get(&vertex) {
                for neighbour in set {
                    if visited.insert(*neighbour) {
                        stack.push(*neighbour);
                    }
                }
            }
        }
        visited.len() == self.size()
    }

    /// Links every vertex to its successor in insertion order.
    ///
    /// Repair step for generated graphs that came out disconnected. Returns
    /// the number of edges added.
    pub fn connect(&mut self) -> usize {
        let order: Vec<VertexId> = self.vertices().collect();
        let added = order
            .windows(2)
            .filter(|pair| self.add_edge(pair[0], pair[1]))
            .count();
        debug!(vertices = order.len(), added, "connected graph along insertion order");
        added
    }

    /// Removes a vertex with all its incident edges.
    ///
    /// Returns `false` when the vertex was absent.
    pub fn delete_vertex(&mut self, vertex: impl Into<VertexId>) -> bool {
        let vertex = vertex.into();
        let Some(neighbours) = self.adjacency.shift_remove(&vertex) else {
            return false;
        };
        for neighbour in &neighbours {
            if let Some(set) = self.adjacency.get_mut(neighbour) {
                set.remove(&vertex);
            }
        }
        self.num_edges -= neighbours.len();
        true
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.num_edges = 0;
    }
}

fn unknown_vertex(vertex: VertexId) -> ElimError {
    ElimError::graph("unknown-vertex", "vertex does not exist").with_context("vertex", vertex)
}
