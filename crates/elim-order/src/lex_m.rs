use std::collections::{HashMap, HashSet, VecDeque};

use elim_core::errors::ElimError;
use elim_core::VertexId;
use elim_graph::Graph;
use tracing::{debug, instrument, trace};

use crate::label_rank::stable_label_rank;

/// Lex-M label: an integer tier plus the number of half-step bumps received
/// during the current round. Ordered lexicographically, so a bumped vertex
/// sits strictly between its tier and the next one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label {
    tier: u32,
    bumps: u32,
}

impl Label {
    /// Label of an untouched vertex in `tier`.
    pub const fn new(tier: u32) -> Self {
        Self { tier, bumps: 0 }
    }

    /// Dense integer tier.
    pub fn tier(&self) -> u32 {
        self.tier
    }

    /// Half-step bumps received this round.
    pub fn bumps(&self) -> u32 {
        self.bumps
    }

    fn bump(&mut self) {
        self.bumps += 1;
    }
}

/// Ordering and fill produced by [`lex_m_with_fill`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexMOutcome {
    /// `ordering[i]` is the vertex of rank `i`.
    pub ordering: Vec<VertexId>,
    /// Edges added to the graph, as `(smaller, larger)` pairs in discovery order.
    pub fill_edges: Vec<(VertexId, VertexId)>,
}

/// Minimal elimination ordering (lex-M), adding the fill edges to `graph`.
///
/// The returned ordering is a perfect elimination ordering of the mutated graph.
pub fn lex_m(graph: &mut Graph) -> Result<Vec<VertexId>, ElimError> {
    Ok(lex_m_with_fill(graph)?.ordering)
}

/// Same as [`lex_m`], also reporting which edges were added.
///
/// Each round numbers an unnumbered vertex `v` of maximum label, then searches
/// from `v` through unnumbered vertices tier by tier. A vertex `z` reached from
/// tier `j` with `tier(z) > j` has a path to `v` through strictly lower labels,
/// so `{v, z}` is a fill edge and `z` is bumped. The surviving labels are then
/// re-quantised into dense tiers.
#[instrument(skip_all, fields(vertices = graph.size(), edges = graph.edge_size()))]
pub fn lex_m_with_fill(graph: &mut Graph) -> Result<LexMOutcome, ElimError> {
    let n = graph.size();
    let mut labels: HashMap<VertexId, Label> =
        graph.vertices().map(|vertex| (vertex, Label::new(1))).collect();
    // unnumbered vertices, highest label first
    let mut unnumbered: VecDeque<VertexId> = graph.vertices().collect();
    let mut numbered: HashSet<VertexId> = HashSet::with_capacity(n);
    let mut tiers = 1usize;
    let mut ordering = Vec::with_capacity(n);
    let mut fill_edges = Vec::new();

    let mut reached: HashSet<VertexId> = HashSet::new();
    let mut round_fill: Vec<VertexId> = Vec::new();

    while let Some(vertex) = unnumbered.pop_front() {
        let rank = unnumbered.len();
        numbered.insert(vertex);
        labels.remove(&vertex);
        ordering.push(vertex);

        reached.clear();
        round_fill.clear();
        let mut reach: Vec<VecDeque<VertexId>> = vec![VecDeque::new(); tiers + 1];

        // neighbours already share an edge with `vertex`
        for neighbour in graph.neighbors(vertex)? {
            if numbered.contains(neighbour) {
                continue;
            }
            let Some(label) = labels.get_mut(neighbour) else {
                continue;
            };
            reach[label.tier as usize].push_back(*neighbour);
            reached.insert(*neighbour);
            label.bump();
        }

        for tier in 1..=tiers {
            while let Some(current) = reach[tier].pop_front() {
                for candidate in graph.neighbors(current)? {
                    if numbered.contains(candidate) || !reached.insert(*candidate) {
                        continue;
                    }
                    let Some(label) = labels.get_mut(candidate) else {
                        continue;
                    };
                    if label.tier as usize > tier {
                        reach[label.tier as usize].push_back(*candidate);
                        label.bump();
                        round_fill.push(*candidate);
                    } else {
                        reach[tier].push_back(*candidate);
                    }
                }
            }
        }

        for other in round_fill.iter().copied() {
            if graph.add_edge(vertex, other) {
                fill_edges.push(ordered_pair(vertex, other));
            }
        }

        let remaining: Vec<(VertexId, Label)> = unnumbered
            .iter()
            .filter_map(|u| labels.get(u).map(|label| (*u, *label)))
            .collect();
        let ranked = stable_label_rank(remaining);
        tiers = ranked.tiers.max(1);
        unnumbered.clear();
        for (u, tier) in ranked.entries {
            unnumbered.push_back(u);
            labels.insert(u, Label::new(tier));
        }
        trace!(rank, %vertex, fill = round_fill.len(), tiers, "numbered vertex");
    }

    ordering.reverse();
    debug!(vertices = n, fill = fill_edges.len(), "lex-m ordering complete");
    Ok(LexMOutcome {
        ordering,
        fill_edges,
    })
}

fn ordered_pair(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
