use elim_core::rng::{derive_substream_seed, RngHandle};
use elim_core::VertexId;
use elim_graph::{gen_erdos_renyi, gen_precise, EdgeCount, ErdosRenyiConfig, Graph};
use elim_order::{
    fill_in, is_chordal, is_minimal_triangulation, is_perfect_elimination_ordering,
    lex_m_with_fill, lex_p, verify_elimination_game, RankBijection,
};
use proptest::prelude::*;

const MASTER_SEED: u64 = 0x5eed;
const GRAPH_DIMENSIONS: [usize; 5] = [8, 16, 64, 256, 1024];

/// Checks that the later neighbours of every vertex are pairwise adjacent.
fn later_neighbours_form_cliques(graph: &Graph, bijection: &RankBijection) {
    for rank in 0..bijection.len() {
        let vertex = bijection.alpha(rank).unwrap();
        let later: Vec<VertexId> = graph
            .neighbors(vertex)
            .unwrap()
            .iter()
            .copied()
            .filter(|w| bijection.alpha_inverse(*w).unwrap() > rank)
            .collect();
        for a in &later {
            for b in &later {
                if a != b {
                    assert!(graph.is_adjacent(*a, *b), "{a} and {b} after {vertex}");
                }
            }
        }
    }
}

fn random_graph(seed: u64, vertices: usize, density: u8) -> Graph {
    let capacity = vertices * (vertices - 1) / 2;
    let edges = (capacity * density as usize / 100).max(vertices - 1).min(capacity);
    let config = ErdosRenyiConfig {
        vertices,
        edges: EdgeCount::Exact(edges),
        repair_connectivity: true,
    };
    gen_erdos_renyi(&config, &mut RngHandle::from_seed(seed)).unwrap()
}

proptest! {
    #[test]
    fn fill_in_produces_elimination_graph(
        seed in any::<u64>(),
        vertices in 2usize..40,
        density in 0u8..60,
        shuffle_seed in any::<u64>(),
    ) {
        let mut graph = random_graph(seed, vertices, density);
        let mut ordering: Vec<VertexId> = graph.vertices().collect();
        // arbitrary but reproducible ordering
        ordering.sort_by_key(|v| derive_substream_seed(shuffle_seed, v.as_raw() as u64));
        let bijection = RankBijection::for_graph(&graph, ordering).unwrap();

        let before = graph.edge_size();
        let added = fill_in(&mut graph, &bijection).unwrap();
        prop_assert_eq!(graph.edge_size(), before + added);
        later_neighbours_form_cliques(&graph, &bijection);
        prop_assert!(is_perfect_elimination_ordering(&graph, &bijection).unwrap());
    }

    #[test]
    fn bijection_round_trips(raw in proptest::collection::hash_set(0u32..10_000, 0..200)) {
        let ordering: Vec<u32> = raw.into_iter().collect();
        let bijection = RankBijection::new(ordering.clone()).unwrap();
        for (rank, vertex) in ordering.iter().enumerate() {
            prop_assert_eq!(bijection.alpha_inverse(*vertex).unwrap(), rank);
            prop_assert_eq!(bijection.alpha(rank).unwrap(), VertexId::from_raw(*vertex));
        }
        prop_assert!(bijection.alpha(ordering.len()).is_err());
    }

    #[test]
    fn lex_p_is_perfect_exactly_on_chordal_graphs(seed in any::<u64>(), vertices in 2usize..30, density in 0u8..100) {
        let mut graph = random_graph(seed, vertices, density);
        let before = graph.edge_size();
        let ordering = lex_p(&graph).unwrap();
        let bijection = RankBijection::for_graph(&graph, ordering).unwrap();
        let added = fill_in(&mut graph, &bijection).unwrap();
        if added == 0 {
            verify_elimination_game(&graph, &bijection).unwrap();
            prop_assert_eq!(graph.edge_size(), before);
        }
        // the filled graph is chordal, so lex-p must now find a perfect ordering
        prop_assert!(is_chordal(&graph).unwrap());
    }

    #[test]
    fn lex_m_yields_minimal_triangulation(seed in any::<u64>(), vertices in 2usize..24, density in 0u8..50) {
        let original = random_graph(seed, vertices, density);
        let mut graph = original.clone();
        let outcome = lex_m_with_fill(&mut graph).unwrap();
        prop_assert_eq!(graph.edge_size(), original.edge_size() + outcome.fill_edges.len());

        let bijection = RankBijection::for_graph(&graph, outcome.ordering.clone()).unwrap();
        prop_assert!(is_perfect_elimination_ordering(&graph, &bijection).unwrap());
        verify_elimination_game(&graph, &bijection).unwrap();
        prop_assert!(is_minimal_triangulation(&graph, &outcome.fill_edges).unwrap());
    }
}

#[test]
fn extended_fill_in_random() {
    for (idx, n) in GRAPH_DIMENSIONS.iter().enumerate() {
        let mut rng = RngHandle::substream(MASTER_SEED, idx as u64);
        let mut graph = gen_precise(*n, &mut rng).unwrap();
        let ordering: Vec<VertexId> = graph.vertices().collect();
        let bijection = RankBijection::for_graph(&graph, ordering).unwrap();
        fill_in(&mut graph, &bijection).unwrap();
        verify_elimination_game(&graph, &bijection).unwrap();
    }
}

#[test]
fn extended_lex_p_random() {
    for (idx, n) in GRAPH_DIMENSIONS.iter().enumerate() {
        let mut rng = RngHandle::substream(MASTER_SEED, 100 + idx as u64);
        let mut graph = gen_precise(*n, &mut rng).unwrap();
        let before = graph.edge_size();
        let ordering = lex_p(&graph).unwrap();
        let bijection = RankBijection::for_graph(&graph, ordering).unwrap();
        fill_in(&mut graph, &bijection).unwrap();
        if graph.edge_size() == before {
            verify_elimination_game(&graph, &bijection).unwrap();
        }
    }
}

#[test]
fn extended_lex_m_random() {
    for (idx, n) in GRAPH_DIMENSIONS.iter().enumerate() {
        let mut rng = RngHandle::substream(MASTER_SEED, 200 + idx as u64);
        let mut graph = gen_precise(*n, &mut rng).unwrap();
        let ordering = lex_m_with_fill(&mut graph).unwrap().ordering;
        let bijection = RankBijection::for_graph(&graph, ordering).unwrap();
        assert_eq!(fill_in(&mut graph, &bijection).unwrap(), 0);
        verify_elimination_game(&graph, &bijection).unwrap();
    }
}
