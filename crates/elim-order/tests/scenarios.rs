use elim_core::VertexId;
use elim_graph::Graph;
use elim_order::{
    fill_in, is_chordal, is_minimal_triangulation, lex_m_with_fill, lex_p, verify_elimination_game,
    RankBijection,
};

fn graph(vertices: &[u32], edges: &[(u32, u32)]) -> Graph {
    let mut graph = Graph::from_vertices(vertices.iter().copied());
    for (a, b) in edges {
        graph.add_edge(*a, *b);
    }
    graph
}

fn lex_p_fill(graph: &mut Graph) -> usize {
    let ordering = lex_p(graph).unwrap();
    let bijection = RankBijection::for_graph(graph, ordering).unwrap();
    let added = fill_in(graph, &bijection).unwrap();
    verify_elimination_game(graph, &bijection).unwrap();
    added
}

#[test]
fn chain_is_perfectly_orderable() {
    let mut chain = graph(&[1, 2, 3, 4, 5], &[(1, 2), (2, 3), (3, 4), (4, 5)]);
    assert_eq!(lex_p_fill(&mut chain), 0);
    assert_eq!(chain.edge_size(), 4);
}

#[test]
fn paper_example_identity_fill() {
    let mut paper = graph(
        &[1, 2, 3, 4, 5, 6],
        &[(1, 3), (1, 4), (2, 3), (2, 5), (3, 6), (4, 6), (5, 6)],
    );
    let bijection = RankBijection::for_graph(&paper, [1u32, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(fill_in(&mut paper, &bijection).unwrap(), 3);
    assert_eq!(paper.edge_size(), 10);
    for (a, b) in [(3u32, 4u32), (3, 5), (4, 5)] {
        assert!(paper.is_adjacent(a, b), "missing fill edge {a}-{b}");
    }
    verify_elimination_game(&paper, &bijection).unwrap();
}

#[test]
fn chorded_cycle_is_already_chordal() {
    let mut chorded = graph(
        &[1, 2, 3, 4, 5],
        &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (2, 4), (2, 5)],
    );
    assert!(is_chordal(&chorded).unwrap());
    assert_eq!(lex_p_fill(&mut chorded), 0);
}

#[test]
fn chordless_cycle_needs_fill() {
    let mut cycle = graph(&[3, 6, 1, 5, 12], &[(3, 6), (6, 1), (1, 5), (5, 12), (12, 3)]);
    assert!(!is_chordal(&cycle).unwrap());
    assert!(lex_p_fill(&mut cycle) > 0);
    assert!(is_chordal(&cycle).unwrap());
}

#[test]
fn non_perfect_ordering_fails_the_game() {
    let cycle = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)]);
    let bijection = RankBijection::for_graph(&cycle, [1u32, 2, 3, 4]).unwrap();
    let err = verify_elimination_game(&cycle, &bijection).unwrap_err();
    assert_eq!(err.code(), "elimination-not-clique");
    assert_eq!(err.info().context.get("vertex"), Some(&"1".to_string()));
    assert_eq!(err.info().context.get("pair"), Some(&"2-4".to_string()));
}

#[test]
fn lex_m_grid_example_is_minimal() {
    let original = graph(
        &[9, 8, 7, 6, 5, 4, 3, 2, 1],
        &[
            (1, 2),
            (1, 5),
            (2, 3),
            (2, 4),
            (2, 6),
            (3, 7),
            (4, 5),
            (4, 6),
            (4, 8),
            (5, 8),
            (6, 7),
            (6, 9),
            (7, 9),
            (8, 9),
        ],
    );
    let mut triangulated = original.clone();
    let outcome = lex_m_with_fill(&mut triangulated).unwrap();
    assert_eq!(
        triangulated.edge_size(),
        original.edge_size() + outcome.fill_edges.len()
    );
    for (a, b) in &outcome.fill_edges {
        assert!(!original.is_adjacent(*a, *b));
    }
    let bijection = RankBijection::for_graph(&triangulated, outcome.ordering.clone()).unwrap();
    verify_elimination_game(&triangulated, &bijection).unwrap();
    assert!(is_minimal_triangulation(&triangulated, &outcome.fill_edges).unwrap());
}

#[test]
fn lex_m_leaves_chordal_graphs_alone() {
    let mut chorded = graph(
        &[1, 2, 3, 4, 5],
        &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1), (2, 4), (2, 5)],
    );
    let outcome = lex_m_with_fill(&mut chorded).unwrap();
    assert!(outcome.fill_edges.is_empty());
    assert_eq!(chorded.edge_size(), 7);

    let mut star = graph(&[1, 2, 3, 4], &[(1, 2), (1, 3), (1, 4)]);
    let outcome = lex_m_with_fill(&mut star).unwrap();
    assert!(outcome.fill_edges.is_empty());
    assert_eq!(outcome.ordering.len(), 4);
}

#[test]
fn redundant_fill_is_not_minimal() {
    let mut cycle = graph(&[1, 2, 3, 4], &[(1, 2), (2, 3), (3, 4), (4, 1)]);
    cycle.add_edge(1u32, 3u32);
    cycle.add_edge(2u32, 4u32);
    let both = [
        (VertexId::from_raw(1), VertexId::from_raw(3)),
        (VertexId::from_raw(2), VertexId::from_raw(4)),
    ];
    assert!(is_chordal(&cycle).unwrap());
    assert!(!is_minimal_triangulation(&cycle, &both).unwrap());
    assert!(is_minimal_triangulation(&cycle, &both[..0]).unwrap());
}
