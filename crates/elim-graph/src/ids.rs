use elim_core::VertexId;

/// Creates a [`VertexId`] from a dense index.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u32)
}

/// Orders the endpoints of an undirected edge.
pub(crate) fn canonical_pair(a: VertexId, b: VertexId) -> (VertexId, VertexId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Decodes the `index`-th pair `(i, j)` with `i < j` of the upper triangle on `n` vertices.
///
/// Pairs are enumerated row by row: `(0,1), (0,2), .., (0,n-1), (1,2), ..`.
pub(crate) fn pair_from_index(n: usize, mut index: usize) -> (usize, usize) {
    let mut row = 0;
    let mut row_len = n - 1;
    while index >= row_len {
        index -= row_len;
        row += 1;
        row_len -= 1;
    }
    (row, row + 1 + index)
}

/// Number of distinct unordered pairs on `n` vertices.
pub(crate) fn max_edges(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
