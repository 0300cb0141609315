//! Ordered partition of unnumbered vertices, refined by lexicographic BFS.
//!
//! Cells live in an arena and are addressed by [`CellId`] handles. They are
//! linked from the head (highest class) towards the tail. A cell emptied by a
//! removal stays linked, so a split later in the same round can still be
//! placed relative to it; [`OrderedPartition::clear_empty_cells`] unlinks the
//! empty cells in one batch and releases their handles for reuse.

use std::collections::{BTreeSet, HashMap};

use elim_core::errors::ElimError;
use elim_core::VertexId;

/// Stable handle of a cell inside an [`OrderedPartition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(usize);

impl CellId {
    /// Returns the arena slot of the cell.
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default)]
struct Cell {
    members: BTreeSet<VertexId>,
    /// Neighbour towards the head.
    ahead: Option<CellId>,
    /// Neighbour towards the tail.
    behind: Option<CellId>,
    live: bool,
}

/// Doubly linked sequence of vertex cells with a reverse index.
#[derive(Debug, Clone, Default)]
pub struct OrderedPartition {
    cells: Vec<Cell>,
    free: Vec<CellId>,
    head: Option<CellId>,
    positions: HashMap<VertexId, CellId>,
    pending_cleanup: Vec<CellId>,
}

impl OrderedPartition {
    /// Places every vertex in a single initial cell.
    pub fn new<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = VertexId>,
    {
        let mut partition = Self::default();
        let members: BTreeSet<VertexId> = vertices.into_iter().collect();
        if members.is_empty() {
            return partition;
        }
        let id = partition.allocate();
        for vertex in &members {
            partition.positions.insert(*vertex, id);
        }
        partition.cells[id.0].members = members;
        partition.head = Some(id);
        partition
    }

    /// Returns a vertex of the highest non-empty cell.
    ///
    /// Any member of that cell is a valid answer; the smallest identifier is
    /// returned so runs are reproducible.
    pub fn get(&self) -> Result<VertexId, ElimError> {
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let cell = &self.cells[id.0];
            if let Some(vertex) = cell.members.first() {
                return Ok(*vertex);
            }
            cursor = cell.behind;
        }
        Err(ElimError::partition(
            "empty-partition",
            "partition holds no unnumbered vertex",
        ))
    }

    /// Takes a vertex out of its cell but keeps its reverse-index entry.
    ///
    /// A cell left empty is queued for the next cleanup pass.
    pub fn remove(&mut self, vertex: VertexId) {
        let Some(id) = self.positions.get(&vertex).copied() else {
            return;
        };
        let cell = &mut self.cells[id.0];
        if cell.members.remove(&vertex) && cell.members.is_empty() {
            self.pending_cleanup.push(id);
        }
    }

    /// Takes a vertex out of the partition for good.
    pub fn remove_definitely(&mut self, vertex: VertexId) {
        self.remove(vertex);
        self.positions.remove(&vertex);
    }

    /// Cell currently owning `vertex`, `None` once it has been removed for good.
    pub fn position(&self, vertex: VertexId) -> Option<CellId> {
        self.positions.get(&vertex).copied()
    }

    /// Moves a known vertex into `cell`.
    ///
    /// Returns `false` when the vertex is not indexed or the handle was released.
    pub fn add_to_cell(&mut self, cell: CellId, vertex: VertexId) -> bool {
        if !self.positions.contains_key(&vertex) || !self.is_live(cell) {
            return false;
        }
        self.remove(vertex);
        self.cells[cell.0].members.insert(vertex);
        self.positions.insert(vertex, cell);
        true
    }

    /// Creates a cell immediately ahead of `previous` and moves `vertex` into it.
    pub fn split_before(&mut self, previous: CellId, vertex: VertexId) -> Option<CellId> {
        if !self.positions.contains_key(&vertex) || !self.is_live(previous) {
            return None;
        }
        let id = self.allocate();
        let ahead = self.cells[previous.0].ahead;
        self.cells[id.0].ahead = ahead;
        self.cells[id.0].behind = Some(previous);
        match ahead {
            Some(ahead) => self.cells[ahead.0].behind = Some(id),
            None => self.head = Some(id),
        }
        self.cells[previous.0].ahead = Some(id);
        self.add_to_cell(id, vertex);
        Some(id)
    }

    /// Unlinks every cell emptied since the last pass and releases its handle.
    ///
    /// Returns the number of cells released.
    pub fn clear_empty_cells(&mut self) -> usize {
        let mut released = 0;
        for id in std::mem::take(&mut self.pending_cleanup) {
            let cell = &self.cells[id.0];
            if !cell.live || !cell.members.is_empty() {
                continue;
            }
            let (ahead, behind) = (cell.ahead, cell.behind);
            match ahead {
                Some(ahead_id) => self.cells[ahead_id.0].behind = behind,
                None => self.head = behind,
            }
            if let Some(behind_id) = behind {
                self.cells[behind_id.0].ahead = ahead;
            }
            self.cells[id.0] = Cell::default();
            self.free.push(id);
            released += 1;
        }
        released
    }

    /// Number of vertices still indexed.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether no vertex is indexed.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Number of linked cells, including emptied cells awaiting cleanup.
    pub fn cell_count(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            count += 1;
            cursor = self.cells[id.0].behind;
        }
        count
    }

    /// Members of the non-empty cells, from the head to the tail.
    pub fn classes(&self) -> Vec<Vec<VertexId>> {
        let mut classes = Vec::new();
        let mut cursor = self.head;
        while let Some(id) = cursor {
            let cell = &self.cells[id.0];
            if !cell.members.is_empty() {
                classes.push(cell.members.iter().copied().collect());
            }
            cursor = cell.behind;
        }
        classes
    }

    fn is_live(&self, id: CellId) -> bool {
        self.cells.get(id.0).is_some_and(|cell| cell.live)
    }

    fn allocate(&mut self) -> CellId {
        let fresh = Cell {
            live: true,
            ..Cell::default()
        };
        match self.free.pop() {
            Some(id) => {
                self.cells[id.0] = fresh;
                id
            }
            None => {
                self.cells.push(fresh);
                CellId(self.cells.len() - 1)
            }
        }
    }
}
