use alloc::vec::Vec;

/// One reusable pool slot: an opaque visual handle plus the logical index it currently
/// represents. The handle is created once and lives as long as the pool; only the index,
/// cached position, and visibility change.
pub(crate) struct Cell<H> {
    pub(crate) logical_index: i64,
    pub(crate) position: f32,
    pub(crate) group: Option<usize>,
    pub(crate) handle: H,
}

/// The ordered cell sequence. Sequence order corresponds to on-screen top-to-bottom order at
/// all times except during the brief reassignment inside a recycle/mutation step.
///
/// The pool's size is fixed at construction; mutations move cells around, never add or drop
/// them.
pub(crate) struct CellPool<H> {
    cells: Vec<Cell<H>>,
}

impl<H> CellPool<H> {
    pub(crate) fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub(crate) fn push(&mut self, cell: Cell<H>) {
        self.cells.push(cell);
    }

    pub(crate) fn first(&self) -> Option<&Cell<H>> {
        self.cells.first()
    }

    pub(crate) fn last(&self) -> Option<&Cell<H>> {
        self.cells.last()
    }

    pub(crate) fn get(&self, slot: usize) -> Option<&Cell<H>> {
        self.cells.get(slot)
    }

    pub(crate) fn get_mut(&mut self, slot: usize) -> Option<&mut Cell<H>> {
        self.cells.get_mut(slot)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Cell<H>> {
        self.cells.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell<H>> {
        self.cells.iter_mut()
    }

    /// Bounded scan for the cell currently bound to `logical_index`.
    pub(crate) fn find_logical(&self, logical_index: i64) -> Option<usize> {
        self.cells
            .iter()
            .position(|cell| cell.logical_index == logical_index)
    }

    pub(crate) fn remove(&mut self, slot: usize) -> Cell<H> {
        self.cells.remove(slot)
    }

    pub(crate) fn pop_back(&mut self) -> Option<Cell<H>> {
        self.cells.pop()
    }

    pub(crate) fn insert_front(&mut self, cell: Cell<H>) {
        self.cells.insert(0, cell);
    }

    pub(crate) fn rotate_front_to_back(&mut self) {
        if !self.cells.is_empty() {
            let cell = self.cells.remove(0);
            self.cells.push(cell);
        }
    }

    pub(crate) fn rotate_back_to_front(&mut self) {
        if let Some(cell) = self.cells.pop() {
            self.cells.insert(0, cell);
        }
    }
}
