use recycler::{PositionUpdate, ViewHost};

/// The in-memory stand-in for a visual cell: what a real host would draw, as plain data.
///
/// The populate/clear callbacks conventionally write into `item`; `position` and `visible`
/// are maintained by the engine through the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemorySlot {
    pub position: f32,
    pub visible: bool,
    pub item: Option<usize>,
    pub group: Option<usize>,
}

/// An in-memory [`ViewHost`].
///
/// Useful for driving the engine in simulations and adapter tests, and as a template for real
/// host implementations: it records everything the engine pushes out (content extent, batch
/// activity, group teardown) without touching any UI.
#[derive(Clone, Debug, Default)]
pub struct MemoryHost {
    viewport_extent: f32,
    scroll_offset: f32,
    content_extent: f32,
    created_cells: usize,
    batches_applied: usize,
    positions_applied: usize,
    groups_destroyed: usize,
}

impl MemoryHost {
    pub fn new(viewport_extent: f32) -> Self {
        Self {
            viewport_extent,
            ..Self::default()
        }
    }

    /// Total scrollable extent, as last pushed by the engine.
    pub fn content_extent(&self) -> f32 {
        self.content_extent
    }

    /// Handles created so far (cumulative across reinitializations).
    pub fn created_cells(&self) -> usize {
        self.created_cells
    }

    /// Number of `apply_positions` calls received.
    pub fn batches_applied(&self) -> usize {
        self.batches_applied
    }

    /// Number of individual position updates applied across all batches.
    pub fn positions_applied(&self) -> usize {
        self.positions_applied
    }

    pub fn groups_destroyed(&self) -> usize {
        self.groups_destroyed
    }
}

impl ViewHost for MemoryHost {
    type Handle = MemorySlot;

    fn create_cell(&mut self, _slot: usize, group: Option<usize>) -> MemorySlot {
        self.created_cells += 1;
        MemorySlot {
            group,
            ..MemorySlot::default()
        }
    }

    fn destroy_groups(&mut self) {
        self.groups_destroyed += 1;
    }

    fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset;
    }

    fn set_visible(&mut self, handle: &mut MemorySlot, visible: bool) {
        handle.visible = visible;
    }

    fn apply_positions(&mut self, batch: &mut [PositionUpdate<'_, MemorySlot>]) {
        self.batches_applied += 1;
        for update in batch.iter_mut() {
            self.positions_applied += 1;
            update.handle.position = update.position;
        }
    }

    fn set_content_extent(&mut self, extent: f32) {
        self.content_extent = extent;
    }
}
