/// One (handle, target position) pair of a batched position apply.
pub struct PositionUpdate<'a, H> {
    pub handle: &'a mut H,
    /// Target main-axis coordinate (see `Geometry::slot_position`).
    pub position: f32,
}

/// The external collaborators of the engine, bundled behind one trait: the view factory, the
/// scroll-offset source, visibility toggling, and the batch-apply primitive.
///
/// The engine never creates or destroys visual resources itself. It asks the host to create
/// one opaque handle per pool slot at construction/reinitialization and only relabels,
/// repositions, shows, and hides those handles afterwards.
pub trait ViewHost {
    type Handle;

    /// Creates the visual handle for pool slot `slot`. Called exactly once per slot at
    /// construction/reinitialization.
    ///
    /// `group` is the slot's cosmetic cluster when grouping is enabled
    /// (`RecyclerOptions::with_group_size`); hosts are free to ignore it.
    fn create_cell(&mut self, slot: usize, group: Option<usize>) -> Self::Handle;

    /// Drops any cosmetic group containers created for a previous pool. Called at the start
    /// of reinitialization.
    fn destroy_groups(&mut self) {}

    /// Size of the viewport along the scroll axis.
    fn viewport_extent(&self) -> f32;

    /// Current scroll position along the scroll axis.
    fn scroll_offset(&self) -> f32;

    /// Moves the viewport back to the given scroll position. Used by `Recycler::reset` and
    /// reinitialization to return to the origin.
    fn set_scroll_offset(&mut self, offset: f32);

    fn set_visible(&mut self, handle: &mut Self::Handle, visible: bool);

    /// Applies every update in `batch` and returns only once all of them are in effect.
    ///
    /// The implementation may be a plain loop or fan out across worker threads/vector lanes;
    /// the engine reads resulting positions and recomputes the content extent only after this
    /// call returns.
    fn apply_positions(&mut self, batch: &mut [PositionUpdate<'_, Self::Handle>]);

    /// Informs the host of the new total scrollable extent.
    fn set_content_extent(&mut self, extent: f32);
}
