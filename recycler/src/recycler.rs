use alloc::vec::Vec;
use core::cmp;

use crate::error::{ConfigError, RemoveError};
use crate::geometry::Geometry;
use crate::host::{PositionUpdate, ViewHost};
use crate::options::RecyclerOptions;
use crate::pool::{Cell, CellPool};
use crate::types::{CellState, ListChange, ScrollDirection, ScrollState, Window};

/// A headless cell-recycling engine.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects, only opaque handles created by the host's view factory.
/// - The host drives it by notifying scroll-offset changes and list mutations.
/// - All visual effects go out through the [`ViewHost`] trait and the populate/clear
///   callbacks; nothing is drawn by the engine itself.
///
/// All operations run synchronously to completion on the calling thread. The only
/// parallelizable step is the host's batched position apply, which must finish before it
/// returns.
pub struct Recycler<V: ViewHost> {
    options: RecyclerOptions<V::Handle>,
    geometry: Geometry,
    items_per_viewport: usize,
    item_count: usize,
    current_index: i64,
    previous_index: i64,
    last_showed_index: i64,
    direction: ScrollDirection,
    pool: CellPool<V::Handle>,
}

impl<V: ViewHost> Recycler<V> {
    /// Builds the engine and materializes the cell pool.
    ///
    /// The pool holds `min(item_count, items_per_viewport + 4)` cells; the 4-cell surplus is
    /// the slack that avoids visible gaps during fast scrolling. Each cell is created through
    /// the host's view factory, positioned at its slot, and rendered immediately.
    ///
    /// Fails with [`ConfigError`] on invalid geometry; nothing is constructed in that case.
    pub fn new(options: RecyclerOptions<V::Handle>, host: &mut V) -> Result<Self, ConfigError> {
        let geometry = options.validate(host.viewport_extent())?;
        let items_per_viewport = geometry.items_per_viewport();
        rdebug!(
            item_count = options.item_count,
            items_per_viewport,
            "Recycler::new"
        );
        let mut recycler = Self {
            item_count: options.item_count,
            geometry,
            items_per_viewport,
            current_index: 0,
            previous_index: 0,
            last_showed_index: items_per_viewport as i64 - 1,
            direction: ScrollDirection::None,
            pool: CellPool::new(),
            options,
        };
        recycler.materialize(host);
        Ok(recycler)
    }

    /// Tears the pool down and rebuilds it from new options (the reentrant form of `new`).
    ///
    /// Destroys the host's cosmetic group containers, resets the scroll offset to the origin,
    /// and materializes a fresh pool with newly created handles. On [`ConfigError`] the prior
    /// state is left intact.
    pub fn reinit(
        &mut self,
        options: RecyclerOptions<V::Handle>,
        host: &mut V,
    ) -> Result<(), ConfigError> {
        let geometry = options.validate(host.viewport_extent())?;
        rdebug!(item_count = options.item_count, "Recycler::reinit");
        host.destroy_groups();
        self.options = options;
        self.geometry = geometry;
        self.items_per_viewport = geometry.items_per_viewport();
        self.item_count = self.options.item_count;
        self.current_index = 0;
        self.previous_index = 0;
        self.last_showed_index = self.items_per_viewport as i64 - 1;
        self.direction = ScrollDirection::None;
        self.pool = CellPool::new();
        host.set_scroll_offset(0.0);
        self.materialize(host);
        Ok(())
    }

    fn materialize(&mut self, host: &mut V) {
        host.set_content_extent(self.geometry.content_extent(self.item_count));

        let count = cmp::min(self.item_count, self.items_per_viewport + 4);
        for slot in 0..count {
            let group = (self.options.group_size > 0).then(|| slot / self.options.group_size);
            let mut handle = host.create_cell(slot, group);
            let position = self.geometry.slot_position(slot as i64);
            host.apply_positions(&mut [PositionUpdate {
                handle: &mut handle,
                position,
            }]);
            let mut cell = Cell {
                logical_index: slot as i64,
                position,
                group,
                handle,
            };
            render_into(&self.options, self.item_count, host, &mut cell);
            self.pool.push(cell);
        }
    }

    /// Notifies the engine that the viewport's scroll position changed.
    ///
    /// The current offset is read back from the host. When the window index jumps by more
    /// than one step, the recycler runs once per unit step in order, so cells hand over one
    /// at a time exactly as they would under a slow scroll.
    pub fn on_scroll_offset_changed(&mut self, host: &mut V) {
        let offset = host.scroll_offset();
        let previous = self.current_index;
        self.previous_index = previous;
        self.current_index = self.geometry.index_at_offset(offset, self.item_count);
        self.last_showed_index = self.current_index + self.items_per_viewport as i64;

        self.direction = match self.current_index.cmp(&previous) {
            cmp::Ordering::Equal => ScrollDirection::None,
            cmp::Ordering::Greater => ScrollDirection::Down,
            cmp::Ordering::Less => ScrollDirection::Up,
        };
        rtrace!(
            offset,
            previous,
            current = self.current_index,
            direction = ?self.direction,
            "on_scroll_offset_changed"
        );

        match self.direction {
            ScrollDirection::None => {}
            ScrollDirection::Down => {
                for step in previous..=self.current_index {
                    self.reuse_if_needed(host, step, ScrollDirection::Down);
                }
            }
            ScrollDirection::Up => {
                for step in (self.current_index..=previous).rev() {
                    self.reuse_if_needed(host, step, ScrollDirection::Up);
                }
            }
        }
    }

    /// Retires at most one boundary cell and re-stages it on the opposite edge.
    ///
    /// The `<= step - 2` / `>= last_showed + 2` thresholds are the slack buffer: a cell is
    /// only recycled once it sits a full cell past the visible edge, so sub-pixel or rapid
    /// scroll deltas never pop a visible cell away.
    fn reuse_if_needed(&mut self, host: &mut V, step_index: i64, direction: ScrollDirection) {
        self.last_showed_index = self.current_index + self.items_per_viewport as i64;

        let (top_index, top_position, bottom_index, bottom_position) = {
            let (Some(top), Some(bottom)) = (self.pool.first(), self.pool.last()) else {
                return;
            };
            (
                top.logical_index,
                top.position,
                bottom.logical_index,
                bottom.position,
            )
        };

        // Scrolled to the absolute end: the final page is already in place.
        if self.current_index == self.item_count as i64 - self.items_per_viewport as i64 {
            return;
        }

        match direction {
            ScrollDirection::None => {}
            ScrollDirection::Down => {
                if bottom_index >= self.item_count as i64 - 1 {
                    // Tail already materialized.
                    return;
                }
                if top_index <= step_index - 2 {
                    let position = bottom_position - self.geometry.spacing() - self.geometry.cell_extent();
                    rtrace!(step = step_index, from = top_index, to = bottom_index + 1, "recycle down");
                    if let Some(cell) = self.pool.get_mut(0) {
                        cell.logical_index = bottom_index + 1;
                        cell.position = position;
                        host.apply_positions(&mut [PositionUpdate {
                            handle: &mut cell.handle,
                            position,
                        }]);
                    }
                    self.pool.rotate_front_to_back();
                    self.render_slot(host, self.pool.len().saturating_sub(1));
                }
            }
            ScrollDirection::Up => {
                if top_index <= 0 {
                    // Head already materialized.
                    return;
                }
                if bottom_index >= self.last_showed_index + 2 {
                    let position = top_position + self.geometry.spacing() + self.geometry.cell_extent();
                    rtrace!(step = step_index, from = bottom_index, to = top_index - 1, "recycle up");
                    let slot = self.pool.len().saturating_sub(1);
                    if let Some(cell) = self.pool.get_mut(slot) {
                        cell.logical_index = top_index - 1;
                        cell.position = position;
                        host.apply_positions(&mut [PositionUpdate {
                            handle: &mut cell.handle,
                            position,
                        }]);
                    }
                    self.pool.rotate_back_to_front();
                    self.render_slot(host, 0);
                }
            }
        }
    }

    /// Inserts a new item at the head of the list.
    ///
    /// The pool's last cell (the least relevant one) is repurposed as the new head: relabeled
    /// to index 0, repositioned to slot 0, moved to the front of the sequence, and rendered.
    /// Every other live cell shifts down by one index; those repositions are applied through
    /// one batched operation before the call returns.
    pub fn add_cell_at_top(&mut self, host: &mut V) {
        if self.pool.is_empty() {
            rwarn!("add_cell_at_top: empty pool, item count updated only");
            self.item_count += 1;
            host.set_content_extent(self.geometry.content_extent(self.item_count));
            return;
        }
        rtrace!(item_count = self.item_count, "add_cell_at_top");

        let Some(mut cell) = self.pool.pop_back() else {
            return;
        };
        cell.logical_index = 0;
        let position = self.geometry.slot_position(0);
        cell.position = position;
        host.apply_positions(&mut [PositionUpdate {
            handle: &mut cell.handle,
            position,
        }]);
        self.pool.insert_front(cell);

        self.item_count += 1;
        self.render_slot(host, 0);

        self.adjust_positions(host, ListChange::Insert, 0, 0);
        host.set_content_extent(self.geometry.content_extent(self.item_count));
    }

    /// Removes the item at `target_index` from the list.
    ///
    /// The cell currently bound to that index is repurposed as a spare: parked one past the
    /// pool's maximum index (or one before its minimum when the removal happens inside the
    /// final visible page). Every cell past the removal boundary shifts up by one index via
    /// one batched reposition.
    ///
    /// Errors with [`RemoveError::IndexNotFound`] when the index is not materialized; nothing
    /// is mutated in that case.
    pub fn remove_cell_at(&mut self, target_index: i64, host: &mut V) -> Result<(), RemoveError> {
        let Some(slot) = self.pool.find_logical(target_index) else {
            rwarn!(index = target_index, "remove_cell_at: index not in pool");
            return Err(RemoveError::IndexNotFound {
                index: target_index,
            });
        };
        rtrace!(index = target_index, slot, "remove_cell_at");

        let items_per_viewport = self.items_per_viewport as i64;
        let count = self.item_count as i64;

        let repurposed_slot;
        if count <= items_per_viewport {
            // The whole list fits the viewport: park the cell past the tail as a spare for
            // future growth.
            let mut cell = self.pool.remove(slot);
            if let Some(last) = self.pool.last() {
                cell.logical_index = last.logical_index + 1;
            }
            self.pool.push(cell);
            repurposed_slot = self.pool.len().saturating_sub(1);
        } else if target_index >= count - items_per_viewport && target_index < count {
            // Removal inside the final visible page: park the cell one before the pool's
            // minimum so the page can still fill from above.
            let mut cell = self.pool.remove(slot);
            let first_index = self.pool.first().map_or(0, |first| first.logical_index);
            cell.logical_index = first_index - 1;
            self.pool.insert_front(cell);
            repurposed_slot = 0;
        } else {
            // Interior removal: park past the tail.
            let mut cell = self.pool.remove(slot);
            if let Some(last) = self.pool.last() {
                cell.logical_index = last.logical_index + 1;
            }
            self.pool.push(cell);
            repurposed_slot = self.pool.len().saturating_sub(1);
        }

        self.item_count -= 1;
        self.render_slot(host, repurposed_slot);

        self.adjust_positions(host, ListChange::Remove, target_index, repurposed_slot);
        host.set_content_extent(self.geometry.content_extent(self.item_count));
        Ok(())
    }

    /// Shifts logical indices after a mutation and applies every resulting reposition (plus
    /// the repurposed cell's) as one batch.
    ///
    /// Insert shifts every live cell except the repurposed head; cells parked at negative
    /// indices stay parked (shifting them onto index 0 would collide with the new head).
    /// Remove shifts every cell whose index lies past the removal boundary, which includes a
    /// past-the-tail repurposed cell but never a front-parked one.
    fn adjust_positions(
        &mut self,
        host: &mut V,
        change: ListChange,
        boundary: i64,
        repurposed_slot: usize,
    ) {
        let geometry = self.geometry;
        let mut batch: Vec<PositionUpdate<'_, V::Handle>> = Vec::with_capacity(self.pool.len());
        for (slot, cell) in self.pool.iter_mut().enumerate() {
            let shifted = match change {
                ListChange::Insert => slot != repurposed_slot && cell.logical_index >= boundary,
                ListChange::Remove => cell.logical_index > boundary,
            };
            if shifted {
                cell.logical_index += match change {
                    ListChange::Insert => 1,
                    ListChange::Remove => -1,
                };
            }
            let repositions =
                shifted || (matches!(change, ListChange::Remove) && slot == repurposed_slot);
            if repositions {
                let position = geometry.slot_position(cell.logical_index);
                cell.position = position;
                batch.push(PositionUpdate {
                    handle: &mut cell.handle,
                    position,
                });
            }
        }
        if !batch.is_empty() {
            host.apply_positions(&mut batch);
        }
    }

    /// Resets the viewport to the origin and re-derives the window from there.
    pub fn reset(&mut self, host: &mut V) {
        rtrace!("reset");
        host.set_scroll_offset(0.0);
        self.on_scroll_offset_changed(host);
    }

    /// Runs the render bridge for the cell at `slot`: out-of-range cells are hidden, live
    /// ones are cleared, shown, then repopulated, in exactly that order.
    fn render_slot(&mut self, host: &mut V, slot: usize) {
        let item_count = self.item_count;
        if let Some(cell) = self.pool.get_mut(slot) {
            render_into(&self.options, item_count, host, cell);
        }
    }

    pub fn options(&self) -> &RecyclerOptions<V::Handle> {
        &self.options
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Number of items currently in the logical list.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn items_per_viewport(&self) -> usize {
        self.items_per_viewport
    }

    /// Number of materialized cells. Fixed after construction.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn current_index(&self) -> i64 {
        self.current_index
    }

    pub fn last_showed_index(&self) -> i64 {
        self.last_showed_index
    }

    pub fn scroll_direction(&self) -> ScrollDirection {
        self.direction
    }

    pub fn scroll_state(&self) -> ScrollState {
        ScrollState {
            previous_index: self.previous_index,
            current_index: self.current_index,
            direction: self.direction,
        }
    }

    pub fn window(&self) -> Window {
        Window {
            current_index: self.current_index,
            last_showed_index: self.last_showed_index,
        }
    }

    pub fn content_extent(&self) -> f32 {
        self.geometry.content_extent(self.item_count)
    }

    /// Read-only access to the visual handle at `slot`, in sequence order.
    ///
    /// Mutation stays with the engine: handles change through the render bridge and the
    /// host's position batches only.
    pub fn handle(&self, slot: usize) -> Option<&V::Handle> {
        self.pool.get(slot).map(|cell| &cell.handle)
    }

    /// Iterates over the pool in sequence (top-to-bottom) order without allocations.
    pub fn for_each_cell(&self, mut f: impl FnMut(CellState)) {
        for (slot, cell) in self.pool.iter().enumerate() {
            f(CellState {
                slot,
                logical_index: cell.logical_index,
                position: cell.position,
                group: cell.group,
            });
        }
    }

    /// Collects pool snapshots into `out` (clears `out` first).
    pub fn collect_cell_states(&self, out: &mut Vec<CellState>) {
        out.clear();
        self.for_each_cell(|state| out.push(state));
    }
}

impl<V: ViewHost> core::fmt::Debug for Recycler<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recycler")
            .field("item_count", &self.item_count)
            .field("items_per_viewport", &self.items_per_viewport)
            .field("current_index", &self.current_index)
            .field("last_showed_index", &self.last_showed_index)
            .field("direction", &self.direction)
            .field("pool_len", &self.pool.len())
            .finish_non_exhaustive()
    }
}

/// The render bridge. Order is load-bearing: clear, then show, then populate. Any other
/// order can flash the previous occupant's content.
fn render_into<V: ViewHost>(
    options: &RecyclerOptions<V::Handle>,
    item_count: usize,
    host: &mut V,
    cell: &mut Cell<V::Handle>,
) {
    if cell.logical_index < 0 || cell.logical_index >= item_count as i64 {
        host.set_visible(&mut cell.handle, false);
        return;
    }
    (options.clear)(&mut cell.handle);
    host.set_visible(&mut cell.handle, true);
    (options.populate)(cell.logical_index as usize, &mut cell.handle);
}
