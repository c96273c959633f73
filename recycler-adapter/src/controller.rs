use recycler::{ConfigError, Recycler, RecyclerOptions, RemoveError, ScrollState, ViewHost};

/// A framework-neutral controller that owns a [`ViewHost`] together with its [`Recycler`].
///
/// The core engine deliberately borrows its host per call; this wrapper is for adapters that
/// would rather hold both halves in one place and forward plain events:
/// - `on_scroll(offset)` when the UI reports a new scroll position
/// - `add_cell_at_top` / `remove_cell_at` when the data set mutates
///
/// All calls run synchronously to completion, like the engine itself.
pub struct Controller<V: ViewHost> {
    host: V,
    recycler: Recycler<V>,
}

impl<V: ViewHost> Controller<V> {
    pub fn new(options: RecyclerOptions<V::Handle>, mut host: V) -> Result<Self, ConfigError> {
        let recycler = Recycler::new(options, &mut host)?;
        Ok(Self { host, recycler })
    }

    /// Rebuilds the pool from new options (see `Recycler::reinit`). On error the previous
    /// state is left intact.
    pub fn reinit(&mut self, options: RecyclerOptions<V::Handle>) -> Result<(), ConfigError> {
        self.recycler.reinit(options, &mut self.host)
    }

    /// Call this when the UI reports a scroll offset change (e.g. wheel/drag).
    ///
    /// Writes the offset into the host, then lets the engine re-derive the window and run
    /// per-step recycling.
    pub fn on_scroll(&mut self, offset: f32) -> ScrollState {
        self.host.set_scroll_offset(offset);
        self.recycler.on_scroll_offset_changed(&mut self.host);
        self.recycler.scroll_state()
    }

    /// Call this when the scroll position changed behind the host's back (the host already
    /// knows the new offset).
    pub fn notify_scroll_changed(&mut self) -> ScrollState {
        self.recycler.on_scroll_offset_changed(&mut self.host);
        self.recycler.scroll_state()
    }

    pub fn add_cell_at_top(&mut self) {
        self.recycler.add_cell_at_top(&mut self.host);
    }

    pub fn remove_cell_at(&mut self, logical_index: i64) -> Result<(), RemoveError> {
        self.recycler.remove_cell_at(logical_index, &mut self.host)
    }

    /// Scrolls back to the origin and re-derives the window from there.
    pub fn reset(&mut self) {
        self.recycler.reset(&mut self.host);
    }

    pub fn host(&self) -> &V {
        &self.host
    }

    /// Mutable host access. Positions and visibility are owned by the engine; mutating those
    /// behind its back voids the windowing invariants.
    pub fn host_mut(&mut self) -> &mut V {
        &mut self.host
    }

    pub fn recycler(&self) -> &Recycler<V> {
        &self.recycler
    }

    pub fn into_parts(self) -> (V, Recycler<V>) {
        (self.host, self.recycler)
    }
}

impl<V: ViewHost> core::fmt::Debug for Controller<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("recycler", &self.recycler)
            .finish_non_exhaustive()
    }
}
