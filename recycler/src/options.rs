use alloc::sync::Arc;

use crate::error::ConfigError;
use crate::geometry::Geometry;

/// Fills a cell's visual handle with the content of the item at the given logical index.
///
/// Invoked by the render bridge after the handle has been cleared and shown.
pub type PopulateCallback<H> = Arc<dyn Fn(usize, &mut H) + Send + Sync>;

/// Erases stale content/state left behind by a handle's previous occupant.
///
/// Invoked by the render bridge before a handle is shown and repopulated.
pub type ClearCallback<H> = Arc<dyn Fn(&mut H) + Send + Sync>;

/// Configuration for [`crate::Recycler`].
///
/// Cheap to clone: the populate/clear callbacks are stored in `Arc`s.
pub struct RecyclerOptions<H> {
    /// Number of items in the logical list at construction.
    pub item_count: usize,
    /// Size of one cell along the scroll axis.
    pub cell_extent: f32,
    /// Space between adjacent cells.
    pub spacing: f32,
    /// Cosmetic grouping: cluster this many cells under one parent container at
    /// materialization time. `0` disables grouping. Group membership is purely visual and is
    /// never updated by recycling or mutations.
    pub group_size: usize,
    pub populate: PopulateCallback<H>,
    pub clear: ClearCallback<H>,
}

impl<H> RecyclerOptions<H> {
    /// Creates options for a list of `item_count` items.
    ///
    /// `populate(i, handle)` draws item `i` into a handle; `clear(handle)` erases whatever the
    /// handle showed before. Both are called by the engine's render bridge, never by the host.
    pub fn new(
        item_count: usize,
        cell_extent: f32,
        spacing: f32,
        populate: impl Fn(usize, &mut H) + Send + Sync + 'static,
        clear: impl Fn(&mut H) + Send + Sync + 'static,
    ) -> Self {
        Self {
            item_count,
            cell_extent,
            spacing,
            group_size: 0,
            populate: Arc::new(populate),
            clear: Arc::new(clear),
        }
    }

    pub fn with_item_count(mut self, item_count: usize) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    pub fn with_populate(mut self, populate: impl Fn(usize, &mut H) + Send + Sync + 'static) -> Self {
        self.populate = Arc::new(populate);
        self
    }

    pub fn with_clear(mut self, clear: impl Fn(&mut H) + Send + Sync + 'static) -> Self {
        self.clear = Arc::new(clear);
        self
    }

    /// Validates the configuration against the host's viewport and returns the derived
    /// geometry.
    pub(crate) fn validate(&self, viewport_extent: f32) -> Result<Geometry, ConfigError> {
        if !(self.cell_extent.is_finite() && self.cell_extent > 0.0) {
            return Err(ConfigError::NonPositiveCellExtent);
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(ConfigError::NegativeSpacing);
        }
        if !(viewport_extent.is_finite() && viewport_extent > 0.0) {
            return Err(ConfigError::NonPositiveViewport);
        }
        Ok(Geometry::new(viewport_extent, self.cell_extent, self.spacing))
    }
}

impl<H> Clone for RecyclerOptions<H> {
    fn clone(&self) -> Self {
        Self {
            item_count: self.item_count,
            cell_extent: self.cell_extent,
            spacing: self.spacing,
            group_size: self.group_size,
            populate: Arc::clone(&self.populate),
            clear: Arc::clone(&self.clear),
        }
    }
}

impl<H> core::fmt::Debug for RecyclerOptions<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RecyclerOptions")
            .field("item_count", &self.item_count)
            .field("cell_extent", &self.cell_extent)
            .field("spacing", &self.spacing)
            .field("group_size", &self.group_size)
            .finish_non_exhaustive()
    }
}
