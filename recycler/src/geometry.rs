/// Pure viewport/cell geometry along the scroll axis.
///
/// All conversions between scroll offsets, logical indices, and cell positions live here; the
/// rest of the crate treats this as a value type and never does coordinate math inline.
///
/// Coordinate convention: content grows downward into negative coordinates
/// (`slot_position(i) = -i * pitch`) while the scroll offset grows positive as the viewport
/// moves toward the tail.
///
/// Values are assumed validated (see `RecyclerOptions::validate`): `cell_extent > 0`,
/// `spacing >= 0`, `viewport_extent > 0`, all finite.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    viewport_extent: f32,
    cell_extent: f32,
    spacing: f32,
}

impl Geometry {
    pub fn new(viewport_extent: f32, cell_extent: f32, spacing: f32) -> Self {
        Self {
            viewport_extent,
            cell_extent,
            spacing,
        }
    }

    pub fn viewport_extent(&self) -> f32 {
        self.viewport_extent
    }

    pub fn cell_extent(&self) -> f32 {
        self.cell_extent
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Distance between the starts of two adjacent cells.
    pub fn pitch(&self) -> f32 {
        self.cell_extent + self.spacing
    }

    /// How many cells a full viewport spans, rounded up.
    pub fn items_per_viewport(&self) -> usize {
        ceil_to_usize(self.viewport_extent / self.pitch())
    }

    /// Total scrollable extent for `item_count` items.
    pub fn content_extent(&self, item_count: usize) -> f32 {
        item_count as f32 * self.pitch()
    }

    /// Main-axis coordinate of the cell at `index`.
    pub fn slot_position(&self, index: i64) -> f32 {
        -(index as f32) * self.pitch()
    }

    /// Maps a scroll offset to the window's first index, clamped to
    /// `[0, max(0, item_count - items_per_viewport)]`.
    pub fn index_at_offset(&self, offset: f32, item_count: usize) -> i64 {
        let max_index = (item_count as i64 - self.items_per_viewport() as i64).max(0);
        floor_to_i64(offset / self.pitch()).clamp(0, max_index)
    }
}

// `core` has no float rounding intrinsics; these cast-truncation helpers keep the crate
// no_std-clean. Valid for finite inputs within i64 range; NaN maps to 0.

fn floor_to_i64(x: f32) -> i64 {
    let t = x as i64;
    if (t as f32) > x { t - 1 } else { t }
}

fn ceil_to_usize(x: f32) -> usize {
    if x <= 0.0 {
        return 0;
    }
    let t = x as i64;
    let c = if (t as f32) < x { t + 1 } else { t };
    c.max(0) as usize
}
