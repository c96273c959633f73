#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollDirection {
    #[default]
    None,
    Up,
    Down,
}

/// The kind of list mutation driving a batched position adjustment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ListChange {
    Insert,
    Remove,
}

/// A lightweight, serializable snapshot of the visible index window.
///
/// Invariant: `last_showed_index = current_index + items_per_viewport`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub current_index: i64,
    pub last_showed_index: i64,
}

/// A lightweight, serializable snapshot of the current scroll state.
///
/// Re-derived on every scroll notification; `direction` compares the new window index against
/// `previous_index`.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollState {
    pub previous_index: i64,
    pub current_index: i64,
    pub direction: ScrollDirection,
}

/// A read-only snapshot of one pool slot.
///
/// `logical_index` may sit outside `[0, item_count - 1]` for cells parked off the live range
/// (the trailing partial page, or spares produced by removals); those cells are hidden, not
/// errors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellState {
    pub slot: usize,
    pub logical_index: i64,
    /// Cached main-axis coordinate, as last pushed through the host's position batch.
    pub position: f32,
    /// Cosmetic group assigned at materialization time; never updated afterwards.
    pub group: Option<usize>,
}
