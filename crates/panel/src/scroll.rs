//! Row-unit scroll state machine and scrollbar geometry.

use crate::layout::{ROW_HEIGHT, VIEWPORT_HEIGHT};

/// Smallest handle the scrollbar will draw, in panel units.
pub const MIN_HANDLE_HEIGHT: f32 = 20.0;

/// Scroll position of the panel, measured in rows.
///
/// Rows are the scroll unit throughout; pixels appear only at the paint
/// boundary via [`ScrollState::offset_px`]. The state machine is `Idle`
/// (`dragging == false`) or `Dragging`, and every operation clamps - there
/// is no error path here. Invariant: `0 <= offset_rows <= max_offset_rows`,
/// and content that fits the viewport pins the offset to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollState {
    offset_rows: f32,
    dragging: bool,
    can_scroll: bool,
    max_offset_rows: f32,
}

impl ScrollState {
    /// Fresh state: offset 0, idle, nothing to scroll.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset in rows (fractional).
    pub fn offset_rows(&self) -> f32 {
        self.offset_rows
    }

    /// Current offset converted to panel units for painting.
    pub fn offset_px(&self) -> f32 {
        self.offset_rows * ROW_HEIGHT
    }

    /// Whether a scrollbar drag is in progress.
    pub fn dragging(&self) -> bool {
        self.dragging
    }

    /// Whether the content overflows the viewport at all.
    pub fn can_scroll(&self) -> bool {
        self.can_scroll
    }

    /// Largest legal offset for the current content, in rows.
    pub fn max_offset_rows(&self) -> f32 {
        self.max_offset_rows
    }

    /// Re-derive scroll limits after the content or viewport changed.
    ///
    /// Must run after every filter or catalog change, before the next paint
    /// or hit-test, so the offset invariant holds for the frame.
    pub fn on_content_changed(&mut self, total_content_height: f32, viewport_height: f32) {
        self.can_scroll = total_content_height > viewport_height;
        if !self.can_scroll {
            // Content fits: offset pinned to 0, and any drag in flight ends.
            self.offset_rows = 0.0;
            self.max_offset_rows = 0.0;
            self.dragging = false;
            return;
        }
        self.max_offset_rows = (total_content_height - viewport_height) / ROW_HEIGHT;
        self.offset_rows = self.offset_rows.clamp(0.0, self.max_offset_rows);
    }

    /// Scroll by `delta_rows` (positive scrolls down the list). Ignored
    /// while dragging; the result is clamped, never rejected.
    pub fn on_wheel(&mut self, delta_rows: f32) {
        if self.dragging || !self.can_scroll {
            return;
        }
        self.offset_rows = (self.offset_rows + delta_rows).clamp(0.0, self.max_offset_rows);
    }

    /// Enter the dragging state. No-op when there is nothing to scroll.
    pub fn begin_drag(&mut self) {
        if self.can_scroll {
            self.dragging = true;
        }
    }

    /// Leave the dragging state.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Track a drag to a normalized position along the usable track.
    ///
    /// Only meaningful while dragging. The fraction is clamped to `[0, 1]`
    /// first, so pointer overshoot past either end of the track holds the
    /// offset at the boundary; the mapped offset snaps to whole rows.
    pub fn drag_to(&mut self, fraction: f32) {
        if !self.dragging {
            return;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.offset_rows = (fraction * self.max_offset_rows)
            .round()
            .clamp(0.0, self.max_offset_rows);
    }

    /// A changed query invalidates any spatial memory of the list: the
    /// offset resets to the top unconditionally.
    pub fn on_filter_changed(&mut self) {
        self.offset_rows = 0.0;
    }
}

/// Where the scrollbar handle sits and how tall it is, in panel units
/// relative to the track top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollbarGeometry {
    /// Height of the draggable handle.
    pub handle_height: f32,
    /// Handle top, measured from the track top.
    pub handle_top: f32,
    track_height: f32,
}

impl ScrollbarGeometry {
    /// Compute the handle for the current state, or `None` when the content
    /// fits and no scrollbar is drawn.
    ///
    /// The track spans the viewport. Handle height scales with the visible
    /// share of the content but never shrinks below [`MIN_HANDLE_HEIGHT`];
    /// its travel covers the usable track (track minus handle).
    pub fn compute(
        scroll: &ScrollState,
        total_content_height: f32,
        viewport_height: f32,
    ) -> Option<Self> {
        if !scroll.can_scroll() || total_content_height <= viewport_height {
            return None;
        }
        let track_height = viewport_height;
        let handle_height =
            (track_height * viewport_height / total_content_height).max(MIN_HANDLE_HEIGHT);
        let usable = track_height - handle_height;
        let fraction = if scroll.max_offset_rows() > 0.0 {
            scroll.offset_rows() / scroll.max_offset_rows()
        } else {
            0.0
        };
        Some(Self {
            handle_height,
            handle_top: usable * fraction,
            track_height,
        })
    }

    /// Compute with the standard viewport height.
    pub fn for_panel(scroll: &ScrollState, total_content_height: f32) -> Option<Self> {
        Self::compute(scroll, total_content_height, VIEWPORT_HEIGHT)
    }

    /// Map a pointer y (relative to the track top) to the normalized track
    /// fraction [`ScrollState::drag_to`] expects.
    pub fn fraction_for_pointer(&self, pointer_y: f32) -> f32 {
        let usable = self.track_height - self.handle_height;
        if usable <= 0.0 {
            return 0.0;
        }
        (pointer_y / usable).clamp(0.0, 1.0)
    }
}
