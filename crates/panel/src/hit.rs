//! Pointer-to-row resolution.

use brewguide_core::{Category, Recipe};

use crate::content::PanelContent;
use crate::layout::{self, RowKind, CONTENT_WIDTH, ROW_HEIGHT, VIEWPORT_HEIGHT};
use crate::scroll::ScrollState;

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hit {
    /// A category header row.
    Header(Category),
    /// A recipe row.
    Recipe(Recipe),
    /// Nothing interactive.
    Miss,
}

/// Resolve a pointer against the panel whose top-left corner sits at
/// `(panel_x, panel_y)`.
///
/// Replays the exact [`layout::rows`] walk the painter uses, shifted by the
/// current scroll offset, and returns the first row whose span
/// `[top, top + ROW_HEIGHT)` contains the pointer. The scrollbar gutter is
/// not part of the clickable area, and a pointer outside the viewport can
/// hit nothing; rows scrolled out of view are walked but never match.
/// Pointers in the spacing gaps between sections fall through to `Miss`.
pub fn resolve(
    content: &PanelContent,
    scroll: &ScrollState,
    panel_x: f32,
    panel_y: f32,
    pointer_x: f32,
    pointer_y: f32,
) -> Hit {
    if pointer_x < panel_x || pointer_x >= panel_x + CONTENT_WIDTH {
        return Hit::Miss;
    }
    if pointer_y < panel_y || pointer_y >= panel_y + VIEWPORT_HEIGHT {
        return Hit::Miss;
    }
    let origin = panel_y - scroll.offset_px();
    for row in layout::rows(content) {
        let top = origin + row.top;
        if pointer_y >= top && pointer_y < top + ROW_HEIGHT {
            return match row.kind {
                RowKind::Header(category) => Hit::Header(category),
                RowKind::Recipe(recipe) => Hit::Recipe(recipe),
            };
        }
    }
    Hit::Miss
}
