//! Panel geometry: design constants and the row walk.

use brewguide_core::{Category, Recipe};

use crate::content::PanelContent;

/// Height of a header row and of a recipe row, in panel units.
pub const ROW_HEIGHT: f32 = 20.0;
/// Vertical gap appended after each rendered section.
pub const CATEGORY_SPACING: f32 = 10.0;
/// Full panel width, scrollbar gutter included.
pub const PANEL_WIDTH: f32 = 120.0;
/// Width of the clickable/paintable row area (panel minus the gutter).
pub const CONTENT_WIDTH: f32 = PANEL_WIDTH - 15.0;
/// Height of the scrolling viewport.
pub const VIEWPORT_HEIGHT: f32 = 140.0;
/// Width of the scrollbar itself.
pub const SCROLLBAR_WIDTH: f32 = 6.0;

/// What a single row holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowKind {
    /// A section header.
    Header(Category),
    /// One recipe line.
    Recipe(Recipe),
}

/// One laid-out row: what it is and where it starts, relative to the top
/// of the content (scroll not applied).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    /// Header or recipe.
    pub kind: RowKind,
    /// Top edge in content-relative units.
    pub top: f32,
}

/// Walk the content in paint order, assigning each header and recipe row
/// its top offset.
///
/// This walk is the single geometry source: painting iterates it, and the
/// hit tester replays it, so the spacing and skip-empty rules can never
/// disagree between the two.
pub fn rows(content: &PanelContent) -> Vec<Row> {
    let mut rows = Vec::with_capacity(content.recipe_count() + content.sections.len());
    let mut y = 0.0;
    for section in &content.sections {
        rows.push(Row {
            kind: RowKind::Header(section.category),
            top: y,
        });
        y += ROW_HEIGHT;
        for recipe in &section.recipes {
            rows.push(Row {
                kind: RowKind::Recipe(*recipe),
                top: y,
            });
            y += ROW_HEIGHT;
        }
        y += CATEGORY_SPACING;
    }
    rows
}

/// Total height of the laid-out content: per visible section, a header row
/// plus its recipe rows plus the trailing spacing.
pub fn total_content_height(content: &PanelContent) -> f32 {
    content
        .sections
        .iter()
        .map(|s| ROW_HEIGHT + s.recipes.len() as f32 * ROW_HEIGHT + CATEGORY_SPACING)
        .sum()
}
