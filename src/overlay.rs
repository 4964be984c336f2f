//! The guide overlay: title, search box, scrolling recipe list, scrollbar,
//! and staging clicks. All geometry and interaction rules come from the
//! panel crate; this module only paints and routes egui events into them.

use brewguide_core::{Category, Item, ItemNameProvider, ItemRef, PotionKind, Recipe, RecipeCatalog};
use brewguide_panel::{hit, layout, Hit, PanelContent, ScrollState, ScrollbarGeometry};
use brewguide_stand::{
    check_availability, stage_recipe, Availability, SlotProvider, StageError, TransferPlan,
};
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Stroke};

/// Height of the title row plus the search box above the viewport.
const HEADER_HEIGHT: f32 = 42.0;
/// Ingredient/result tile edge length inside a recipe row.
const TILE_SIZE: f32 = 16.0;
/// Longest query the search box accepts.
const SEARCH_LIMIT: usize = 50;

// Tile offsets from the panel's left edge inside a recipe row.
const BASE_X: f32 = 5.0;
const CATALYST_X: f32 = 45.0;
const RESULT_X: f32 = 85.0;

const PANEL_FILL: Color32 = Color32::from_rgb(24, 24, 34);
const PANEL_EDGE: Color32 = Color32::from_rgb(66, 66, 92);
const TITLE_COLOR: Color32 = Color32::from_rgb(235, 205, 120);
const HEADER_COLOR: Color32 = Color32::from_rgb(178, 178, 200);
const HEADER_RULE: Color32 = Color32::from_rgb(70, 70, 96);
const FAINT_TEXT: Color32 = Color32::from_rgb(128, 128, 140);
const ARROW_OK: Color32 = Color32::from_rgb(150, 150, 160);
const ARROW_NO_FUEL: Color32 = Color32::from_rgb(220, 64, 52);
const TRACK_FILL: Color32 = Color32::from_rgb(16, 16, 24);
const HANDLE_FILL: Color32 = Color32::from_rgb(92, 92, 118);
const HANDLE_HOVER: Color32 = Color32::from_rgb(122, 122, 150);
const HANDLE_ACTIVE: Color32 = Color32::from_rgb(160, 160, 190);

/// Outcome of one frame's interaction with the overlay, handed to the host.
#[derive(Debug, Clone, PartialEq)]
pub enum GuideEvent {
    /// A craftable recipe was clicked; the host applies the slot moves.
    RecipeStaged {
        /// The recipe that was clicked.
        recipe: Recipe,
        /// Moves that put its items into the stand.
        plan: TransferPlan,
    },
    /// A recipe was clicked but at least one leg is missing.
    CraftDenied {
        /// The recipe that was clicked.
        recipe: Recipe,
        /// Which legs the player can and cannot satisfy.
        missing: Availability,
    },
}

/// Sound the host should play for an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Normal UI click.
    Click,
    /// Flat deny buzz.
    Denied,
}

impl GuideEvent {
    /// Cue matching this event.
    pub fn sound(&self) -> SoundCue {
        match self {
            GuideEvent::RecipeStaged { .. } => SoundCue::Click,
            GuideEvent::CraftDenied { .. } => SoundCue::Denied,
        }
    }
}

/// Recipe-guide panel state that survives across frames: the catalog, the
/// live query, and the scroll position.
pub struct RecipeOverlay {
    catalog: RecipeCatalog,
    names: Box<dyn ItemNameProvider>,
    query: String,
    scroll: ScrollState,
    search_focused: bool,
    highlight_missing: bool,
}

impl RecipeOverlay {
    /// New overlay over `catalog`. `names` resolves item display names for
    /// search and tooltips.
    pub fn new(
        catalog: RecipeCatalog,
        names: Box<dyn ItemNameProvider>,
        highlight_missing: bool,
    ) -> Self {
        Self {
            catalog,
            names,
            query: String::new(),
            scroll: ScrollState::new(),
            search_focused: false,
            highlight_missing,
        }
    }

    /// Whether the search box had keyboard focus last frame. The host keeps
    /// its close shortcut from firing while the player is typing.
    pub fn search_focused(&self) -> bool {
        self.search_focused
    }

    /// Draw the panel with its top-left corner at `origin` and route this
    /// frame's input. Returns the staging events to apply.
    pub fn ui(
        &mut self,
        ui: &mut egui::Ui,
        origin: Pos2,
        slots: &dyn SlotProvider,
        fuel_present: bool,
    ) -> Vec<GuideEvent> {
        let mut events = Vec::new();

        let panel_rect = Rect::from_min_size(
            origin,
            vec2(
                layout::PANEL_WIDTH,
                HEADER_HEIGHT + layout::VIEWPORT_HEIGHT + 4.0,
            ),
        );
        let viewport = Rect::from_min_size(
            pos2(origin.x, origin.y + HEADER_HEIGHT),
            vec2(layout::PANEL_WIDTH, layout::VIEWPORT_HEIGHT),
        );
        let rows_rect =
            Rect::from_min_size(viewport.min, vec2(layout::CONTENT_WIDTH, layout::VIEWPORT_HEIGHT));
        let track_rect = Rect::from_min_size(
            pos2(origin.x + layout::PANEL_WIDTH - 8.0, viewport.top()),
            vec2(layout::SCROLLBAR_WIDTH, layout::VIEWPORT_HEIGHT),
        );

        // Chrome first so the widgets land on top of it.
        ui.painter().rect_filled(panel_rect, 4.0, PANEL_FILL);
        ui.painter()
            .rect_stroke(panel_rect, 4.0, Stroke::new(1.0, PANEL_EDGE));
        ui.painter().text(
            pos2(origin.x + 5.0, origin.y + 4.0),
            Align2::LEFT_TOP,
            "Potion Recipes",
            FontId::proportional(13.0),
            TITLE_COLOR,
        );

        // Search box. Escape already surrenders focus inside TextEdit.
        let search_rect = Rect::from_min_size(
            pos2(origin.x + 4.0, origin.y + 21.0),
            vec2(layout::PANEL_WIDTH - 8.0, 16.0),
        );
        let search = ui.put(
            search_rect,
            egui::TextEdit::singleline(&mut self.query)
                .hint_text("Search")
                .char_limit(SEARCH_LIMIT)
                .font(egui::TextStyle::Small),
        );
        if search.changed() {
            self.scroll.on_filter_changed();
        }
        self.search_focused = search.has_focus();

        // Derive this frame's content and settle the scroll limits before
        // anything paints or hit-tests.
        let content = PanelContent::build(&self.catalog, &self.query, self.names.as_ref());
        let total = layout::total_content_height(&content);
        self.scroll.on_content_changed(total, layout::VIEWPORT_HEIGHT);

        if ui.rect_contains_pointer(viewport) {
            let scroll_y = ui.input(|i| i.raw_scroll_delta.y);
            if scroll_y != 0.0 {
                // Wheel-up moves toward the top of the list.
                self.scroll.on_wheel(-scroll_y / layout::ROW_HEIGHT);
            }
        }

        // Scrollbar: pressing the track jumps the handle there, then the
        // handle follows the pointer until release.
        let track = ui.interact(
            track_rect,
            ui.id().with("guide_scrollbar"),
            egui::Sense::click_and_drag(),
        );
        if track.is_pointer_button_down_on() {
            self.scroll.begin_drag();
            if let (Some(pos), Some(geometry)) = (
                track.interact_pointer_pos(),
                ScrollbarGeometry::for_panel(&self.scroll, total),
            ) {
                let along = pos.y - track_rect.top() - geometry.handle_height / 2.0;
                self.scroll.drag_to(geometry.fraction_for_pointer(along));
            }
        } else if self.scroll.dragging() {
            self.scroll.end_drag();
        }

        let rows_response = ui.interact(rows_rect, ui.id().with("guide_rows"), egui::Sense::click());
        let hovered = rows_response
            .hover_pos()
            .map(|pos| {
                hit::resolve(
                    &content,
                    &self.scroll,
                    viewport.left(),
                    viewport.top(),
                    pos.x,
                    pos.y,
                )
            })
            .unwrap_or(Hit::Miss);

        // Rows, clipped to the viewport.
        let painter = ui.painter_at(viewport);
        if content.is_empty() {
            painter.text(
                viewport.center(),
                Align2::CENTER_CENTER,
                "No matching recipes",
                FontId::proportional(11.0),
                FAINT_TEXT,
            );
        }
        let mut hovered_tile = None;
        let top_origin = viewport.top() - self.scroll.offset_px();
        for row in layout::rows(&content) {
            let top = top_origin + row.top;
            if top + layout::ROW_HEIGHT < viewport.top() || top > viewport.bottom() {
                continue;
            }
            match row.kind {
                layout::RowKind::Header(category) => {
                    paint_header(&painter, viewport.left(), top, category);
                }
                layout::RowKind::Recipe(recipe) => {
                    let availability = check_availability(&recipe, slots, fuel_present);
                    let is_hovered = hovered == Hit::Recipe(recipe);
                    if is_hovered {
                        hovered_tile = rows_response
                            .hover_pos()
                            .and_then(|pos| tile_at(viewport.left(), top, &recipe, pos));
                    }
                    self.paint_recipe(&painter, viewport.left(), top, &recipe, availability, is_hovered);
                }
            }
        }

        if let Some(geometry) = ScrollbarGeometry::for_panel(&self.scroll, total) {
            let painter = ui.painter();
            painter.rect_filled(track_rect, 2.0, TRACK_FILL);
            let handle = Rect::from_min_size(
                pos2(track_rect.left(), track_rect.top() + geometry.handle_top),
                vec2(layout::SCROLLBAR_WIDTH, geometry.handle_height),
            );
            let fill = if self.scroll.dragging() {
                HANDLE_ACTIVE
            } else if track.hovered() {
                HANDLE_HOVER
            } else {
                HANDLE_FILL
            };
            painter.rect_filled(handle, 2.0, fill);
        }

        if let Some(item) = hovered_tile {
            egui::show_tooltip_at_pointer(ui.ctx(), egui::Id::new("guide_item_tooltip"), |ui| {
                ui.label(self.names.display_name(item));
            });
        }

        if rows_response.clicked() {
            if let Some(pos) = rows_response.interact_pointer_pos() {
                let clicked = hit::resolve(
                    &content,
                    &self.scroll,
                    viewport.left(),
                    viewport.top(),
                    pos.x,
                    pos.y,
                );
                if let Hit::Recipe(recipe) = clicked {
                    match stage_recipe(&recipe, slots, fuel_present) {
                        Ok(plan) => events.push(GuideEvent::RecipeStaged { recipe, plan }),
                        Err(StageError::MissingItems(missing)) => {
                            events.push(GuideEvent::CraftDenied { recipe, missing });
                        }
                    }
                }
            }
        }

        events
    }

    fn paint_recipe(
        &self,
        painter: &egui::Painter,
        left: f32,
        top: f32,
        recipe: &Recipe,
        availability: Availability,
        hovered: bool,
    ) {
        if hovered {
            painter.rect_filled(
                Rect::from_min_size(pos2(left, top), vec2(layout::CONTENT_WIDTH, layout::ROW_HEIGHT)),
                2.0,
                Color32::from_rgba_unmultiplied(255, 255, 255, 18),
            );
        }
        let mid = top + layout::ROW_HEIGHT / 2.0;
        self.paint_item_tile(painter, left + BASE_X, top + 2.0, recipe.base, !availability.has_base);
        painter.text(
            pos2(left + 33.0, mid),
            Align2::CENTER_CENTER,
            "+",
            FontId::proportional(11.0),
            FAINT_TEXT,
        );
        self.paint_item_tile(
            painter,
            left + CATALYST_X,
            top + 2.0,
            recipe.catalyst,
            !availability.has_catalyst,
        );
        // The arrow goes red when no fuel is reachable, as the host game does.
        let arrow_color = if availability.has_fuel {
            ARROW_OK
        } else {
            ARROW_NO_FUEL
        };
        painter.arrow(pos2(left + 70.0, mid), vec2(10.0, 0.0), Stroke::new(1.5, arrow_color));
        self.paint_item_tile(painter, left + RESULT_X, top + 2.0, recipe.result, false);
    }

    fn paint_item_tile(&self, painter: &egui::Painter, x: f32, y: f32, item: ItemRef, missing: bool) {
        let tile = Rect::from_min_size(pos2(x, y), vec2(TILE_SIZE, TILE_SIZE));
        painter.rect_filled(tile, 3.0, tile_color(item));
        if let Some(initial) = self.names.display_name(item).chars().next() {
            painter.text(
                tile.center(),
                Align2::CENTER_CENTER,
                initial,
                FontId::proportional(9.0),
                Color32::WHITE,
            );
        }
        if missing && self.highlight_missing {
            painter.rect_filled(tile, 3.0, Color32::from_rgba_unmultiplied(200, 40, 40, 110));
        }
    }

}

/// Which of a row's three item tiles the pointer sits on, if any.
fn tile_at(left: f32, top: f32, recipe: &Recipe, pointer: Pos2) -> Option<ItemRef> {
    for (x, item) in [
        (BASE_X, recipe.base),
        (CATALYST_X, recipe.catalyst),
        (RESULT_X, recipe.result),
    ] {
        let tile = Rect::from_min_size(pos2(left + x, top + 2.0), vec2(TILE_SIZE, TILE_SIZE));
        if tile.contains(pointer) {
            return Some(item);
        }
    }
    None
}

fn paint_header(painter: &egui::Painter, left: f32, top: f32, category: Category) {
    painter.text(
        pos2(left + 3.0, top + layout::ROW_HEIGHT / 2.0),
        Align2::LEFT_CENTER,
        category.display_name(),
        FontId::proportional(11.0),
        HEADER_COLOR,
    );
    let rule_y = top + layout::ROW_HEIGHT - 3.0;
    painter.line_segment(
        [
            pos2(left + 2.0, rule_y),
            pos2(left + layout::CONTENT_WIDTH - 2.0, rule_y),
        ],
        Stroke::new(1.0, HEADER_RULE),
    );
}

/// Flat placeholder color standing in for the host's item icons.
pub(crate) fn tile_color(item: ItemRef) -> Color32 {
    if item.item.is_potion_like() {
        return match item.potion {
            Some(PotionKind::Water) => Color32::from_rgb(52, 78, 160),
            Some(PotionKind::Mundane) => Color32::from_rgb(98, 90, 126),
            Some(PotionKind::Thick) => Color32::from_rgb(78, 70, 110),
            Some(PotionKind::Awkward) => Color32::from_rgb(96, 70, 150),
            Some(_) => Color32::from_rgb(150, 62, 130),
            None => Color32::from_rgb(70, 70, 84),
        };
    }
    match item.item {
        Item::NetherWart => Color32::from_rgb(150, 44, 44),
        Item::GlowstoneDust => Color32::from_rgb(228, 190, 62),
        Item::Redstone => Color32::from_rgb(200, 34, 30),
        Item::SpiderEye => Color32::from_rgb(140, 32, 52),
        Item::FermentedSpiderEye => Color32::from_rgb(116, 82, 90),
        Item::GhastTear => Color32::from_rgb(198, 208, 218),
        Item::RabbitFoot => Color32::from_rgb(188, 168, 140),
        Item::BlazePowder => Color32::from_rgb(238, 168, 34),
        Item::GlisteringMelon => Color32::from_rgb(206, 118, 88),
        Item::Sugar => Color32::from_rgb(232, 232, 238),
        Item::MagmaCream => Color32::from_rgb(218, 140, 60),
        Item::GoldenCarrot => Color32::from_rgb(230, 160, 42),
        Item::PhantomMembrane => Color32::from_rgb(168, 186, 158),
        Item::TurtleHelmet => Color32::from_rgb(82, 158, 92),
        Item::Pufferfish => Color32::from_rgb(216, 196, 82),
        Item::Potion | Item::SplashPotion | Item::LingeringPotion => Color32::from_rgb(70, 70, 84),
    }
}
