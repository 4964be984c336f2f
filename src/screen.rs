//! Demo brewing-stand screen: the five stand slots, a fuel gauge, and the
//! player inventory grid the guide stages items out of.

use brewguide_core::{Item, ItemNameProvider, ItemRef, PotionKind, StandardNames};
use brewguide_stand::slots::{BOTTLE_SLOTS, FUEL_SLOT, INGREDIENT_SLOT, PLAYER_SLOTS_START};
use brewguide_stand::{fuel_in_stand, SlotProvider, StandSlots, TransferPlan};
use egui::{pos2, vec2, Align2, Color32, FontId, Pos2, Rect, Stroke};
use tracing::{info, warn};

/// Width of the block the screen paints, so the host can anchor the
/// overlay next to it.
pub const SCREEN_WIDTH: f32 = 212.0;
/// Height of the painted block.
pub const SCREEN_HEIGHT: f32 = 186.0;

/// Demo player inventory size: hotbar plus two backpack rows.
const PLAYER_SLOT_COUNT: usize = 27;
/// Inventory grid columns.
const GRID_COLUMNS: usize = 9;
/// Slot cell edge length.
const CELL: f32 = 21.0;
/// Gap between cells.
const CELL_GAP: f32 = 2.0;

const SLOT_FILL: Color32 = Color32::from_rgb(34, 34, 46);
const SLOT_EDGE: Color32 = Color32::from_rgb(78, 78, 104);
const LABEL_COLOR: Color32 = Color32::from_rgb(178, 178, 200);
const COUNT_COLOR: Color32 = Color32::from_rgb(230, 230, 240);

/// The brewing screen the overlay plans against: a slot map and a burn
/// counter standing in for the real stand's fuel gauge.
pub struct StandScreen {
    slots: StandSlots,
    names: StandardNames,
    fuel_burns_left: u32,
}

impl StandScreen {
    /// Fresh screen with a seeded demo inventory and a cold stand.
    pub fn new() -> Self {
        let mut slots = StandSlots::new(PLAYER_SLOTS_START + PLAYER_SLOT_COUNT);
        let first = PLAYER_SLOTS_START;
        slots.set(first, ItemRef::potion(PotionKind::Water), 3);
        slots.set(first + 1, ItemRef::of(Item::NetherWart), 8);
        slots.set(first + 2, ItemRef::of(Item::Redstone), 16);
        slots.set(first + 3, ItemRef::of(Item::GlowstoneDust), 12);
        slots.set(first + 4, ItemRef::of(Item::FermentedSpiderEye), 4);
        slots.set(first + 5, ItemRef::of(Item::BlazePowder), 6);
        slots.set(first + 6, ItemRef::of(Item::Sugar), 10);
        slots.set(first + 7, ItemRef::of(Item::GoldenCarrot), 5);
        slots.set(first + 8, ItemRef::potion(PotionKind::Awkward), 3);
        slots.set(first + 9, ItemRef::of(Item::MagmaCream), 2);
        slots.set(first + 10, ItemRef::potion(PotionKind::Swiftness), 1);
        Self {
            slots,
            names: StandardNames,
            fuel_burns_left: 0,
        }
    }

    /// Whether the stand can brew right now without more fuel.
    pub fn fuel_present(&self) -> bool {
        self.fuel_burns_left > 0 || fuel_in_stand(&self.slots)
    }

    /// Apply a transfer plan, moving whole stacks. The planner only targets
    /// empty stand slots, so an occupied destination means the screen
    /// changed under the plan; such moves are skipped.
    pub fn apply(&mut self, plan: &TransferPlan) -> usize {
        let mut applied = 0;
        for step in &plan.moves {
            if !self.slots.is_empty_slot(step.to) {
                warn!("slot {} is occupied, skipping move from {}", step.to, step.from);
                continue;
            }
            if let Some((item, quantity)) = self.slots.take(step.from) {
                info!(
                    "Moved {} x{} from slot {} to slot {}",
                    self.names.display_name(item),
                    quantity,
                    step.from,
                    step.to
                );
                self.slots.set(step.to, item, quantity);
                applied += 1;
            }
        }
        applied
    }

    /// Paint the screen with its top-left corner at `origin`.
    pub fn ui(&self, ui: &mut egui::Ui, origin: Pos2) {
        let painter = ui.painter();
        painter.text(
            pos2(origin.x, origin.y),
            Align2::LEFT_TOP,
            "Brewing Stand",
            FontId::proportional(13.0),
            LABEL_COLOR,
        );

        // Stand block: fuel on the left, ingredient up top, bottles below.
        let stand_top = origin.y + 20.0;
        self.slot_cell(ui, pos2(origin.x + 8.0, stand_top + 18.0), FUEL_SLOT, "fuel");
        self.slot_cell(
            ui,
            pos2(origin.x + 96.0, stand_top),
            INGREDIENT_SLOT,
            "ingredient",
        );
        for (i, slot) in BOTTLE_SLOTS.into_iter().enumerate() {
            let x = origin.x + 62.0 + i as f32 * (CELL + 12.0);
            self.slot_cell(ui, pos2(x, stand_top + 38.0), slot, "bottle");
        }
        let painter = ui.painter();
        painter.text(
            pos2(origin.x + 8.0, stand_top + 46.0),
            Align2::LEFT_TOP,
            format!("Fuel: {}", self.fuel_burns_left),
            FontId::proportional(9.0),
            LABEL_COLOR,
        );

        // Player inventory grid.
        let grid_top = stand_top + 74.0;
        painter.text(
            pos2(origin.x, grid_top - 14.0),
            Align2::LEFT_TOP,
            "Inventory",
            FontId::proportional(11.0),
            LABEL_COLOR,
        );
        for offset in 0..PLAYER_SLOT_COUNT {
            let col = offset % GRID_COLUMNS;
            let row = offset / GRID_COLUMNS;
            let x = origin.x + col as f32 * (CELL + CELL_GAP);
            let y = grid_top + row as f32 * (CELL + CELL_GAP);
            self.slot_cell(ui, pos2(x, y), PLAYER_SLOTS_START + offset, "inv");
        }
    }

    fn slot_cell(&self, ui: &mut egui::Ui, at: Pos2, index: usize, kind: &str) {
        let rect = Rect::from_min_size(at, vec2(CELL, CELL));
        let painter = ui.painter();
        painter.rect_filled(rect, 2.0, SLOT_FILL);
        painter.rect_stroke(rect, 2.0, Stroke::new(1.0, SLOT_EDGE));

        let stack = self.slots.stack(index);
        if let Some((item, quantity)) = stack {
            painter.rect_filled(rect.shrink(3.0), 2.0, crate::overlay::tile_color(item));
            if let Some(initial) = self.names.display_name(item).chars().next() {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    initial,
                    FontId::proportional(9.0),
                    Color32::WHITE,
                );
            }
            if quantity > 1 {
                painter.text(
                    rect.right_bottom() - vec2(2.0, 1.0),
                    Align2::RIGHT_BOTTOM,
                    quantity,
                    FontId::proportional(8.0),
                    COUNT_COLOR,
                );
            }
        }

        let response = ui.interact(rect, ui.id().with((kind, index)), egui::Sense::hover());
        if let Some((item, quantity)) = stack {
            response.on_hover_text(format!("{} x{}", self.names.display_name(item), quantity));
        }
    }
}

impl Default for StandScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotProvider for StandScreen {
    fn slot_count(&self) -> usize {
        self.slots.slot_count()
    }

    fn stack(&self, index: usize) -> Option<(ItemRef, u32)> {
        self.slots.stack(index)
    }
}
