//! Brewing-stand slot map and the inventory seam.

use brewguide_core::{Item, ItemRef};

/// The three bottle slots, in fill order.
pub const BOTTLE_SLOTS: [usize; 3] = [0, 1, 2];
/// Slot the catalyst goes into.
pub const INGREDIENT_SLOT: usize = 3;
/// Slot the fuel goes into.
pub const FUEL_SLOT: usize = 4;
/// First player-inventory slot; everything from here up belongs to the player.
pub const PLAYER_SLOTS_START: usize = 5;
/// The only item the stand burns.
pub const FUEL_ITEM: Item = Item::BlazePowder;

/// Read-only view of the brewing screen's slots: the five stand slots
/// first, then the player inventory.
///
/// Implementations are queried fresh on every availability check or plan;
/// nothing here is cached across calls.
pub trait SlotProvider {
    /// Total slot count, stand slots included.
    fn slot_count(&self) -> usize;

    /// Item and quantity at `index`, or `None` for an empty slot.
    fn stack(&self, index: usize) -> Option<(ItemRef, u32)>;
}

/// Vector-backed slots for the demo host and for tests.
#[derive(Debug, Clone, Default)]
pub struct StandSlots {
    slots: Vec<Option<(ItemRef, u32)>>,
}

impl StandSlots {
    /// All-empty slots. `slot_count` includes the five stand slots.
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    /// Place a stack, replacing whatever was there. Out-of-range indices
    /// are ignored.
    pub fn set(&mut self, index: usize, item: ItemRef, quantity: u32) {
        if let Some(slot) = self.slots.get_mut(index) {
            *slot = Some((item, quantity));
        }
    }

    /// Remove and return the stack at `index`, if any.
    pub fn take(&mut self, index: usize) -> Option<(ItemRef, u32)> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Whether the slot holds nothing.
    pub fn is_empty_slot(&self, index: usize) -> bool {
        self.stack(index).is_none()
    }
}

impl SlotProvider for StandSlots {
    fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn stack(&self, index: usize) -> Option<(ItemRef, u32)> {
        self.slots.get(index).copied().flatten()
    }
}
