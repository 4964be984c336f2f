//! Per-recipe availability against the live inventory.

use brewguide_core::{ItemRef, Recipe};
use serde::{Deserialize, Serialize};

use crate::slots::{SlotProvider, FUEL_ITEM, FUEL_SLOT, PLAYER_SLOTS_START};

/// Which legs of a recipe the player can currently satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// Base item present in the player inventory.
    pub has_base: bool,
    /// Catalyst present in the player inventory.
    pub has_catalyst: bool,
    /// Stand is fueled, or fuel is in the player inventory.
    pub has_fuel: bool,
}

impl Availability {
    /// All three legs are satisfied.
    pub fn all(self) -> bool {
        self.has_base && self.has_catalyst && self.has_fuel
    }
}

/// First player slot holding an item equal to `target`.
///
/// Scans the player range (stand slots are never candidates) in index
/// order. Equality is the piecewise item rule, so a potion target only
/// matches a bottle of the same sub-type. Quantity is presence-only.
pub fn locate(slots: &dyn SlotProvider, target: ItemRef) -> Option<usize> {
    (PLAYER_SLOTS_START..slots.slot_count())
        .find(|&index| matches!(slots.stack(index), Some((item, _)) if item == target))
}

/// Whether the stand's fuel slot already holds fuel.
pub fn fuel_in_stand(slots: &dyn SlotProvider) -> bool {
    matches!(slots.stack(FUEL_SLOT), Some((item, _)) if item.item == FUEL_ITEM)
}

/// Check all three legs of `recipe`.
///
/// `fuel_present` reports the stand's own state (a burning fuel gauge or a
/// loaded fuel slot); fuel also counts as available when the player carries
/// some, since the planner can move it in.
pub fn check_availability(
    recipe: &Recipe,
    slots: &dyn SlotProvider,
    fuel_present: bool,
) -> Availability {
    Availability {
        has_base: locate(slots, recipe.base).is_some(),
        has_catalyst: locate(slots, recipe.catalyst).is_some(),
        has_fuel: fuel_present || locate(slots, ItemRef::of(FUEL_ITEM)).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::StandSlots;
    use brewguide_core::{Category, Item, PotionKind};

    fn screen_with_player_slots(n: usize) -> StandSlots {
        StandSlots::new(PLAYER_SLOTS_START + n)
    }

    #[test]
    fn locate_scans_player_slots_in_order() {
        let mut slots = screen_with_player_slots(9);
        let wart = ItemRef::of(Item::NetherWart);
        slots.set(8, wart, 1);
        slots.set(6, wart, 1);
        assert_eq!(locate(&slots, wart), Some(6));
    }

    #[test]
    fn locate_never_looks_at_stand_slots() {
        let mut slots = screen_with_player_slots(9);
        let wart = ItemRef::of(Item::NetherWart);
        slots.set(3, wart, 1); // ingredient slot, not the player's
        assert_eq!(locate(&slots, wart), None);
    }

    #[test]
    fn locate_requires_the_potion_sub_type() {
        let mut slots = screen_with_player_slots(9);
        // Wrong sub-type sits earlier than the right one.
        slots.set(5, ItemRef::potion(PotionKind::Mundane), 1);
        slots.set(7, ItemRef::potion(PotionKind::Awkward), 1);
        assert_eq!(locate(&slots, ItemRef::potion(PotionKind::Awkward)), Some(7));

        // Only the wrong sub-type present: not found at all.
        let mut slots = screen_with_player_slots(9);
        slots.set(5, ItemRef::potion(PotionKind::Mundane), 1);
        assert_eq!(locate(&slots, ItemRef::potion(PotionKind::Awkward)), None);
    }

    #[test]
    fn locate_matches_plain_items_by_id_alone() {
        let mut slots = screen_with_player_slots(9);
        slots.set(
            6,
            ItemRef {
                item: Item::Redstone,
                potion: Some(PotionKind::Water), // stray sub-type is ignored
            },
            4,
        );
        assert_eq!(locate(&slots, ItemRef::of(Item::Redstone)), Some(6));
    }

    #[test]
    fn fuel_counts_from_stand_or_player() {
        let recipe = Recipe::brew(
            PotionKind::Water,
            Item::NetherWart,
            PotionKind::Awkward,
            Category::Base,
        );
        let mut slots = screen_with_player_slots(9);
        slots.set(5, ItemRef::potion(PotionKind::Water), 1);
        slots.set(6, ItemRef::of(Item::NetherWart), 2);

        // No fuel anywhere.
        let availability = check_availability(&recipe, &slots, false);
        assert!(availability.has_base && availability.has_catalyst);
        assert!(!availability.has_fuel);
        assert!(!availability.all());

        // Stand already fueled.
        assert!(check_availability(&recipe, &slots, true).all());

        // Fuel in the player inventory instead.
        slots.set(9, ItemRef::of(Item::BlazePowder), 1);
        assert!(check_availability(&recipe, &slots, false).all());
    }

    #[test]
    fn fuel_in_stand_checks_the_fuel_slot() {
        let mut slots = screen_with_player_slots(9);
        assert!(!fuel_in_stand(&slots));
        slots.set(FUEL_SLOT, ItemRef::of(Item::BlazePowder), 1);
        assert!(fuel_in_stand(&slots));
        slots.set(FUEL_SLOT, ItemRef::of(Item::Sugar), 1);
        assert!(!fuel_in_stand(&slots));
    }
}
