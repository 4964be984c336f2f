//! Best-effort slot-transfer planning.

use brewguide_core::{ItemRef, Recipe};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::availability::{check_availability, locate, Availability};
use crate::slots::{SlotProvider, BOTTLE_SLOTS, FUEL_ITEM, FUEL_SLOT, INGREDIENT_SLOT};

/// One slot-to-slot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotMove {
    /// Source slot, in the player range.
    pub from: usize,
    /// Destination slot, in the stand range.
    pub to: usize,
}

/// Ordered list of moves for the host to perform.
///
/// Ephemeral: produced for one click and consumed immediately. Applying
/// the moves is the host's job; the planner never touches the slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferPlan {
    /// Moves in execution order: catalyst, base, fuel.
    pub moves: Vec<SlotMove>,
}

impl TransferPlan {
    /// True when no leg could be planned.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Why a recipe could not be staged.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StageError {
    /// The availability gate failed; the payload says which legs are short.
    #[error("recipe is missing required items ({0:?})")]
    MissingItems(Availability),
}

/// Build a best-effort plan for `recipe`.
///
/// Each leg is independent and omitted when it cannot be satisfied:
/// 1. catalyst -> the ingredient slot, when the player carries it;
/// 2. base -> the first empty bottle slot, when the player carries the
///    base and a bottle slot is free;
/// 3. fuel -> the fuel slot, when the stand is not already fueled and the
///    player carries fuel.
///
/// Pure with respect to the slots; missing legs are informational, never
/// an error. Callers wanting all-or-nothing semantics gate through
/// [`stage_recipe`].
pub fn plan(recipe: &Recipe, slots: &dyn SlotProvider, fuel_present: bool) -> TransferPlan {
    let mut moves = Vec::new();

    if let Some(from) = locate(slots, recipe.catalyst) {
        moves.push(SlotMove {
            from,
            to: INGREDIENT_SLOT,
        });
    }

    if let Some(from) = locate(slots, recipe.base) {
        if let Some(to) = first_empty_bottle_slot(slots) {
            moves.push(SlotMove { from, to });
        }
    }

    if !fuel_present {
        if let Some(from) = locate(slots, ItemRef::of(FUEL_ITEM)) {
            moves.push(SlotMove {
                from,
                to: FUEL_SLOT,
            });
        }
    }

    TransferPlan { moves }
}

/// Stage `recipe` for brewing: the caller-facing, gated operation.
///
/// A click on a row whose ingredients are not all available is a valid
/// interaction that yields [`StageError::MissingItems`] - the host turns
/// it into a "cannot craft" cue rather than a crash or a silent drop.
pub fn stage_recipe(
    recipe: &Recipe,
    slots: &dyn SlotProvider,
    fuel_present: bool,
) -> Result<TransferPlan, StageError> {
    let availability = check_availability(recipe, slots, fuel_present);
    if !availability.all() {
        return Err(StageError::MissingItems(availability));
    }
    Ok(plan(recipe, slots, fuel_present))
}

fn first_empty_bottle_slot(slots: &dyn SlotProvider) -> Option<usize> {
    BOTTLE_SLOTS
        .into_iter()
        .find(|&slot| slots.stack(slot).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slots::{StandSlots, PLAYER_SLOTS_START};
    use brewguide_core::{Category, Item, PotionKind};

    fn awkward_recipe() -> Recipe {
        Recipe::brew(
            PotionKind::Water,
            Item::NetherWart,
            PotionKind::Awkward,
            Category::Base,
        )
    }

    fn screen() -> StandSlots {
        StandSlots::new(PLAYER_SLOTS_START + 27)
    }

    #[test]
    fn full_inventory_plans_all_three_legs_in_order() {
        let recipe = awkward_recipe();
        let mut slots = screen();
        slots.set(7, ItemRef::potion(PotionKind::Water), 1);
        slots.set(9, ItemRef::of(Item::NetherWart), 4);
        slots.set(12, ItemRef::of(Item::BlazePowder), 2);

        let plan = plan(&recipe, &slots, false);
        assert_eq!(
            plan.moves,
            vec![
                SlotMove { from: 9, to: INGREDIENT_SLOT },
                SlotMove { from: 7, to: 0 },
                SlotMove { from: 12, to: FUEL_SLOT },
            ]
        );
    }

    #[test]
    fn fueled_stand_skips_the_fuel_leg() {
        let recipe = awkward_recipe();
        let mut slots = screen();
        slots.set(7, ItemRef::potion(PotionKind::Water), 1);
        slots.set(9, ItemRef::of(Item::NetherWart), 4);
        slots.set(12, ItemRef::of(Item::BlazePowder), 2);

        let plan = plan(&recipe, &slots, true);
        assert_eq!(plan.moves.len(), 2);
        assert!(plan.moves.iter().all(|m| m.to != FUEL_SLOT));
    }

    #[test]
    fn base_goes_to_the_first_empty_bottle_slot() {
        let recipe = awkward_recipe();
        let mut slots = screen();
        slots.set(0, ItemRef::potion(PotionKind::Mundane), 1);
        slots.set(7, ItemRef::potion(PotionKind::Water), 1);

        let plan = plan(&recipe, &slots, true);
        assert_eq!(plan.moves, vec![SlotMove { from: 7, to: 1 }]);
    }

    #[test]
    fn no_empty_bottle_slot_omits_the_base_leg() {
        let recipe = awkward_recipe();
        let mut slots = screen();
        for bottle in BOTTLE_SLOTS {
            slots.set(bottle, ItemRef::potion(PotionKind::Mundane), 1);
        }
        slots.set(7, ItemRef::potion(PotionKind::Water), 1);
        slots.set(9, ItemRef::of(Item::NetherWart), 4);

        let plan = plan(&recipe, &slots, true);
        assert_eq!(
            plan.moves,
            vec![SlotMove { from: 9, to: INGREDIENT_SLOT }]
        );
    }

    #[test]
    fn partial_inventory_yields_only_the_base_leg() {
        // Base at slot 7, catalyst absent, stand fueled: invoking the
        // planner anyway produces exactly the base move.
        let recipe = awkward_recipe();
        let mut slots = screen();
        slots.set(7, ItemRef::potion(PotionKind::Water), 1);

        let plan = plan(&recipe, &slots, true);
        assert_eq!(plan.moves, vec![SlotMove { from: 7, to: 0 }]);
    }

    #[test]
    fn empty_inventory_plans_nothing() {
        let recipe = awkward_recipe();
        let slots = screen();
        assert!(plan(&recipe, &slots, true).is_empty());
    }

    #[test]
    fn stage_rejects_when_a_leg_is_missing() {
        let recipe = awkward_recipe();
        let mut slots = screen();
        slots.set(7, ItemRef::potion(PotionKind::Water), 1);

        match stage_recipe(&recipe, &slots, true) {
            Err(StageError::MissingItems(availability)) => {
                assert!(availability.has_base);
                assert!(!availability.has_catalyst);
                assert!(availability.has_fuel);
            }
            Ok(plan) => panic!("staged an unavailable recipe: {plan:?}"),
        }
    }

    #[test]
    fn stage_returns_the_full_plan_when_available() {
        let recipe = awkward_recipe();
        let mut slots = screen();
        slots.set(7, ItemRef::potion(PotionKind::Water), 1);
        slots.set(9, ItemRef::of(Item::NetherWart), 4);
        slots.set(12, ItemRef::of(Item::BlazePowder), 2);

        let plan = match stage_recipe(&recipe, &slots, false) {
            Ok(plan) => plan,
            Err(err) => panic!("stage failed: {err}"),
        };
        assert_eq!(plan.moves.len(), 3);
    }

    #[test]
    fn wrong_sub_type_cannot_stage() {
        let recipe = awkward_recipe();
        let mut slots = screen();
        slots.set(7, ItemRef::potion(PotionKind::Thick), 1); // not water
        slots.set(9, ItemRef::of(Item::NetherWart), 4);

        match stage_recipe(&recipe, &slots, true) {
            Err(StageError::MissingItems(availability)) => {
                assert!(!availability.has_base);
            }
            Ok(plan) => panic!("staged with the wrong bottle: {plan:?}"),
        }
    }
}
