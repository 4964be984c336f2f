//! A single brewing transformation.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::item::{Item, ItemRef};
use crate::potion::PotionKind;

/// One brewing transformation: base + catalyst -> result.
///
/// Plain data with structural identity; the catalog allows duplicates and
/// preserves registration order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Item that goes in a bottle slot.
    pub base: ItemRef,
    /// Item that goes in the ingredient slot.
    pub catalyst: ItemRef,
    /// What the stand produces.
    pub result: ItemRef,
    /// Panel section this recipe is filed under.
    pub category: Category,
}

impl Recipe {
    /// Build a recipe from explicit item references.
    pub const fn new(base: ItemRef, catalyst: ItemRef, result: ItemRef, category: Category) -> Self {
        Self {
            base,
            catalyst,
            result,
            category,
        }
    }

    /// Build the common shape: potion base + plain-item catalyst -> potion.
    /// Every standard recipe has this shape.
    pub const fn brew(
        base: PotionKind,
        catalyst: Item,
        result: PotionKind,
        category: Category,
    ) -> Self {
        Self {
            base: ItemRef::potion(base),
            catalyst: ItemRef::of(catalyst),
            result: ItemRef::potion(result),
            category,
        }
    }
}
