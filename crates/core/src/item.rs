//! Item identity - ingredients, bottles, and the sub-typed item reference.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::potion::PotionKind;

/// Item identifier for everything the brewing catalog speaks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Item {
    /// Drinkable potion bottle
    Potion,
    /// Throwable splash potion bottle
    SplashPotion,
    /// Lingering potion bottle
    LingeringPotion,
    /// Nether wart - the awkward-base ingredient
    NetherWart,
    /// Glowstone dust - potency catalyst
    GlowstoneDust,
    /// Redstone dust - duration catalyst
    Redstone,
    /// Spider eye
    SpiderEye,
    /// Fermented spider eye - corruption catalyst
    FermentedSpiderEye,
    /// Ghast tear
    GhastTear,
    /// Rabbit's foot
    RabbitFoot,
    /// Blaze powder - also the stand's fuel item
    BlazePowder,
    /// Glistering melon slice
    GlisteringMelon,
    /// Sugar
    Sugar,
    /// Magma cream
    MagmaCream,
    /// Golden carrot
    GoldenCarrot,
    /// Phantom membrane
    PhantomMembrane,
    /// Turtle shell
    TurtleHelmet,
    /// Pufferfish
    Pufferfish,
}

impl Item {
    /// Whether this item carries a potion sub-type (the bottle items).
    pub const fn is_potion_like(self) -> bool {
        matches!(
            self,
            Item::Potion | Item::SplashPotion | Item::LingeringPotion
        )
    }

    /// Display name of the bare item, ignoring any potion sub-type.
    pub fn display_name(self) -> &'static str {
        match self {
            Item::Potion => "Potion",
            Item::SplashPotion => "Splash Potion",
            Item::LingeringPotion => "Lingering Potion",
            Item::NetherWart => "Nether Wart",
            Item::GlowstoneDust => "Glowstone Dust",
            Item::Redstone => "Redstone Dust",
            Item::SpiderEye => "Spider Eye",
            Item::FermentedSpiderEye => "Fermented Spider Eye",
            Item::GhastTear => "Ghast Tear",
            Item::RabbitFoot => "Rabbit's Foot",
            Item::BlazePowder => "Blaze Powder",
            Item::GlisteringMelon => "Glistering Melon Slice",
            Item::Sugar => "Sugar",
            Item::MagmaCream => "Magma Cream",
            Item::GoldenCarrot => "Golden Carrot",
            Item::PhantomMembrane => "Phantom Membrane",
            Item::TurtleHelmet => "Turtle Shell",
            Item::Pufferfish => "Pufferfish",
        }
    }
}

/// Reference to an item, carrying the potion sub-type for bottle items.
///
/// Equality is piecewise: bottle items compare `(item, potion)`, every other
/// item compares `item` alone. Two stacks of redstone are the same thing;
/// a Potion of Healing and a Potion of Poison are not.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ItemRef {
    /// The item identifier.
    pub item: Item,
    /// Potion sub-type; only meaningful when `item.is_potion_like()`.
    pub potion: Option<PotionKind>,
}

impl ItemRef {
    /// Reference a plain item. The potion sub-type is always `None` here,
    /// even for bottle items.
    pub const fn of(item: Item) -> Self {
        Self { item, potion: None }
    }

    /// Reference a drinkable potion of the given sub-type.
    pub const fn potion(kind: PotionKind) -> Self {
        Self {
            item: Item::Potion,
            potion: Some(kind),
        }
    }
}

impl PartialEq for ItemRef {
    fn eq(&self, other: &Self) -> bool {
        if self.item != other.item {
            return false;
        }
        // Sub-type participates only for bottle items.
        !self.item.is_potion_like() || self.potion == other.potion
    }
}

impl Eq for ItemRef {}

impl Hash for ItemRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.item.hash(state);
        if self.item.is_potion_like() {
            self.potion.hash(state);
        }
    }
}

/// Resolves an [`ItemRef`] to the name shown to the player.
///
/// The host game owns item naming; this seam lets the search predicate and
/// the overlay render through whatever the host reports. [`StandardNames`]
/// is the built-in vanilla-English table.
pub trait ItemNameProvider {
    /// Player-visible name for the given item reference.
    fn display_name(&self, item: ItemRef) -> String;
}

/// Vanilla English display names.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardNames;

impl ItemNameProvider for StandardNames {
    fn display_name(&self, item: ItemRef) -> String {
        match (item.item, item.potion) {
            (Item::Potion, Some(kind)) => kind.display_name().to_string(),
            (Item::SplashPotion, Some(kind)) => format!("Splash {}", kind.display_name()),
            (Item::LingeringPotion, Some(kind)) => format!("Lingering {}", kind.display_name()),
            (item, _) => item.display_name().to_string(),
        }
    }
}
