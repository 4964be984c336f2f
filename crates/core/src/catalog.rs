//! Recipe catalog - owns the recipe list and the per-category index.

use std::collections::HashMap;

use crate::category::Category;
use crate::item::Item;
use crate::potion::PotionKind;
use crate::recipe::Recipe;

/// The standard brewing table, in registration order.
///
/// Registration order is display order, so each category below is written
/// the way it reads in the panel.
const VANILLA_RECIPES: &[Recipe] = &[
    // Bases
    Recipe::brew(PotionKind::Water, Item::NetherWart, PotionKind::Awkward, Category::Base),
    Recipe::brew(PotionKind::Water, Item::GlowstoneDust, PotionKind::Thick, Category::Base),
    Recipe::brew(PotionKind::Water, Item::Redstone, PotionKind::Mundane, Category::Base),
    Recipe::brew(PotionKind::Water, Item::SpiderEye, PotionKind::Mundane, Category::Base),
    Recipe::brew(PotionKind::Water, Item::GhastTear, PotionKind::Mundane, Category::Base),
    Recipe::brew(PotionKind::Water, Item::RabbitFoot, PotionKind::Mundane, Category::Base),
    Recipe::brew(PotionKind::Water, Item::BlazePowder, PotionKind::Mundane, Category::Base),
    Recipe::brew(PotionKind::Water, Item::GlisteringMelon, PotionKind::Mundane, Category::Base),
    Recipe::brew(PotionKind::Water, Item::Sugar, PotionKind::Mundane, Category::Base),
    Recipe::brew(PotionKind::Water, Item::MagmaCream, PotionKind::Mundane, Category::Base),
    // Effects
    Recipe::brew(PotionKind::Awkward, Item::GoldenCarrot, PotionKind::NightVision, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::MagmaCream, PotionKind::FireResistance, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::RabbitFoot, PotionKind::Leaping, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::Sugar, PotionKind::Swiftness, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::PhantomMembrane, PotionKind::SlowFalling, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::BlazePowder, PotionKind::Strength, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::TurtleHelmet, PotionKind::TurtleMaster, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::Pufferfish, PotionKind::WaterBreathing, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::GlisteringMelon, PotionKind::Healing, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::SpiderEye, PotionKind::Poison, Category::Effect),
    Recipe::brew(PotionKind::Awkward, Item::GhastTear, PotionKind::Regeneration, Category::Effect),
    Recipe::brew(PotionKind::Water, Item::FermentedSpiderEye, PotionKind::Weakness, Category::Effect),
    Recipe::brew(PotionKind::NightVision, Item::FermentedSpiderEye, PotionKind::Invisibility, Category::Effect),
    Recipe::brew(PotionKind::Healing, Item::FermentedSpiderEye, PotionKind::Harming, Category::Effect),
    Recipe::brew(PotionKind::Poison, Item::FermentedSpiderEye, PotionKind::Harming, Category::Effect),
    Recipe::brew(PotionKind::LongPoison, Item::FermentedSpiderEye, PotionKind::Harming, Category::Effect),
    // Extended duration
    Recipe::brew(PotionKind::NightVision, Item::Redstone, PotionKind::LongNightVision, Category::Extended),
    Recipe::brew(PotionKind::Invisibility, Item::Redstone, PotionKind::LongInvisibility, Category::Extended),
    Recipe::brew(PotionKind::Leaping, Item::Redstone, PotionKind::LongLeaping, Category::Extended),
    Recipe::brew(PotionKind::FireResistance, Item::Redstone, PotionKind::LongFireResistance, Category::Extended),
    Recipe::brew(PotionKind::Swiftness, Item::Redstone, PotionKind::LongSwiftness, Category::Extended),
    Recipe::brew(PotionKind::Slowness, Item::Redstone, PotionKind::LongSlowness, Category::Extended),
    Recipe::brew(PotionKind::WaterBreathing, Item::Redstone, PotionKind::LongWaterBreathing, Category::Extended),
    Recipe::brew(PotionKind::Poison, Item::Redstone, PotionKind::LongPoison, Category::Extended),
    Recipe::brew(PotionKind::Regeneration, Item::Redstone, PotionKind::LongRegeneration, Category::Extended),
    Recipe::brew(PotionKind::Strength, Item::Redstone, PotionKind::LongStrength, Category::Extended),
    Recipe::brew(PotionKind::Weakness, Item::Redstone, PotionKind::LongWeakness, Category::Extended),
    Recipe::brew(PotionKind::SlowFalling, Item::Redstone, PotionKind::LongSlowFalling, Category::Extended),
    Recipe::brew(PotionKind::TurtleMaster, Item::Redstone, PotionKind::LongTurtleMaster, Category::Extended),
    Recipe::brew(PotionKind::LongNightVision, Item::FermentedSpiderEye, PotionKind::LongInvisibility, Category::Extended),
    // Enhanced potency
    Recipe::brew(PotionKind::Leaping, Item::GlowstoneDust, PotionKind::StrongLeaping, Category::Enhanced),
    Recipe::brew(PotionKind::Swiftness, Item::GlowstoneDust, PotionKind::StrongSwiftness, Category::Enhanced),
    Recipe::brew(PotionKind::Poison, Item::GlowstoneDust, PotionKind::StrongPoison, Category::Enhanced),
    Recipe::brew(PotionKind::Regeneration, Item::GlowstoneDust, PotionKind::StrongRegeneration, Category::Enhanced),
    Recipe::brew(PotionKind::Strength, Item::GlowstoneDust, PotionKind::StrongStrength, Category::Enhanced),
    Recipe::brew(PotionKind::Healing, Item::GlowstoneDust, PotionKind::StrongHealing, Category::Enhanced),
    Recipe::brew(PotionKind::Harming, Item::GlowstoneDust, PotionKind::StrongHarming, Category::Enhanced),
    Recipe::brew(PotionKind::TurtleMaster, Item::GlowstoneDust, PotionKind::StrongTurtleMaster, Category::Enhanced),
    Recipe::brew(PotionKind::StrongHealing, Item::FermentedSpiderEye, PotionKind::StrongHarming, Category::Enhanced),
    Recipe::brew(PotionKind::StrongPoison, Item::FermentedSpiderEye, PotionKind::StrongHarming, Category::Enhanced),
];

/// Ordered collection of brewing recipes with a per-category index.
///
/// Always constructed explicitly - [`RecipeCatalog::new`] for an empty
/// catalog, [`RecipeCatalog::vanilla`] for the standard table. There is no
/// process-wide catalog, so the table is built exactly once per instance.
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
    by_category: HashMap<Category, Vec<Recipe>>,
}

impl RecipeCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-loaded with the standard brewing table.
    pub fn vanilla() -> Self {
        let mut catalog = Self::new();
        for recipe in VANILLA_RECIPES {
            catalog.register(*recipe);
        }
        catalog
    }

    /// Append a recipe. Duplicates are allowed; order is preserved both in
    /// the full list and within the recipe's category.
    pub fn register(&mut self, recipe: Recipe) {
        self.recipes.push(recipe);
        self.by_category
            .entry(recipe.category)
            .or_default()
            .push(recipe);
    }

    /// Every recipe, in registration order.
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipes filed under `category`, in registration order. Empty slice
    /// for a category nothing was registered under.
    pub fn recipes_for(&self, category: Category) -> &[Recipe] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of registered recipes.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog has no recipes at all.
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemRef;

    #[test]
    fn vanilla_table_counts() {
        let catalog = RecipeCatalog::vanilla();
        assert_eq!(catalog.len(), 50);
        assert_eq!(catalog.recipes_for(Category::Base).len(), 10);
        assert_eq!(catalog.recipes_for(Category::Effect).len(), 16);
        assert_eq!(catalog.recipes_for(Category::Extended).len(), 14);
        assert_eq!(catalog.recipes_for(Category::Enhanced).len(), 10);
    }

    #[test]
    fn category_lists_are_ordered_subsequences() {
        let catalog = RecipeCatalog::vanilla();
        for category in Category::ALL {
            let mut cursor = 0;
            for recipe in catalog.recipes_for(category) {
                // Advance through the master list; each category entry must
                // appear there, in the same relative order.
                let pos = catalog.recipes()[cursor..]
                    .iter()
                    .position(|r| r == recipe)
                    .map(|p| cursor + p);
                let pos = pos.unwrap_or_else(|| panic!("recipe missing from master list"));
                cursor = pos + 1;
            }
        }
    }

    #[test]
    fn empty_category_yields_empty_slice() {
        let catalog = RecipeCatalog::new();
        assert!(catalog.recipes_for(Category::Enhanced).is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn register_appends_in_order() {
        let mut catalog = RecipeCatalog::new();
        let first = Recipe::brew(
            PotionKind::Water,
            Item::NetherWart,
            PotionKind::Awkward,
            Category::Base,
        );
        let second = Recipe::brew(
            PotionKind::Water,
            Item::Sugar,
            PotionKind::Mundane,
            Category::Base,
        );
        catalog.register(first);
        catalog.register(second);
        assert_eq!(catalog.recipes_for(Category::Base), &[first, second]);
    }

    #[test]
    fn every_vanilla_recipe_uses_potion_bases() {
        let catalog = RecipeCatalog::vanilla();
        for recipe in catalog.recipes() {
            assert!(recipe.base.item.is_potion_like());
            assert!(recipe.result.item.is_potion_like());
            assert!(!recipe.catalyst.item.is_potion_like());
        }
    }

    #[test]
    fn harming_enhancement_stays_harming() {
        // Glowstone on a harming potion boosts its potency; it must not
        // cross over into the slowness line.
        let catalog = RecipeCatalog::vanilla();
        let harming = ItemRef::potion(PotionKind::Harming);
        let enhanced: Vec<_> = catalog
            .recipes_for(Category::Enhanced)
            .iter()
            .filter(|r| r.base == harming)
            .collect();
        assert_eq!(enhanced.len(), 1);
        assert_eq!(
            enhanced[0].result,
            ItemRef::potion(PotionKind::StrongHarming)
        );
    }
}
