//! Free-text search over recipe display names.

use crate::catalog::RecipeCatalog;
use crate::category::Category;
use crate::item::ItemNameProvider;
use crate::recipe::Recipe;

/// Whether `recipe` matches `query`.
///
/// The empty query matches everything. Otherwise the query is a
/// case-insensitive substring test against the display names of the base,
/// the catalyst, and the result - a hit on any of the three is a match.
pub fn matches(recipe: &Recipe, query: &str, names: &dyn ItemNameProvider) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    [recipe.base, recipe.catalyst, recipe.result]
        .into_iter()
        .any(|item| names.display_name(item).to_lowercase().contains(&needle))
}

/// Recipes of `category` matching `query`, preserving catalog order.
///
/// The empty query returns the category's full list unchanged; a non-empty
/// query returns an order-preserving subsequence of it.
pub fn filtered_recipes(
    catalog: &RecipeCatalog,
    category: Category,
    query: &str,
    names: &dyn ItemNameProvider,
) -> Vec<Recipe> {
    let all = catalog.recipes_for(category);
    if query.is_empty() {
        return all.to_vec();
    }
    all.iter()
        .filter(|recipe| matches(recipe, query, names))
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::StandardNames;

    #[test]
    fn empty_query_is_identity() {
        let catalog = RecipeCatalog::vanilla();
        let names = StandardNames;
        for category in Category::ALL {
            let filtered = filtered_recipes(&catalog, category, "", &names);
            assert_eq!(filtered.as_slice(), catalog.recipes_for(category));
        }
    }

    #[test]
    fn query_is_case_insensitive() {
        let catalog = RecipeCatalog::vanilla();
        let names = StandardNames;
        let lower = filtered_recipes(&catalog, Category::Base, "wart", &names);
        let upper = filtered_recipes(&catalog, Category::Base, "WART", &names);
        assert_eq!(lower, upper);
        assert!(!lower.is_empty());
    }

    #[test]
    fn wart_hits_only_the_awkward_recipe_in_bases() {
        let catalog = RecipeCatalog::vanilla();
        let names = StandardNames;
        let hits = filtered_recipes(&catalog, Category::Base, "wart", &names);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].catalyst.item, crate::item::Item::NetherWart);
    }

    #[test]
    fn gold_misses_every_base_recipe() {
        let catalog = RecipeCatalog::vanilla();
        let names = StandardNames;
        let hits = filtered_recipes(&catalog, Category::Base, "gold", &names);
        assert!(hits.is_empty());
        // ...but finds the golden carrot recipe among the effects.
        let effects = filtered_recipes(&catalog, Category::Effect, "gold", &names);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn result_name_counts_as_a_hit() {
        let catalog = RecipeCatalog::vanilla();
        let names = StandardNames;
        // "night vision" appears only in result/base potion names, never in
        // a catalyst name.
        let hits = filtered_recipes(&catalog, Category::Effect, "night vision", &names);
        assert!(!hits.is_empty());
    }

    #[test]
    fn filtering_preserves_relative_order() {
        let catalog = RecipeCatalog::vanilla();
        let names = StandardNames;
        let full = catalog.recipes_for(Category::Effect);
        let hits = filtered_recipes(&catalog, Category::Effect, "potion", &names);
        let mut cursor = 0;
        for hit in &hits {
            let pos = full[cursor..]
                .iter()
                .position(|r| r == hit)
                .map(|p| cursor + p);
            let pos = pos.unwrap_or_else(|| panic!("hit not in category list"));
            cursor = pos + 1;
        }
    }
}
