//! Derivation of what the panel currently shows.

use brewguide_core::{search, Category, ItemNameProvider, Recipe, RecipeCatalog};

/// One rendered section: a category header plus its filtered recipes.
///
/// Sections with no matching recipes are never constructed, so a `Section`
/// always paints a header and at least one recipe row.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Category this section belongs to.
    pub category: Category,
    /// Filtered recipes, catalog order. Never empty.
    pub recipes: Vec<Recipe>,
}

/// Everything the panel shows for the current query, in paint order.
///
/// Rebuilt whenever the query or the catalog changes; layout, painting, and
/// hit-testing all walk this one structure, so the skip-empty-category rule
/// cannot drift between them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelContent {
    /// Visible sections in canonical category order.
    pub sections: Vec<Section>,
}

impl PanelContent {
    /// Derive the visible sections for `query`.
    ///
    /// Categories whose filtered list is empty are skipped entirely,
    /// header included.
    pub fn build(catalog: &RecipeCatalog, query: &str, names: &dyn ItemNameProvider) -> Self {
        let mut sections = Vec::new();
        for category in Category::ALL {
            let recipes = search::filtered_recipes(catalog, category, query, names);
            if recipes.is_empty() {
                continue;
            }
            sections.push(Section { category, recipes });
        }
        Self { sections }
    }

    /// True when no recipe matches the current query.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of recipe rows across all sections.
    pub fn recipe_count(&self) -> usize {
        self.sections.iter().map(|s| s.recipes.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brewguide_core::StandardNames;

    #[test]
    fn empty_query_shows_all_categories() {
        let catalog = RecipeCatalog::vanilla();
        let content = PanelContent::build(&catalog, "", &StandardNames);
        assert_eq!(content.sections.len(), Category::ALL.len());
        assert_eq!(content.recipe_count(), catalog.len());
    }

    #[test]
    fn sections_follow_canonical_order() {
        let catalog = RecipeCatalog::vanilla();
        let content = PanelContent::build(&catalog, "", &StandardNames);
        let order: Vec<_> = content.sections.iter().map(|s| s.category).collect();
        assert_eq!(order, Category::ALL.to_vec());
    }

    #[test]
    fn empty_categories_are_skipped_entirely() {
        let catalog = RecipeCatalog::vanilla();
        // "wart" only matches the nether-wart base recipe.
        let content = PanelContent::build(&catalog, "wart", &StandardNames);
        assert_eq!(content.sections.len(), 1);
        assert_eq!(content.sections[0].category, Category::Base);
        assert_eq!(content.sections[0].recipes.len(), 1);
    }

    #[test]
    fn no_matches_yields_empty_content() {
        let catalog = RecipeCatalog::vanilla();
        let content = PanelContent::build(&catalog, "zzzz", &StandardNames);
        assert!(content.is_empty());
        assert_eq!(content.recipe_count(), 0);
    }
}
