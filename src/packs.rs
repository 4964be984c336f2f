//! Optional JSON recipe packs merged into the catalog at startup.

use std::fs;
use std::path::Path;

use brewguide_core::{Recipe, RecipeCatalog};
use thiserror::Error;
use tracing::info;

/// Errors emitted during recipe-pack loading.
#[derive(Debug, Error)]
pub enum PackError {
    /// Wrap IO errors when reading packs.
    #[error("failed to read recipe pack: {0}")]
    Io(#[from] std::io::Error),
    /// Wrap serde parsing issues.
    #[error("failed to parse recipe pack: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a JSON string into a list of recipes.
pub fn load_recipes_from_str(input: &str) -> Result<Vec<Recipe>, PackError> {
    Ok(serde_json::from_str(input)?)
}

/// Load a pack file and append its recipes to `catalog`, preserving pack
/// order. Returns how many recipes were added.
pub fn load_into(catalog: &mut RecipeCatalog, path: &Path) -> Result<usize, PackError> {
    let data = fs::read_to_string(path)?;
    let recipes = load_recipes_from_str(&data)?;
    let count = recipes.len();
    for recipe in recipes {
        catalog.register(recipe);
    }
    info!("Loaded {} recipes from {}", count, path.display());
    Ok(count)
}
