#![warn(missing_docs)]
//! Core brewing-catalog primitives shared across the workspace.

pub mod catalog;
pub mod category;
pub mod item;
pub mod potion;
pub mod recipe;
pub mod search;

// Re-export commonly used types
pub use catalog::RecipeCatalog;
pub use category::Category;
pub use item::{Item, ItemNameProvider, ItemRef, StandardNames};
pub use potion::PotionKind;
pub use recipe::Recipe;
