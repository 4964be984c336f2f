//! Recipe categories and their canonical panel order.

use serde::{Deserialize, Serialize};

/// Section a recipe is filed under in the guide panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Water-bottle bases (awkward, mundane, thick)
    Base,
    /// Effect potions brewed from a base
    Effect,
    /// Redstone-extended durations
    Extended,
    /// Glowstone-enhanced potencies
    Enhanced,
}

impl Category {
    /// Every category, in the order sections are laid out and scanned.
    pub const ALL: [Category; 4] = [
        Category::Base,
        Category::Effect,
        Category::Extended,
        Category::Enhanced,
    ];

    /// Section header label.
    pub fn display_name(self) -> &'static str {
        match self {
            Category::Base => "Base Potions",
            Category::Effect => "Effect Potions",
            Category::Extended => "Extended Duration",
            Category::Enhanced => "Enhanced Potency",
        }
    }
}
