//! Potion sub-types and their player-visible names.

use serde::{Deserialize, Serialize};

/// Potion sub-type carried by bottle items.
///
/// Extended (`Long*`) and enhanced (`Strong*`) variants are distinct values
/// for matching purposes but share the base effect's display name, which is
/// how the host game labels them (duration and amplifier live in the
/// tooltip, not the name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionKind {
    /// Plain water bottle
    Water,
    /// Mundane potion - dead-end base
    Mundane,
    /// Thick potion - dead-end base
    Thick,
    /// Awkward potion - the useful brewing base
    Awkward,
    /// Night Vision
    NightVision,
    /// Night Vision, extended
    LongNightVision,
    /// Invisibility
    Invisibility,
    /// Invisibility, extended
    LongInvisibility,
    /// Leaping
    Leaping,
    /// Leaping, extended
    LongLeaping,
    /// Leaping, enhanced
    StrongLeaping,
    /// Fire Resistance
    FireResistance,
    /// Fire Resistance, extended
    LongFireResistance,
    /// Swiftness
    Swiftness,
    /// Swiftness, extended
    LongSwiftness,
    /// Swiftness, enhanced
    StrongSwiftness,
    /// Slowness
    Slowness,
    /// Slowness, extended
    LongSlowness,
    /// Slowness, enhanced
    StrongSlowness,
    /// Turtle Master
    TurtleMaster,
    /// Turtle Master, extended
    LongTurtleMaster,
    /// Turtle Master, enhanced
    StrongTurtleMaster,
    /// Water Breathing
    WaterBreathing,
    /// Water Breathing, extended
    LongWaterBreathing,
    /// Healing
    Healing,
    /// Healing, enhanced
    StrongHealing,
    /// Harming
    Harming,
    /// Harming, enhanced
    StrongHarming,
    /// Poison
    Poison,
    /// Poison, extended
    LongPoison,
    /// Poison, enhanced
    StrongPoison,
    /// Regeneration
    Regeneration,
    /// Regeneration, extended
    LongRegeneration,
    /// Regeneration, enhanced
    StrongRegeneration,
    /// Strength
    Strength,
    /// Strength, extended
    LongStrength,
    /// Strength, enhanced
    StrongStrength,
    /// Weakness
    Weakness,
    /// Weakness, extended
    LongWeakness,
    /// Slow Falling
    SlowFalling,
    /// Slow Falling, extended
    LongSlowFalling,
}

impl PotionKind {
    /// Player-visible name of a drinkable bottle of this sub-type.
    pub fn display_name(self) -> &'static str {
        use PotionKind::*;
        match self {
            Water => "Water Bottle",
            Mundane => "Mundane Potion",
            Thick => "Thick Potion",
            Awkward => "Awkward Potion",
            NightVision | LongNightVision => "Potion of Night Vision",
            Invisibility | LongInvisibility => "Potion of Invisibility",
            Leaping | LongLeaping | StrongLeaping => "Potion of Leaping",
            FireResistance | LongFireResistance => "Potion of Fire Resistance",
            Swiftness | LongSwiftness | StrongSwiftness => "Potion of Swiftness",
            Slowness | LongSlowness | StrongSlowness => "Potion of Slowness",
            TurtleMaster | LongTurtleMaster | StrongTurtleMaster => {
                "Potion of the Turtle Master"
            }
            WaterBreathing | LongWaterBreathing => "Potion of Water Breathing",
            Healing | StrongHealing => "Potion of Healing",
            Harming | StrongHarming => "Potion of Harming",
            Poison | LongPoison | StrongPoison => "Potion of Poison",
            Regeneration | LongRegeneration | StrongRegeneration => "Potion of Regeneration",
            Strength | LongStrength | StrongStrength => "Potion of Strength",
            Weakness | LongWeakness => "Potion of Weakness",
            SlowFalling | LongSlowFalling => "Potion of Slow Falling",
        }
    }
}
