//! Brewing-stand screen model: slot map, availability checks, and
//! best-effort transfer planning.

pub mod availability;
pub mod planner;
pub mod slots;

pub use availability::{check_availability, fuel_in_stand, locate, Availability};
pub use planner::{plan, stage_recipe, SlotMove, StageError, TransferPlan};
pub use slots::{SlotProvider, StandSlots};
