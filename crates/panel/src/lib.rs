#![warn(missing_docs)]
//! Geometry and interaction state for the brewing-guide panel.
//!
//! Everything here is pure: content derivation, row layout, the row-unit
//! scroll state machine, and pointer hit-testing. Painting and event
//! plumbing live in the host binary.

pub mod content;
pub mod hit;
pub mod layout;
pub mod scroll;

pub use content::{PanelContent, Section};
pub use hit::Hit;
pub use scroll::{ScrollState, ScrollbarGeometry};
