//! Shared type definitions for the Almanac calendar.
//!
//! This crate is the single source of truth for the values that flow
//! between the deterministic generator, the calendar layer, and the
//! `TypeScript` consumers (via `ts-rs`).
//!
//! # Modules
//!
//! - [`enums`] -- Seasons, weather, contest crops, and sampling stages
//! - [`ids`] -- Farming-contest event identifier
//! - [`structs`] -- Calendar snapshot handed to presentation layers

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{CropType, Season, Stage, Weather};
pub use ids::{DAYS_PER_EVENT, EventId};
pub use structs::CalendarSnapshot;
