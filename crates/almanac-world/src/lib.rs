//! Deterministic world-state derivation for the Almanac calendar.
//!
//! Everything in this crate is a pure function of its inputs: each
//! operation builds its own generator from a derived seed and drops it on
//! return, so calls can run in parallel without coordination.
//!
//! # Modules
//!
//! - [`rng`] -- `java.util.Random`-compatible 48-bit generator, bounded
//!   sampling, and the seeded shuffle.
//! - [`stage`] -- Stage sampling: many values from one seed via discarded
//!   draws.
//! - [`environment`] -- Season rain chances and per-day weather.
//! - [`farming`] -- Farming-contest event ids and contest crop selection.
//! - [`error`] -- Error types for invalid sampling arguments.

pub mod environment;
pub mod error;
pub mod farming;
pub mod rng;
pub mod stage;

// Re-export primary types at crate root.
pub use environment::{is_raining, is_snowing, rain_chance, weather};
pub use error::RngError;
pub use farming::{CONTEST_CROP_COUNT, CROP_SEED_DISPERSION, contest_crops, event_id};
pub use rng::JavaRandom;
pub use stage::{boolean_from_percentage, random_int, sample_at_stage};
