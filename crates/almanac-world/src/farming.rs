//! Farming-contest scheduling: event identity and contest crop selection.
//!
//! One contest runs per [`EventId`] (three in-game days). The featured crops
//! are a seeded shuffle of [`CropType::ALL`]:
//!
//! 1. `seed = event_id ^ 0x9E3779B97F4A7C15` as a 64-bit two's-complement value
//! 2. a [`JavaRandom`] is seeded with it
//! 3. [`CropType::ALL`] is shuffled with a descending Fisher-Yates pass
//! 4. the first [`CONTEST_CROP_COUNT`] crops are featured
//!
//! The XOR constant only spreads consecutive event ids across the
//! generator's state space.

use almanac_types::{CropType, EventId};
use tracing::trace;

use crate::rng::{JavaRandom, seed_from_u64};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Golden-ratio constant combined with the event id by XOR before seeding.
pub const CROP_SEED_DISPERSION: u64 = 0x9E37_79B9_7F4A_7C15;

/// Number of crops featured per contest.
pub const CONTEST_CROP_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Event identity
// ---------------------------------------------------------------------------

/// Return the contest event containing the given elapsed in-game day.
pub const fn event_id(total_days: u64) -> EventId {
    EventId::from_total_days(total_days)
}

// ---------------------------------------------------------------------------
// Crop selection
// ---------------------------------------------------------------------------

/// Return the seed used for the crop shuffle of an event.
pub const fn crop_seed(event: EventId) -> i64 {
    seed_from_u64(event.into_inner() ^ CROP_SEED_DISPERSION)
}

/// Return the full shuffled crop order for an event.
pub fn shuffled_crops(event: EventId) -> [CropType; 10] {
    let mut rng = JavaRandom::new(crop_seed(event));
    let mut crops = CropType::ALL;
    rng.shuffle(&mut crops);
    crops
}

/// Return the crops featured in the contest for an event.
pub fn contest_crops(event: EventId) -> [CropType; CONTEST_CROP_COUNT] {
    let [first, second, third, ..] = shuffled_crops(event);
    let featured = [first, second, third];
    trace!(event_id = %event, crops = ?featured, "Selected contest crops");
    featured
}
