//! Weather derivation for the Almanac calendar.
//!
//! Weather is never stored. For a given elapsed in-game day it is derived
//! by rolling a percentage at [`Stage::IsRaining`] with the day count as
//! seed, and comparing against the season's rain chance:
//!
//! | Season | Rain chance |
//! |--------|-------------|
//! | Spring | 4%          |
//! | Summer | 2%          |
//! | Autumn | 6%          |
//! | Winter | 8%          |
//!
//! Rain falling in winter is snow.

use almanac_types::{Season, Stage, Weather};

use crate::rng::seed_from_u64;
use crate::stage::boolean_from_percentage;

/// Chance of rain for a season, in percent.
pub const fn rain_chance(season: Season) -> i32 {
    match season {
        Season::Spring => 4,
        Season::Summer => 2,
        Season::Autumn => 6,
        Season::Winter => 8,
    }
}

/// Whether it rains (or snows) on the given elapsed in-game day.
pub fn is_raining(total_days: u64, season: Season) -> bool {
    boolean_from_percentage(
        seed_from_u64(total_days),
        Stage::IsRaining.index(),
        rain_chance(season),
    )
}

/// Whether it snows on the given elapsed in-game day.
pub fn is_snowing(total_days: u64, season: Season) -> bool {
    season == Season::Winter && is_raining(total_days, season)
}

/// Derive the weather for the given elapsed in-game day.
pub fn weather(total_days: u64, season: Season) -> Weather {
    if !is_raining(total_days, season) {
        Weather::Clear
    } else if season == Season::Winter {
        Weather::Snow
    } else {
        Weather::Rain
    }
}
