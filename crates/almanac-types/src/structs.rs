//! Snapshot structs describing derived calendar state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CropType, Season, Weather};
use crate::ids::EventId;

// ---------------------------------------------------------------------------
// CalendarSnapshot
// ---------------------------------------------------------------------------

/// Every derived calendar value for a single instant.
///
/// Produced by the calendar facade and handed to presentation layers. All
/// fields are derived from `elapsed_seconds`; none are stored independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CalendarSnapshot {
    /// Elapsed in-game seconds since the calendar epoch.
    pub elapsed_seconds: u64,
    /// Elapsed in-game days since the calendar epoch.
    pub total_days: u64,
    /// Minute within the hour (0-59).
    pub minute: u64,
    /// Minute within the hour rounded down to a multiple of ten.
    pub flat_minutes: u64,
    /// Hour within the day (0-23).
    pub hour: u64,
    /// Position within the 24000-tick day cycle.
    pub ingame_time: u64,
    /// Day within the season (1-based).
    pub day: u64,
    /// Current season.
    pub season: Season,
    /// Display name of the current season.
    pub season_name: String,
    /// Current year (1-based).
    pub year: u64,
    /// Chance of rain for the current season, in percent.
    pub rain_chance: i32,
    /// Derived weather for the current day.
    pub weather: Weather,
    /// Current farming-contest event.
    pub event_id: EventId,
    /// Crops featured in the current farming contest.
    pub contest_crops: [CropType; 3],
}

impl CalendarSnapshot {
    /// Whether precipitation is falling (rain or snow).
    pub const fn is_raining(&self) -> bool {
        matches!(self.weather, Weather::Rain | Weather::Snow)
    }

    /// Whether the precipitation is snow.
    pub const fn is_snowing(&self) -> bool {
        matches!(self.weather, Weather::Snow)
    }
}
