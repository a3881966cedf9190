//! Calendar clock: elapsed in-game time and its derived counters.
//!
//! The clock converts wall-clock instants into elapsed in-game seconds
//! ("`SkyBlock` time") and derives minutes, hours, days, seasons, and years
//! from that single counter.
//!
//! # Design Principles
//!
//! - The elapsed-seconds counter is the source of truth. Every other value
//!   is derived from it and never stored independently.
//! - All derivations use checked arithmetic (no silent overflow).
//! - Lengths are validated once at construction, so derivations never
//!   divide by zero.

use almanac_types::Season;

use crate::config::CalendarConfig;

/// Seconds per in-game minute.
const SECONDS_PER_MINUTE: u64 = 60;

/// Minutes per in-game hour.
const MINUTES_PER_HOUR: u64 = 60;

/// Hours per in-game day.
const HOURS_PER_DAY: u64 = 24;

/// Granularity of [`CalendarClock::flat_minutes`].
const FLAT_MINUTE_STEP: u64 = 10;

/// Milliseconds per game tick when deriving the in-game time of day.
const MILLIS_PER_GAME_TICK: u64 = 50;

/// Game ticks per full day cycle.
const GAME_TICKS_PER_DAY: u64 = 24_000;

/// Offset of the day cycle in game ticks (day starts at 6000).
const GAME_TICK_OFFSET: u64 = 6_000;

/// Errors that can occur during clock operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    /// Invalid calendar configuration (e.g. zero-length season).
    #[error("invalid calendar configuration: {reason}")]
    InvalidConfig {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },

    /// A season index does not name one of the four seasons.
    #[error("season index {index} is out of range")]
    InvalidSeason {
        /// The offending index.
        index: u64,
    },

    /// The instant lies before the calendar epoch.
    #[error("instant {unix_seconds}s lies before the calendar epoch")]
    BeforeEpoch {
        /// The rejected Unix timestamp, in seconds.
        unix_seconds: i64,
    },

    /// A time computation overflowed.
    #[error("calendar time overflow")]
    Overflow,
}

/// Calendar clock deriving temporal counters from elapsed in-game seconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarClock {
    /// Unix timestamp (seconds) at which in-game time starts.
    start_of_times: i64,

    /// In-game seconds per real second.
    time_multiplier: u64,

    /// In-game days per season.
    season_length: u64,

    /// Seasons per year.
    year_length: u64,
}

impl CalendarClock {
    /// Create a clock from a calendar configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if any length or the time
    /// multiplier is zero.
    pub fn new(config: &CalendarConfig) -> Result<Self, ClockError> {
        Self::from_parts(
            config.start_of_times,
            config.time_multiplier,
            config.season_length,
            config.year_length,
        )
    }

    /// Create a clock from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if any length or the time
    /// multiplier is zero.
    pub fn from_parts(
        start_of_times: i64,
        time_multiplier: u64,
        season_length: u64,
        year_length: u64,
    ) -> Result<Self, ClockError> {
        if time_multiplier == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "time_multiplier must be at least 1".to_owned(),
            });
        }
        if season_length == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "season_length must be at least 1".to_owned(),
            });
        }
        if year_length == 0 {
            return Err(ClockError::InvalidConfig {
                reason: "year_length must be at least 1".to_owned(),
            });
        }
        Ok(Self {
            start_of_times,
            time_multiplier,
            season_length,
            year_length,
        })
    }

    /// Return the Unix timestamp (seconds) of the calendar epoch.
    pub const fn start_of_times(&self) -> i64 {
        self.start_of_times
    }

    /// Return the number of in-game days per season.
    pub const fn season_length(&self) -> u64 {
        self.season_length
    }

    /// Return the number of seasons per year.
    pub const fn year_length(&self) -> u64 {
        self.year_length
    }

    // -----------------------------------------------------------------------
    // Wall clock -> elapsed in-game time
    // -----------------------------------------------------------------------

    /// Convert a Unix timestamp (seconds) to elapsed in-game seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::BeforeEpoch`] for instants before the epoch, or
    /// [`ClockError::Overflow`] if the scaled value does not fit in a `u64`.
    pub fn skyblock_time(&self, unix_seconds: i64) -> Result<u64, ClockError> {
        let elapsed = unix_seconds
            .checked_sub(self.start_of_times)
            .ok_or(ClockError::Overflow)?;
        let elapsed =
            u64::try_from(elapsed).map_err(|_err| ClockError::BeforeEpoch { unix_seconds })?;
        elapsed
            .checked_mul(self.time_multiplier)
            .ok_or(ClockError::Overflow)
    }

    /// Convert a Unix timestamp (milliseconds) to elapsed in-game
    /// milliseconds.
    ///
    /// # Errors
    ///
    /// Same conditions as [`CalendarClock::skyblock_time`].
    pub fn skyblock_time_millis(&self, unix_millis: i64) -> Result<u64, ClockError> {
        let start_millis = self
            .start_of_times
            .checked_mul(1_000)
            .ok_or(ClockError::Overflow)?;
        let elapsed = unix_millis
            .checked_sub(start_millis)
            .ok_or(ClockError::Overflow)?;
        let elapsed = u64::try_from(elapsed).map_err(|_err| ClockError::BeforeEpoch {
            unix_seconds: unix_millis.div_euclid(1_000),
        })?;
        elapsed
            .checked_mul(self.time_multiplier)
            .ok_or(ClockError::Overflow)
    }

    // -----------------------------------------------------------------------
    // Elapsed counters
    //
    // Divisors below are non-zero constants, so plain operators cannot
    // panic or overflow.
    // -----------------------------------------------------------------------

    /// Elapsed in-game minutes.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn as_minutes(time: u64) -> u64 {
        time / SECONDS_PER_MINUTE
    }

    /// Elapsed in-game hours.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn as_hours(time: u64) -> u64 {
        Self::as_minutes(time) / MINUTES_PER_HOUR
    }

    /// Elapsed in-game days.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn as_days(time: u64) -> u64 {
        Self::as_hours(time) / HOURS_PER_DAY
    }

    /// Elapsed seasons.
    pub fn as_seasons(&self, time: u64) -> u64 {
        // season_length >= 1 is guaranteed by the constructor.
        Self::as_days(time)
            .checked_div(self.season_length)
            .unwrap_or(0)
    }

    /// Elapsed years.
    pub fn as_years(&self, time: u64) -> u64 {
        self.as_seasons(time)
            .checked_div(self.year_length)
            .unwrap_or(0)
    }

    // -----------------------------------------------------------------------
    // Cyclic positions
    // -----------------------------------------------------------------------

    /// Minute within the hour (0-59).
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn current_minute(time: u64) -> u64 {
        Self::as_minutes(time) % MINUTES_PER_HOUR
    }

    /// Minute within the hour rounded down to a multiple of ten.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn flat_minutes(time: u64) -> u64 {
        let minute = Self::current_minute(time);
        minute - minute % FLAT_MINUTE_STEP
    }

    /// Hour within the day (0-23).
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn current_hour(time: u64) -> u64 {
        Self::as_hours(time) % HOURS_PER_DAY
    }

    /// Day within the season (1-based).
    pub fn current_day(&self, time: u64) -> u64 {
        Self::as_days(time)
            .checked_rem(self.season_length)
            .unwrap_or(0)
            .saturating_add(1)
    }

    /// Zero-based index of the season within the year.
    pub fn current_season_index(&self, time: u64) -> u64 {
        self.as_seasons(time)
            .checked_rem(self.year_length)
            .unwrap_or(0)
    }

    /// The current season.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidSeason`] when a year longer than four
    /// seasons reaches an index with no season.
    pub fn current_season(&self, time: u64) -> Result<Season, ClockError> {
        let index = self.current_season_index(time);
        Season::from_index(index).ok_or(ClockError::InvalidSeason { index })
    }

    /// The current year (1-based).
    pub fn current_year(&self, time: u64) -> u64 {
        self.as_years(time).saturating_add(1)
    }

    /// Position within the 24000-tick day cycle for elapsed in-game
    /// milliseconds.
    ///
    /// Ticks are whole and the result is always in `0..24000`; partial
    /// ticks are dropped instead of yielding fractional or negative values.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn ingame_time(time_millis: u64) -> u64 {
        let ticks = (time_millis / MILLIS_PER_GAME_TICK) % GAME_TICKS_PER_DAY;
        (ticks + (GAME_TICKS_PER_DAY - GAME_TICK_OFFSET)) % GAME_TICKS_PER_DAY
    }
}
