//! Calendar facade bound to a time source.
//!
//! [`Calendar`] combines the [`CalendarClock`] arithmetic, the configured
//! [`SeasonNames`], and a [`TimeSource`] into "what is it now" queries. It
//! is the only place where the current instant enters the system; the
//! deterministic core in `almanac-world` only ever sees derived seeds.

use almanac_types::{CalendarSnapshot, CropType, EventId, Season, Weather};
use almanac_world::farming::CONTEST_CROP_COUNT;
use almanac_world::{contest_crops, environment, event_id};
use tracing::debug;

use crate::clock::{CalendarClock, ClockError};
use crate::config::{AlmanacConfig, SeasonNames};

// ---------------------------------------------------------------------------
// Time sources
// ---------------------------------------------------------------------------

/// Source of the current wall-clock instant.
pub trait TimeSource {
    /// Milliseconds since the Unix epoch.
    fn unix_millis(&self) -> i64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

impl TimeSource for SystemTime {
    fn unix_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// A frozen instant, for replaying a specific moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTime {
    /// Milliseconds since the Unix epoch.
    pub unix_millis: i64,
}

impl FixedTime {
    /// Freeze time at a Unix timestamp in seconds.
    pub const fn from_unix_seconds(seconds: i64) -> Self {
        Self {
            unix_millis: seconds.saturating_mul(1_000),
        }
    }
}

impl TimeSource for FixedTime {
    fn unix_millis(&self) -> i64 {
        self.unix_millis
    }
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

/// Calendar answering questions about the current instant.
#[derive(Debug, Clone)]
pub struct Calendar<T = SystemTime> {
    /// Arithmetic over elapsed in-game time.
    clock: CalendarClock,

    /// Season display names.
    names: SeasonNames,

    /// Where "now" comes from.
    source: T,
}

impl Calendar<SystemTime> {
    /// Create a calendar on the system clock.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the calendar configuration
    /// is invalid.
    pub fn system(config: &AlmanacConfig) -> Result<Self, ClockError> {
        Self::with_source(config, SystemTime)
    }
}

impl<T: TimeSource> Calendar<T> {
    /// Create a calendar reading the current instant from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidConfig`] if the calendar configuration
    /// is invalid.
    pub fn with_source(config: &AlmanacConfig, source: T) -> Result<Self, ClockError> {
        Ok(Self {
            clock: CalendarClock::new(&config.calendar)?,
            names: config.seasons.clone(),
            source,
        })
    }

    /// Return the underlying clock.
    pub const fn clock(&self) -> &CalendarClock {
        &self.clock
    }

    /// Return the configured season names.
    pub const fn season_names(&self) -> &SeasonNames {
        &self.names
    }

    /// Rename the season at a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidSeason`] if `index` is not in `0..4`.
    pub fn set_season_name(&mut self, index: u64, name: impl Into<String>) -> Result<(), ClockError> {
        self.names.set(index, name)
    }

    /// Elapsed in-game seconds at the current instant.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::BeforeEpoch`] if the current instant precedes
    /// the calendar epoch, or [`ClockError::Overflow`].
    pub fn elapsed_seconds(&self) -> Result<u64, ClockError> {
        let unix_seconds = self.source.unix_millis().div_euclid(1_000);
        self.clock.skyblock_time(unix_seconds)
    }

    /// Elapsed in-game milliseconds at the current instant.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`].
    pub fn elapsed_millis(&self) -> Result<u64, ClockError> {
        self.clock.skyblock_time_millis(self.source.unix_millis())
    }

    /// Elapsed in-game days at the current instant.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`].
    pub fn total_days(&self) -> Result<u64, ClockError> {
        self.elapsed_seconds().map(CalendarClock::as_days)
    }

    /// Day within the current season (1-based).
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`].
    pub fn current_day(&self) -> Result<u64, ClockError> {
        Ok(self.clock.current_day(self.elapsed_seconds()?))
    }

    /// The current season.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`], plus
    /// [`ClockError::InvalidSeason`].
    pub fn current_season(&self) -> Result<Season, ClockError> {
        self.clock.current_season(self.elapsed_seconds()?)
    }

    /// Display name of the current season.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::current_season`].
    pub fn current_season_name(&self) -> Result<&str, ClockError> {
        Ok(self.names.name(self.current_season()?))
    }

    /// The current year (1-based).
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`].
    pub fn current_year(&self) -> Result<u64, ClockError> {
        Ok(self.clock.current_year(self.elapsed_seconds()?))
    }

    /// Position within the 24000-tick day cycle.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`].
    pub fn ingame_time(&self) -> Result<u64, ClockError> {
        self.elapsed_millis().map(CalendarClock::ingame_time)
    }

    /// Rain chance of the current season, in percent.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::current_season`].
    pub fn rain_chance(&self) -> Result<i32, ClockError> {
        self.current_season().map(environment::rain_chance)
    }

    /// Whether it is raining today.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::current_season`].
    pub fn is_raining(&self) -> Result<bool, ClockError> {
        let time = self.elapsed_seconds()?;
        let season = self.clock.current_season(time)?;
        Ok(environment::is_raining(CalendarClock::as_days(time), season))
    }

    /// Whether it is snowing today.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::current_season`].
    pub fn is_snowing(&self) -> Result<bool, ClockError> {
        let time = self.elapsed_seconds()?;
        let season = self.clock.current_season(time)?;
        Ok(environment::is_snowing(CalendarClock::as_days(time), season))
    }

    /// Today's weather.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::current_season`].
    pub fn weather(&self) -> Result<Weather, ClockError> {
        let time = self.elapsed_seconds()?;
        let season = self.clock.current_season(time)?;
        Ok(environment::weather(CalendarClock::as_days(time), season))
    }

    /// The farming-contest event running now.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`].
    pub fn event_id_now(&self) -> Result<EventId, ClockError> {
        self.total_days().map(event_id)
    }

    /// Crops featured in the farming contest running now.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::elapsed_seconds`].
    pub fn crops_now(&self) -> Result<[CropType; CONTEST_CROP_COUNT], ClockError> {
        self.event_id_now().map(contest_crops)
    }

    /// Capture every derived value for the current instant.
    ///
    /// All values are derived from a single reading of the time source.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Calendar::current_season`].
    pub fn snapshot(&self) -> Result<CalendarSnapshot, ClockError> {
        let unix_millis = self.source.unix_millis();
        let elapsed_seconds = self.clock.skyblock_time(unix_millis.div_euclid(1_000))?;
        let mut snapshot = self.snapshot_at(elapsed_seconds)?;
        // Sub-second precision for the day cycle.
        snapshot.ingame_time =
            CalendarClock::ingame_time(self.clock.skyblock_time_millis(unix_millis)?);
        debug!(
            elapsed_seconds,
            season = ?snapshot.season,
            day = snapshot.day,
            event_id = %snapshot.event_id,
            "Calendar snapshot taken"
        );
        Ok(snapshot)
    }

    /// Derive the snapshot for a given number of elapsed in-game seconds.
    ///
    /// The in-game time of day is derived at whole-second precision.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidSeason`] if the season index has no
    /// season.
    pub fn snapshot_at(&self, elapsed_seconds: u64) -> Result<CalendarSnapshot, ClockError> {
        let season = self.clock.current_season(elapsed_seconds)?;
        let total_days = CalendarClock::as_days(elapsed_seconds);
        let event = event_id(total_days);

        Ok(CalendarSnapshot {
            elapsed_seconds,
            total_days,
            minute: CalendarClock::current_minute(elapsed_seconds),
            flat_minutes: CalendarClock::flat_minutes(elapsed_seconds),
            hour: CalendarClock::current_hour(elapsed_seconds),
            ingame_time: CalendarClock::ingame_time(elapsed_seconds.saturating_mul(1_000)),
            day: self.clock.current_day(elapsed_seconds),
            season,
            season_name: self.names.name(season).to_owned(),
            year: self.clock.current_year(elapsed_seconds),
            rain_chance: environment::rain_chance(season),
            weather: environment::weather(total_days, season),
            event_id: event,
            contest_crops: contest_crops(event),
        })
    }
}
