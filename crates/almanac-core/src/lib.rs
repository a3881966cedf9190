//! Calendar clock, configuration, and wall-clock facade for the Almanac.
//!
//! This crate turns real time into the seeds the deterministic core
//! consumes, and the core's outputs into calendar answers.
//!
//! # Modules
//!
//! - [`clock`] -- Elapsed in-game time and the minute, hour, day, season,
//!   and year counters derived from it.
//! - [`config`] -- Configuration loading from `almanac-config.yaml` into
//!   strongly-typed structs, including season display names.
//! - [`calendar`] -- [`Calendar`] facade over a [`TimeSource`].
//!
//! [`Calendar`]: calendar::Calendar
//! [`TimeSource`]: calendar::TimeSource

pub mod calendar;
pub mod clock;
pub mod config;

pub use calendar::{Calendar, FixedTime, SystemTime, TimeSource};
pub use clock::{CalendarClock, ClockError};
pub use config::{AlmanacConfig, CalendarConfig, ConfigError, LoggingConfig, SeasonNames};
