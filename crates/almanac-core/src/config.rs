//! Configuration loading and typed config structures for the Almanac.
//!
//! The canonical configuration lives in `almanac-config.yaml`. This module
//! defines strongly-typed structs that mirror the YAML structure, and a
//! loader that reads the file. Every field has a default matching the
//! reference calendar, so an empty file (or no file) is valid.

use std::path::Path;

use almanac_types::Season;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::ClockError;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level Almanac configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AlmanacConfig {
    /// Calendar epoch and lengths.
    #[serde(default)]
    pub calendar: CalendarConfig,

    /// Season display names.
    #[serde(default)]
    pub seasons: SeasonNames,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AlmanacConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `ALMANAC_LOG_LEVEL` overrides `logging.level` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), bytes = contents.len(), "Read config file");
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.logging.apply_env_overrides();
        Ok(config)
    }
}

/// Calendar epoch and cycle lengths.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Unix timestamp (seconds) at which in-game time starts.
    #[serde(default = "default_start_of_times")]
    pub start_of_times: i64,

    /// In-game seconds per real second.
    #[serde(default = "default_time_multiplier")]
    pub time_multiplier: u64,

    /// In-game days per season.
    #[serde(default = "default_season_length")]
    pub season_length: u64,

    /// Seasons per year.
    #[serde(default = "default_year_length")]
    pub year_length: u64,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            start_of_times: default_start_of_times(),
            time_multiplier: default_time_multiplier(),
            season_length: default_season_length(),
            year_length: default_year_length(),
        }
    }
}

/// Display names for the four seasons.
///
/// Names are presentation data only; the deterministic core never reads
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonNames {
    /// Name shown for [`Season::Spring`].
    #[serde(default = "default_spring_name")]
    pub spring: String,

    /// Name shown for [`Season::Summer`].
    #[serde(default = "default_summer_name")]
    pub summer: String,

    /// Name shown for [`Season::Autumn`].
    #[serde(default = "default_autumn_name")]
    pub autumn: String,

    /// Name shown for [`Season::Winter`].
    #[serde(default = "default_winter_name")]
    pub winter: String,
}

impl SeasonNames {
    /// Return the display name of a season.
    pub fn name(&self, season: Season) -> &str {
        match season {
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
            Season::Winter => &self.winter,
        }
    }

    /// Rename the season at a zero-based index.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::InvalidSeason`] if `index` is not in `0..4`.
    pub fn set(&mut self, index: u64, name: impl Into<String>) -> Result<(), ClockError> {
        let season = Season::from_index(index).ok_or(ClockError::InvalidSeason { index })?;
        let slot = match season {
            Season::Spring => &mut self.spring,
            Season::Summer => &mut self.summer,
            Season::Autumn => &mut self.autumn,
            Season::Winter => &mut self.winter,
        };
        *slot = name.into();
        Ok(())
    }
}

impl Default for SeasonNames {
    fn default() -> Self {
        Self {
            spring: default_spring_name(),
            summer: default_summer_name(),
            autumn: default_autumn_name(),
            winter: default_winter_name(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Override the log level with `ALMANAC_LOG_LEVEL` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ALMANAC_LOG_LEVEL") {
            self.level = val;
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

const fn default_start_of_times() -> i64 {
    1_648_800_000
}

const fn default_time_multiplier() -> u64 {
    72
}

const fn default_season_length() -> u64 {
    93
}

const fn default_year_length() -> u64 {
    4
}

fn default_spring_name() -> String {
    "Spring".to_owned()
}

fn default_summer_name() -> String {
    "Summer".to_owned()
}

fn default_autumn_name() -> String {
    "Autumn".to_owned()
}

fn default_winter_name() -> String {
    "Winter".to_owned()
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_uses_defaults() {
        let config = AlmanacConfig::parse("{}").unwrap();
        assert_eq!(config.calendar, CalendarConfig::default());
        assert_eq!(config.calendar.start_of_times, 1_648_800_000);
        assert_eq!(config.calendar.time_multiplier, 72);
        assert_eq!(config.calendar.season_length, 93);
        assert_eq!(config.calendar.year_length, 4);
        assert_eq!(config.seasons, SeasonNames::default());
    }

    #[test]
    fn partial_yaml_keeps_remaining_defaults() {
        let yaml = r"
calendar:
  season_length: 31
seasons:
  autumn: Fall
";
        let config = AlmanacConfig::parse(yaml).unwrap();
        assert_eq!(config.calendar.season_length, 31);
        assert_eq!(config.calendar.year_length, 4);
        assert_eq!(config.seasons.name(Season::Autumn), "Fall");
        assert_eq!(config.seasons.name(Season::Spring), "Spring");
    }

    #[test]
    fn invalid_yaml_is_reported() {
        let result = AlmanacConfig::parse("calendar: [not, a, map]");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = AlmanacConfig::from_file(Path::new("definitely/not/here.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn season_names_can_be_renamed() {
        let mut names = SeasonNames::default();
        names.set(3, "Frost").unwrap();
        assert_eq!(names.name(Season::Winter), "Frost");
        assert_eq!(names.set(4, "Monsoon"), Err(ClockError::InvalidSeason { index: 4 }));
        assert_eq!(names, SeasonNames { winter: "Frost".to_owned(), ..SeasonNames::default() });
    }
}
