//! Command-line entry point for the Almanac calendar.
//!
//! Prints the current calendar state as JSON: day, season, year, weather,
//! and the crops of the running farming contest. With an event id argument
//! it prints the contest crops for that event instead.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `ALMANAC_CONFIG` (default `almanac-config.yaml`)
//! 2. Initialize structured logging (tracing) at the configured level
//! 3. Build a calendar on the system clock
//! 4. Print the requested JSON document to stdout

mod error;

use std::path::{Path, PathBuf};

use almanac_core::{AlmanacConfig, Calendar};
use almanac_types::{CropType, EventId};
use almanac_world::farming::CONTEST_CROP_COUNT;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "almanac-config.yaml";

/// Contest crops for an explicitly requested event.
#[derive(Debug, Serialize)]
struct EventCrops {
    /// The requested event.
    event_id: EventId,
    /// Crops featured in that event's contest.
    crops: [CropType; CONTEST_CROP_COUNT],
}

/// Application entry point.
///
/// # Errors
///
/// Returns an error if configuration loading, calendar derivation, or
/// output serialization fails.
fn main() -> Result<(), CliError> {
    let config_path = config_path();
    let config = load_config(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    if !config_path.exists() {
        info!(path = %config_path.display(), "Config file not found, using defaults");
    }
    info!(
        start_of_times = config.calendar.start_of_times,
        time_multiplier = config.calendar.time_multiplier,
        season_length = config.calendar.season_length,
        year_length = config.calendar.year_length,
        "Configuration loaded"
    );

    if let Some(arg) = std::env::args().nth(1) {
        let event_id = parse_event_id(&arg)?;
        let output = EventCrops {
            event_id,
            crops: almanac_world::contest_crops(event_id),
        };
        info!(event_id = %event_id, crops = ?output.crops, "Contest crops derived");
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let calendar = Calendar::system(&config)?;
    let snapshot = calendar.snapshot()?;
    info!(
        year = snapshot.year,
        season = %snapshot.season_name,
        day = snapshot.day,
        weather = ?snapshot.weather,
        event_id = %snapshot.event_id,
        "Calendar snapshot derived"
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

/// Resolve the configuration path from `ALMANAC_CONFIG` or the default.
fn config_path() -> PathBuf {
    std::env::var_os("ALMANAC_CONFIG")
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<AlmanacConfig, CliError> {
    if path.exists() {
        return Ok(AlmanacConfig::from_file(path)?);
    }
    let mut config = AlmanacConfig::default();
    config.logging.apply_env_overrides();
    Ok(config)
}

/// Parse an event id argument.
fn parse_event_id(arg: &str) -> Result<EventId, CliError> {
    arg.trim()
        .parse::<u64>()
        .map(EventId)
        .map_err(|_err| CliError::InvalidArgument {
            value: arg.to_owned(),
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_event_ids() {
        assert_eq!(parse_event_id("0").unwrap(), EventId(0));
        assert_eq!(parse_event_id(" 12345 ").unwrap(), EventId(12_345));
    }

    #[test]
    fn rejects_negative_and_garbage() {
        assert!(matches!(
            parse_event_id("-1"),
            Err(CliError::InvalidArgument { .. })
        ));
        assert!(matches!(
            parse_event_id("wheat"),
            Err(CliError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let config = load_config(Path::new("no/such/almanac-config.yaml")).unwrap();
        assert_eq!(config.calendar, almanac_core::CalendarConfig::default());
    }

    #[test]
    fn event_output_shape() {
        let output = EventCrops {
            event_id: EventId(0),
            crops: almanac_world::contest_crops(EventId(0)),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["event_id"], 0);
        assert_eq!(json["crops"][0], "COCOA_BEANS");
    }
}
