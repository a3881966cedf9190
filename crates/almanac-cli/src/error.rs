//! Error types for the Almanac binary.
//!
//! [`CliError`] is the top-level error type that wraps all possible
//! failure modes during startup and output.

/// Top-level error for the Almanac binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: almanac_core::ConfigError,
    },

    /// Calendar construction or derivation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: almanac_core::ClockError,
    },

    /// Output serialization failed.
    #[error("output error: {source}")]
    Output {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// A command-line argument could not be parsed.
    #[error("invalid argument {value:?}: expected a non-negative event id")]
    InvalidArgument {
        /// The rejected argument.
        value: String,
    },
}
