//! Type-safe identifier wrappers.
//!
//! Farming contests are keyed by an [`EventId`]: one event spans three
//! consecutive in-game days, so the id is `floor(total_days / 3)`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// In-game days covered by one farming-contest event.
pub const DAYS_PER_EVENT: u64 = 3;

/// Identifier of a farming-contest event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct EventId(pub u64);

impl EventId {
    /// Return the event containing the given elapsed in-game day.
    // DAYS_PER_EVENT is a non-zero constant.
    #[allow(clippy::arithmetic_side_effects)]
    pub const fn from_total_days(total_days: u64) -> Self {
        Self(total_days / DAYS_PER_EVENT)
    }

    /// Return the inner `u64` value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EventId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<EventId> for u64 {
    fn from(id: EventId) -> Self {
        id.0
    }
}
