//! Enumeration types for the Almanac calendar.
//!
//! The declaration order of [`CropType`] and the discriminants of [`Stage`]
//! are part of the deterministic contract: both feed directly into the
//! seeded generator, so reordering either silently changes every derived
//! value.

use core::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Seasons
// ---------------------------------------------------------------------------

/// A season in the annual cycle (93 in-game days per season by default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Season {
    /// Rain chance 4%.
    Spring,
    /// Rain chance 2%.
    Summer,
    /// Rain chance 6%.
    Autumn,
    /// Rain chance 8%; rain falls as snow.
    Winter,
}

impl Season {
    /// All seasons in calendar order.
    pub const ALL: [Self; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// Map a zero-based season index to a season.
    ///
    /// Returns `None` for any index outside `0..4`.
    pub const fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Spring),
            1 => Some(Self::Summer),
            2 => Some(Self::Autumn),
            3 => Some(Self::Winter),
            _ => None,
        }
    }

    /// Zero-based position of this season within the year.
    pub const fn index(self) -> u64 {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Autumn => 2,
            Self::Winter => 3,
        }
    }
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Weather on a given in-game day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Weather {
    /// No precipitation.
    Clear,
    /// Rain outside of winter.
    Rain,
    /// Rain during winter.
    Snow,
}

// ---------------------------------------------------------------------------
// Contest crops
// ---------------------------------------------------------------------------

/// A crop that can be featured in a farming contest.
///
/// The declaration order is the index space the contest shuffle operates
/// over. It must never be reordered or alphabetized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "bindings/")]
pub enum CropType {
    /// Wheat.
    Wheat,
    /// Sugar cane.
    SugarCane,
    /// Carrot.
    Carrot,
    /// Potato.
    Potato,
    /// Melon.
    Melon,
    /// Pumpkin.
    Pumpkin,
    /// Cocoa beans.
    CocoaBeans,
    /// Cactus.
    Cactus,
    /// Mushroom.
    Mushroom,
    /// Beetroot.
    Beetroot,
}

impl CropType {
    /// Every crop in declaration order.
    pub const ALL: [Self; 10] = [
        Self::Wheat,
        Self::SugarCane,
        Self::Carrot,
        Self::Potato,
        Self::Melon,
        Self::Pumpkin,
        Self::CocoaBeans,
        Self::Cactus,
        Self::Mushroom,
        Self::Beetroot,
    ];

    /// The canonical upper-case identifier, e.g. `SUGAR_CANE`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Wheat => "WHEAT",
            Self::SugarCane => "SUGAR_CANE",
            Self::Carrot => "CARROT",
            Self::Potato => "POTATO",
            Self::Melon => "MELON",
            Self::Pumpkin => "PUMPKIN",
            Self::CocoaBeans => "COCOA_BEANS",
            Self::Cactus => "CACTUS",
            Self::Mushroom => "MUSHROOM",
            Self::Beetroot => "BEETROOT",
        }
    }
}

impl fmt::Display for CropType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Sampling stages
// ---------------------------------------------------------------------------

/// Named draw slots for values derived from a single per-day seed.
///
/// A stage selects how many draws are discarded before the returned one.
/// Slots 5 and 6 are reserved and have no name yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Stage {
    /// Rain chance roll.
    RainChance,
    /// Whether it is raining on the day.
    IsRaining,
    /// Temperature roll.
    Temperature,
    /// Whether colder temperatures are preferred.
    PreferColder,
    /// General purpose randomized value.
    Randomized,
    /// Event roll.
    Event,
}

impl Stage {
    /// The stage ordinal, i.e. the number of draws discarded before the
    /// returned one.
    pub const fn index(self) -> u32 {
        match self {
            Self::RainChance => 0,
            Self::IsRaining => 1,
            Self::Temperature => 2,
            Self::PreferColder => 3,
            Self::Randomized => 4,
            Self::Event => 7,
        }
    }
}

impl From<Stage> for u32 {
    fn from(stage: Stage) -> Self {
        stage.index()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn crop_order_is_fixed() {
        let names: Vec<&str> = CropType::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(
            names,
            [
                "WHEAT",
                "SUGAR_CANE",
                "CARROT",
                "POTATO",
                "MELON",
                "PUMPKIN",
                "COCOA_BEANS",
                "CACTUS",
                "MUSHROOM",
                "BEETROOT",
            ]
        );
    }

    #[test]
    fn crop_serializes_as_upper_snake() {
        let json = serde_json::to_string(&CropType::CocoaBeans).unwrap();
        assert_eq!(json, "\"COCOA_BEANS\"");
        let back: CropType = serde_json::from_str("\"SUGAR_CANE\"").unwrap();
        assert_eq!(back, CropType::SugarCane);
    }

    #[test]
    fn season_index_round_trips() {
        for season in Season::ALL {
            assert_eq!(Season::from_index(season.index()), Some(season));
        }
        assert_eq!(Season::from_index(4), None);
    }

    #[test]
    fn stage_ordinals_match_reserved_slots() {
        assert_eq!(Stage::RainChance.index(), 0);
        assert_eq!(Stage::IsRaining.index(), 1);
        assert_eq!(Stage::Temperature.index(), 2);
        assert_eq!(Stage::PreferColder.index(), 3);
        assert_eq!(Stage::Randomized.index(), 4);
        assert_eq!(u32::from(Stage::Event), 7);
    }
}
