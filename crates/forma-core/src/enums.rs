//! Domain enumerations and the read-only enum directory.
//!
//! Each enum serializes as its symbolic value and registers the same values
//! through [`describe_enum!`](crate::describe_enum), so schemas report
//! `Enum` fields by name and the directory can list their values.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::describe_enum;
use crate::descriptor::DescribeEnum;

// ---------------------------------------------------------------------------
// Requirement
// ---------------------------------------------------------------------------

/// Player attribute an offer requirement is evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum Requirement {
    MinLevel,
    DaysSinceRegistration,
    PlayTimeHours,
    LastLoginDaysAgo,
    HasSubscription,
    Region,
    HasPremiumAccess,
}

describe_enum!(Requirement[
    "minLevel",
    "daysSinceRegistration",
    "playTimeHours",
    "lastLoginDaysAgo",
    "hasSubscription",
    "region",
    "hasPremiumAccess",
]);

impl Requirement {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MinLevel => "minLevel",
            Self::DaysSinceRegistration => "daysSinceRegistration",
            Self::PlayTimeHours => "playTimeHours",
            Self::LastLoginDaysAgo => "lastLoginDaysAgo",
            Self::HasSubscription => "hasSubscription",
            Self::Region => "region",
            Self::HasPremiumAccess => "hasPremiumAccess",
        }
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TradeType
// ---------------------------------------------------------------------------

/// Currency or item granted by a reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    Coin,
    Gem,
    Life,
    Booster,
}

describe_enum!(TradeType["COIN", "GEM", "LIFE", "BOOSTER"]);

impl TradeType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coin => "COIN",
            Self::Gem => "GEM",
            Self::Life => "LIFE",
            Self::Booster => "BOOSTER",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventType
// ---------------------------------------------------------------------------

/// Live-ops event a reward is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    Cascade,
    DailyLogin,
    Tournament,
    Season,
}

describe_enum!(EventType["CASCADE", "DAILY_LOGIN", "TOURNAMENT", "SEASON"]);

impl EventType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cascade => "CASCADE",
            Self::DailyLogin => "DAILY_LOGIN",
            Self::Tournament => "TOURNAMENT",
            Self::Season => "SEASON",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Enum directory
// ---------------------------------------------------------------------------

/// All known enumerations: name → symbolic values, sorted by name.
#[must_use]
pub fn enum_directory() -> BTreeMap<&'static str, &'static [&'static str]> {
    BTreeMap::from([
        (Requirement::NAME, Requirement::VALUES),
        (TradeType::NAME, TradeType::VALUES),
        (EventType::NAME, EventType::VALUES),
    ])
}
