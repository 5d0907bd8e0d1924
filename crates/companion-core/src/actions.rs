//! Action Types
//!
//! Care actions are the direct interactions (feed, pet, play); daily
//! actions are the bounded once-per-day tasks tracked by the ledger.
//! Unknown action types are unrepresentable by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

/// A direct care interaction with the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CareAction {
    Feed,
    Pet,
    Play,
}

impl CareAction {
    /// Experience awarded for this interaction.
    pub fn exp_reward(self) -> u32 {
        match self {
            CareAction::Feed => 10,
            CareAction::Pet => 5,
            CareAction::Play => 15,
        }
    }

    /// Health gained: feeding restores more than the generic bonus.
    pub fn health_bonus(self) -> u8 {
        match self {
            CareAction::Feed => 15,
            _ => 5,
        }
    }

    /// Happiness gained: playing restores more than the generic bonus.
    pub fn happiness_bonus(self) -> u8 {
        match self {
            CareAction::Play => 20,
            _ => 7,
        }
    }

    /// Log description, personalized with the companion's name.
    pub fn description(self, name: &str) -> String {
        match self {
            CareAction::Feed => format!("You fed {name} a healthy vegan meal"),
            CareAction::Pet => format!("You showed affection to {name}"),
            CareAction::Play => format!("You played with {name}"),
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CareAction::Feed => write!(f, "feed"),
            CareAction::Pet => write!(f, "pet"),
            CareAction::Play => write!(f, "play"),
        }
    }
}

/// Error type for parsing a care action from its name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown care action: '{0}'")]
pub struct ParseCareActionError(pub String);

impl FromStr for CareAction {
    type Err = ParseCareActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" => Ok(CareAction::Feed),
            "pet" => Ok(CareAction::Pet),
            "play" => Ok(CareAction::Play),
            other => Err(ParseCareActionError(other.to_string())),
        }
    }
}

/// A once-per-calendar-day task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DailyAction {
    LogMeal,
    ShareImpact,
    WaterSaved,
    DailyChallenge,
    DailyCheckIn,
}

impl DailyAction {
    pub const ALL: [DailyAction; 5] = [
        DailyAction::LogMeal,
        DailyAction::ShareImpact,
        DailyAction::WaterSaved,
        DailyAction::DailyChallenge,
        DailyAction::DailyCheckIn,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            DailyAction::LogMeal => "log-meal",
            DailyAction::ShareImpact => "share-impact",
            DailyAction::WaterSaved => "water-saved",
            DailyAction::DailyChallenge => "daily-challenge",
            DailyAction::DailyCheckIn => "daily-check-in",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DailyAction::LogMeal => "Log Vegan Meal",
            DailyAction::ShareImpact => "Share Your Impact",
            DailyAction::WaterSaved => "Track Water Savings",
            DailyAction::DailyChallenge => "Complete Daily Challenge",
            DailyAction::DailyCheckIn => "Daily Check-in",
        }
    }

    /// Experience awarded on completion.
    pub fn exp_reward(self) -> u32 {
        match self {
            DailyAction::LogMeal => 15,
            DailyAction::ShareImpact => 20,
            DailyAction::WaterSaved => 10,
            DailyAction::DailyChallenge => 25,
            DailyAction::DailyCheckIn => 5,
        }
    }

    /// Log description on completion.
    pub fn description(self) -> &'static str {
        match self {
            DailyAction::LogMeal => "Recorded what you ate today to track your impact",
            DailyAction::ShareImpact => "Shared your progress with friends and family",
            DailyAction::WaterSaved => "Checked how much water your choices have saved",
            DailyAction::DailyChallenge => "Tried a new vegan recipe or product",
            DailyAction::DailyCheckIn => "Checked in with your companion",
        }
    }
}

impl fmt::Display for DailyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error type for parsing a daily action from its id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown daily action: '{0}'")]
pub struct ParseDailyActionError(pub String);

impl FromStr for DailyAction {
    type Err = ParseDailyActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DailyAction::ALL
            .into_iter()
            .find(|action| action.id() == s)
            .ok_or_else(|| ParseDailyActionError(s.to_string()))
    }
}

/// Kind tag recorded on a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Care(CareAction),
    Daily(DailyAction),
}

/// One entry in the companion's action history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEntry {
    pub id: String,
    pub kind: ActionKind,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(alias = "expGained")]
    pub exp_gained: u32,
}

impl ActionEntry {
    pub fn new(kind: ActionKind, description: String, timestamp: DateTime<Utc>, exp: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            description,
            timestamp,
            exp_gained: exp,
        }
    }
}
