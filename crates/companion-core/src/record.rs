//! Companion Record
//!
//! The one persisted entity with a real lifecycle: created once at
//! adoption, mutated in place by actions and time decay, written back
//! after every mutation. Legacy records from the original browser app
//! (camelCase JSON, no schema version) deserialize via serde aliases
//! and are bumped to the current version on load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::ActionEntry;
use crate::milestones::{default_milestones, Milestone};
use crate::species::{RescueProfile, Species};

/// Current persisted schema version.
pub const SCHEMA_VERSION: u32 = 1;

/// Gauge ceiling for health and happiness.
pub const GAUGE_MAX: u8 = 100;

/// Derived display mood. Recomputed on every read, never stored, so
/// stored and displayed mood cannot diverge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Sad,
    Normal,
    Thriving,
}

impl std::fmt::Display for Mood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mood::Sad => write!(f, "sad"),
            Mood::Normal => write!(f, "normal"),
            Mood::Thriving => write!(f, "thriving"),
        }
    }
}

/// The persisted companion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanionRecord {
    /// 0 marks a legacy record; bumped to [`SCHEMA_VERSION`] on load.
    #[serde(default)]
    pub schema_version: u32,
    pub id: String,
    pub name: String,
    pub species: Species,
    #[serde(alias = "image")]
    pub portrait: String,
    #[serde(alias = "story")]
    pub origin_story: String,
    #[serde(alias = "adoptedAt")]
    pub adopted_at: DateTime<Utc>,
    pub level: u32,
    pub experience: u32,
    #[serde(alias = "nextLevelExp")]
    pub next_level_exp: u32,
    /// 0-100.
    pub health: u8,
    /// 0-100.
    pub happiness: u8,
    /// Most-recent-first.
    #[serde(default)]
    pub actions: Vec<ActionEntry>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default, alias = "unlockedStories")]
    pub unlocked_stories: Vec<String>,
    #[serde(alias = "lastInteraction")]
    pub last_interaction: DateTime<Utc>,
}

impl CompanionRecord {
    /// Creates the record at adoption time: level 1, 0 experience,
    /// health 70, happiness 60, the intro chapter unlocked, and the
    /// "Adoption Day" milestone pre-achieved.
    pub fn adopt(profile: &RescueProfile, now: DateTime<Utc>) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            id: profile.id.clone(),
            name: profile.name.clone(),
            species: profile.species,
            portrait: profile.portrait.clone(),
            origin_story: profile.story.clone(),
            adopted_at: now,
            level: 1,
            experience: 0,
            next_level_exp: 100,
            health: 70,
            happiness: 60,
            actions: Vec::new(),
            milestones: default_milestones(now),
            unlocked_stories: vec!["intro".to_string()],
            last_interaction: now,
        }
    }

    /// Derived mood from the two gauges.
    pub fn mood(&self) -> Mood {
        if self.health < 40 || self.happiness < 30 {
            Mood::Sad
        } else if self.health > 80 && self.happiness > 80 {
            Mood::Thriving
        } else {
            Mood::Normal
        }
    }

    /// Upgrades a legacy record in place. Returns true if anything
    /// changed.
    pub fn migrate(&mut self) -> bool {
        if self.schema_version >= SCHEMA_VERSION {
            return false;
        }
        self.schema_version = SCHEMA_VERSION;
        // Legacy records created before the milestone list shipped.
        if self.milestones.is_empty() {
            self.milestones = default_milestones(self.adopted_at);
        }
        if self.unlocked_stories.is_empty() {
            self.unlocked_stories.push("intro".to_string());
        }
        true
    }

    /// Raises a gauge, capped at [`GAUGE_MAX`].
    pub(crate) fn raise_gauge(gauge: u8, bonus: u8) -> u8 {
        gauge.saturating_add(bonus).min(GAUGE_MAX)
    }

    /// Lowers a gauge toward a floor; a gauge already below the floor
    /// is lifted to it.
    pub(crate) fn lower_gauge(gauge: u8, amount: i64, floor: u8) -> u8 {
        (i64::from(gauge) - amount).max(i64::from(floor)) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::rescue_roster;

    fn fresh() -> CompanionRecord {
        CompanionRecord::adopt(&rescue_roster()[0], Utc::now())
    }

    #[test]
    fn test_adoption_initial_state() {
        let record = fresh();
        assert_eq!(record.schema_version, SCHEMA_VERSION);
        assert_eq!(record.level, 1);
        assert_eq!(record.experience, 0);
        assert_eq!(record.next_level_exp, 100);
        assert_eq!(record.health, 70);
        assert_eq!(record.happiness, 60);
        assert!(record.actions.is_empty());
        assert_eq!(record.unlocked_stories, vec!["intro".to_string()]);
        assert_eq!(record.adopted_at, record.last_interaction);
    }

    #[test]
    fn test_mood_derivation() {
        let mut record = fresh();
        assert_eq!(record.mood(), Mood::Normal);

        record.health = 39;
        assert_eq!(record.mood(), Mood::Sad);

        record.health = 90;
        record.happiness = 29;
        assert_eq!(record.mood(), Mood::Sad);

        record.happiness = 85;
        assert_eq!(record.mood(), Mood::Thriving);

        // Boundaries are exclusive for thriving
        record.health = 80;
        assert_eq!(record.mood(), Mood::Normal);
    }

    #[test]
    fn test_gauge_helpers_clamp() {
        assert_eq!(CompanionRecord::raise_gauge(95, 15), 100);
        assert_eq!(CompanionRecord::raise_gauge(50, 7), 57);
        assert_eq!(CompanionRecord::lower_gauge(70, 50, 30), 30);
        assert_eq!(CompanionRecord::lower_gauge(70, 10, 30), 60);
        // Already below the floor: lifted to it
        assert_eq!(CompanionRecord::lower_gauge(10, 5, 30), 30);
    }

    #[test]
    fn test_record_json_roundtrip() {
        let record = fresh();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: CompanionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_legacy_camel_case_record_parses_and_migrates() {
        let json = r#"{
            "id": "cow-1",
            "name": "Bella",
            "species": "Cow",
            "image": "https://example.com/bella.jpg",
            "story": "Rescued from a dairy farm.",
            "adoptedAt": "2024-03-01T12:00:00Z",
            "level": 2,
            "experience": 140,
            "nextLevelExp": 300,
            "health": 85,
            "happiness": 92,
            "actions": [],
            "milestones": [],
            "unlockedStories": ["intro", "growing"],
            "lastInteraction": "2024-03-05T08:30:00Z"
        }"#;
        let mut record: CompanionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.schema_version, 0);
        assert_eq!(record.portrait, "https://example.com/bella.jpg");
        assert_eq!(record.next_level_exp, 300);

        assert!(record.migrate());
        assert_eq!(record.schema_version, SCHEMA_VERSION);
        // Empty legacy milestone list gets the defaults
        assert_eq!(record.milestones.len(), 5);
        // Unlocked stories are preserved, not reset
        assert_eq!(record.unlocked_stories.len(), 2);

        // Migration is idempotent
        assert!(!record.migrate());
    }
}
