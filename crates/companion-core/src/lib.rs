//! Companion lifecycle: adoption, care, decay, stories, persistence.
//!
//! A single persisted [`record::CompanionRecord`] moves through pure
//! transition functions. Each transition mutates the record in place
//! and returns the notification-worthy [`events::ProgressionEvent`]s;
//! presentation and persistence stay with the caller. Time enters
//! every transition as an explicit `DateTime<Utc>` argument so the
//! whole lifecycle is testable without a real clock.
//!
//! # Modules
//!
//! - [`species`]: the fixed rescue roster
//! - [`record`]: the persisted companion and legacy migration
//! - [`actions`]: care and daily-action catalogs
//! - [`progression`]: experience, level-ups, action application
//! - [`decay`]: absence decay applied at load time
//! - [`milestones`]: care-milestone evaluation
//! - [`story`]: per-species chapter arcs and unlocking
//! - [`ledger`]: once-per-day action bookkeeping
//! - [`events`]: the progression event type
//! - [`store`]: JSON-file and in-memory persistence

pub mod actions;
pub mod decay;
pub mod events;
pub mod ledger;
pub mod milestones;
pub mod progression;
pub mod record;
pub mod species;
pub mod store;
pub mod story;

pub use actions::{
    ActionEntry, ActionKind, CareAction, DailyAction, ParseCareActionError, ParseDailyActionError,
};
pub use decay::{apply_time_decay, DecayReport, MISSES_YOU_AFTER_DAYS};
pub use events::ProgressionEvent;
pub use ledger::DailyActionLedger;
pub use milestones::{default_milestones, refresh_milestones, Milestone, RequirementKind};
pub use progression::{apply_care_action, complete_daily_action, refresh_on_load, DailyOutcome};
pub use record::{CompanionRecord, Mood, GAUGE_MAX, SCHEMA_VERSION};
pub use species::{rescue_roster, RescueProfile, Species};
pub use store::{CompanionStore, JsonFileStore, MemoryStore, StoreError};
pub use story::{can_unlock, chapters_for, find_chapter, unlock_story, StoryChapter};
