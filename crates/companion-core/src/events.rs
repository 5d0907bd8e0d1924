//! Progression Events
//!
//! Emitted by the transition functions so callers can raise
//! notifications. The transitions themselves never present anything.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Something notification-worthy that happened during a transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionEvent {
    /// The companion reached a new level.
    LeveledUp { level: u32 },
    /// A pending milestone's requirement was met.
    MilestoneAchieved { id: String, name: String },
    /// A story chapter was unlocked.
    ChapterUnlocked { id: String, title: String },
}

impl fmt::Display for ProgressionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressionEvent::LeveledUp { level } => {
                write!(f, "Level up! Reached level {level}")
            }
            ProgressionEvent::MilestoneAchieved { name, .. } => {
                write!(f, "Milestone achieved: {name}")
            }
            ProgressionEvent::ChapterUnlocked { title, .. } => {
                write!(f, "New story unlocked: \"{title}\"")
            }
        }
    }
}
