//! Story Chapters
//!
//! Each rescue species carries a fixed five-chapter arc. Chapters gate
//! on companion level, and unlocking one pays out experience and
//! happiness so reading stories feeds back into progression.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::events::ProgressionEvent;
use crate::progression::grant_experience;
use crate::record::CompanionRecord;
use crate::species::Species;

/// Experience granted the first time a chapter is unlocked.
pub const STORY_EXP_REWARD: u32 = 25;
/// Happiness granted the first time a chapter is unlocked.
pub const STORY_HAPPINESS_BONUS: u8 = 10;

/// One chapter of a companion's backstory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoryChapter {
    pub id: &'static str,
    pub title: &'static str,
    /// Companion level at which the chapter becomes readable.
    pub unlock_level: u32,
}

const fn chapter(id: &'static str, title: &'static str, unlock_level: u32) -> StoryChapter {
    StoryChapter {
        id,
        title,
        unlock_level,
    }
}

/// The chapter arc for a species, ordered by unlock level.
pub fn chapters_for(species: Species) -> &'static [StoryChapter] {
    match species {
        Species::Cow => const { &[
            chapter("intro", "A New Beginning", 1),
            chapter("growing", "Growing Stronger", 2),
            chapter("friendship", "First Friends", 3),
            chapter("freedom", "Pasture Days", 4),
            chapter("mother", "A Gentle Guardian", 5),
        ] },
        Species::Pig => const { &[
            chapter("intro", "A New Beginning", 1),
            chapter("exploration", "The Great Explorer", 2),
            chapter("intelligence", "Quick Learner", 3),
            chapter("friendship", "Mud Bath Buddies", 4),
            chapter("advocacy", "An Ambassador's Heart", 5),
        ] },
        Species::Chicken => const { &[
            chapter("intro", "A New Beginning", 1),
            chapter("healing", "Feathers Return", 2),
            chapter("discovery", "First Dust Bath", 3),
            chapter("confidence", "Finding Her Voice", 4),
            chapter("new_life", "Sunrise Songs", 5),
        ] },
        Species::Goat => const { &[
            chapter("intro", "A New Beginning", 1),
            chapter("rehabilitation", "Steady Legs", 2),
            chapter("playfulness", "King of the Hill", 3),
            chapter("friendship", "The Welcoming Committee", 4),
            chapter("teacher", "Showing the Way", 5),
        ] },
        Species::Sheep => const { &[
            chapter("intro", "A New Beginning", 1),
            chapter("transformation", "The First Shearing", 2),
            chapter("healing", "Soft Ground", 3),
            chapter("flock", "Part of the Flock", 4),
            chapter("ambassador", "Wool and Wonder", 5),
        ] },
    }
}

/// Looks up a chapter by id within a species arc.
pub fn find_chapter(species: Species, id: &str) -> Option<&'static StoryChapter> {
    chapters_for(species).iter().find(|c| c.id == id)
}

/// Whether `record` can unlock `chapter` right now.
pub fn can_unlock(record: &CompanionRecord, chapter: &StoryChapter) -> bool {
    !record.unlocked_stories.iter().any(|s| s == chapter.id) && record.level >= chapter.unlock_level
}

/// Unlocks a chapter, paying out its rewards.
///
/// Already-unlocked and under-leveled chapters are a no-op returning an
/// empty event list, so callers can invoke this unconditionally.
pub fn unlock_story(
    record: &mut CompanionRecord,
    chapter: &StoryChapter,
    now: DateTime<Utc>,
) -> Vec<ProgressionEvent> {
    if !can_unlock(record, chapter) {
        return Vec::new();
    }

    record.unlocked_stories.push(chapter.id.to_string());
    record.happiness = CompanionRecord::raise_gauge(record.happiness, STORY_HAPPINESS_BONUS);
    record.last_interaction = now;

    let mut events = vec![ProgressionEvent::ChapterUnlocked {
        id: chapter.id.to_string(),
        title: chapter.title.to_string(),
    }];
    events.extend(grant_experience(record, STORY_EXP_REWARD));
    events
}
