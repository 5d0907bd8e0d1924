//! Progression Transitions
//!
//! Total transition functions over the companion record. Each mutates
//! the record in place and returns the notification-worthy events;
//! persistence and presentation stay with the caller.

use chrono::{DateTime, Utc};

use crate::actions::{ActionEntry, ActionKind, CareAction, DailyAction};
use crate::decay::{apply_time_decay, DecayReport};
use crate::events::ProgressionEvent;
use crate::ledger::DailyActionLedger;
use crate::milestones::refresh_milestones;
use crate::record::CompanionRecord;

/// Adds experience and runs the level-up check. The threshold growth
/// uses the new level: next = next + 100 x level'.
pub(crate) fn grant_experience(record: &mut CompanionRecord, exp: u32) -> Option<ProgressionEvent> {
    record.experience += exp;
    if record.experience >= record.next_level_exp {
        record.level += 1;
        record.next_level_exp += 100 * record.level;
        Some(ProgressionEvent::LeveledUp { level: record.level })
    } else {
        None
    }
}

/// Applies a care interaction: experience, gauge bonuses, a log entry
/// at the front of the history, and a milestone refresh.
pub fn apply_care_action(
    record: &mut CompanionRecord,
    action: CareAction,
    now: DateTime<Utc>,
) -> Vec<ProgressionEvent> {
    let mut events = Vec::new();

    events.extend(grant_experience(record, action.exp_reward()));
    record.health = CompanionRecord::raise_gauge(record.health, action.health_bonus());
    record.happiness = CompanionRecord::raise_gauge(record.happiness, action.happiness_bonus());

    let description = action.description(&record.name);
    record.actions.insert(
        0,
        ActionEntry::new(ActionKind::Care(action), description, now, action.exp_reward()),
    );
    record.last_interaction = now;

    events.extend(refresh_milestones(record, now));
    events
}

/// Load-time refresh: absence decay plus a milestone sweep.
///
/// Day-gated milestones depend only on the clock, so they must be able
/// to flip on a session that applies no action at all. Runs once per
/// load; the sub-day decay identity keeps repeated loads harmless.
pub fn refresh_on_load(
    record: &mut CompanionRecord,
    now: DateTime<Utc>,
) -> (Option<DecayReport>, Vec<ProgressionEvent>) {
    let report = apply_time_decay(record, now);
    let events = refresh_milestones(record, now);
    (report, events)
}

/// Outcome of a daily-action attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyOutcome {
    /// False when the action was already completed today; the record
    /// is untouched in that case.
    pub applied: bool,
    pub events: Vec<ProgressionEvent>,
}

/// Completes a once-per-day task. The ledger is rolled to today's
/// date first; a repeat within the same calendar day is a no-op.
/// An applied task behaves like a generic care application (health
/// +5, happiness +7) with the task's own experience reward.
pub fn complete_daily_action(
    record: &mut CompanionRecord,
    ledger: &mut DailyActionLedger,
    action: DailyAction,
    now: DateTime<Utc>,
) -> DailyOutcome {
    ledger.roll_to(now.date_naive());
    if ledger.is_completed(action) {
        return DailyOutcome {
            applied: false,
            events: Vec::new(),
        };
    }

    let mut events = Vec::new();
    events.extend(grant_experience(record, action.exp_reward()));
    record.health = CompanionRecord::raise_gauge(record.health, 5);
    record.happiness = CompanionRecord::raise_gauge(record.happiness, 7);

    record.actions.insert(
        0,
        ActionEntry::new(
            ActionKind::Daily(action),
            action.description().to_string(),
            now,
            action.exp_reward(),
        ),
    );
    record.last_interaction = now;
    ledger.mark_completed(action);

    events.extend(refresh_milestones(record, now));
    DailyOutcome {
        applied: true,
        events,
    }
}
