//! Time Decay
//!
//! Companions lose health and happiness while the caregiver is away.
//! Decay is applied once, at load time, from the gap between the
//! stored last interaction and the current clock.

use chrono::{DateTime, Utc};

use crate::record::CompanionRecord;

/// Health lost per full day away, down to [`HEALTH_FLOOR`].
pub const HEALTH_DECAY_PER_DAY: i64 = 5;
/// Happiness lost per full day away, down to [`HAPPINESS_FLOOR`].
pub const HAPPINESS_DECAY_PER_DAY: i64 = 7;
pub const HEALTH_FLOOR: u8 = 30;
pub const HAPPINESS_FLOOR: u8 = 20;
/// Full days away after which the companion is reported as lonely.
pub const MISSES_YOU_AFTER_DAYS: i64 = 3;

/// Summary of a decay application, for the caller to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecayReport {
    /// Full days elapsed since the last interaction.
    pub days_away: i64,
    /// True when the absence was long enough to warrant a reminder.
    pub misses_you: bool,
}

/// Applies absence decay to `record` given the current time.
///
/// Gaps under one full day are identity and return `None`, so the
/// last-interaction timestamp is left untouched and repeated loads
/// within a day never compound. Gauges never drop below their floors,
/// regardless of how long the absence was.
pub fn apply_time_decay(record: &mut CompanionRecord, now: DateTime<Utc>) -> Option<DecayReport> {
    let days_away = now
        .signed_duration_since(record.last_interaction)
        .num_days();
    if days_away < 1 {
        return None;
    }

    record.health = CompanionRecord::lower_gauge(
        record.health,
        HEALTH_DECAY_PER_DAY * days_away,
        HEALTH_FLOOR,
    );
    record.happiness = CompanionRecord::lower_gauge(
        record.happiness,
        HAPPINESS_DECAY_PER_DAY * days_away,
        HAPPINESS_FLOOR,
    );
    record.last_interaction = now;

    Some(DecayReport {
        days_away,
        misses_you: days_away >= MISSES_YOU_AFTER_DAYS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::rescue_roster;
    use chrono::Duration;

    fn adopted_record(now: DateTime<Utc>) -> CompanionRecord {
        CompanionRecord::adopt(&rescue_roster()[0], now)
    }

    #[test]
    fn test_sub_day_gap_is_identity() {
        let start = Utc::now();
        let mut record = adopted_record(start);
        let report = apply_time_decay(&mut record, start + Duration::hours(23));
        assert!(report.is_none());
        assert_eq!(record.health, 70);
        assert_eq!(record.happiness, 60);
        assert_eq!(record.last_interaction, start);
    }

    #[test]
    fn test_one_day_decay() {
        let start = Utc::now();
        let mut record = adopted_record(start);
        let now = start + Duration::days(1);
        let report = apply_time_decay(&mut record, now).unwrap();

        assert_eq!(report.days_away, 1);
        assert!(!report.misses_you);
        assert_eq!(record.health, 65);
        assert_eq!(record.happiness, 53);
        assert_eq!(record.last_interaction, now);
    }

    #[test]
    fn test_long_absence_clamps_to_floors() {
        let start = Utc::now();
        let mut record = adopted_record(start);
        let report = apply_time_decay(&mut record, start + Duration::days(10)).unwrap();

        assert_eq!(report.days_away, 10);
        assert!(report.misses_you);
        assert_eq!(record.health, HEALTH_FLOOR);
        assert_eq!(record.happiness, HAPPINESS_FLOOR);
    }

    #[test]
    fn test_misses_you_threshold() {
        let start = Utc::now();

        let mut record = adopted_record(start);
        let report = apply_time_decay(&mut record, start + Duration::days(2)).unwrap();
        assert!(!report.misses_you);

        let mut record = adopted_record(start);
        let report = apply_time_decay(&mut record, start + Duration::days(3)).unwrap();
        assert!(report.misses_you);
    }

    #[test]
    fn test_decay_does_not_compound_on_reload() {
        let start = Utc::now();
        let mut record = adopted_record(start);
        let now = start + Duration::days(2);

        apply_time_decay(&mut record, now).unwrap();
        let health = record.health;
        let happiness = record.happiness;

        // A second load moments later sees no elapsed day.
        assert!(apply_time_decay(&mut record, now + Duration::minutes(5)).is_none());
        assert_eq!(record.health, health);
        assert_eq!(record.happiness, happiness);
    }
}
