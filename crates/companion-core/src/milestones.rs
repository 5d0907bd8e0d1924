//! Milestones
//!
//! A fixed list of named goals attached to the companion at adoption.
//! Each is either achieved (stamped with a timestamp) or pending with
//! a numeric requirement. The achieved set only grows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::actions::{ActionKind, DailyAction};
use crate::events::ProgressionEvent;
use crate::record::CompanionRecord;

/// What a pending milestone counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementKind {
    /// Whole days since adoption.
    Days,
    /// Completed log-meal daily actions.
    Meals,
    /// Completed share-impact daily actions.
    Shares,
}

/// A named goal on the companion record.
///
/// Requirement fields are flat (not nested) to stay compatible with
/// legacy persisted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub name: String,
    pub achieved: bool,
    #[serde(default, alias = "date", skip_serializing_if = "Option::is_none")]
    pub achieved_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "requirementType", skip_serializing_if = "Option::is_none")]
    pub requirement_kind: Option<RequirementKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirement: Option<u32>,
}

impl Milestone {
    fn achieved_now(id: &str, name: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            achieved: true,
            achieved_at: Some(now),
            requirement_kind: None,
            requirement: None,
        }
    }

    fn pending(id: &str, name: &str, kind: RequirementKind, target: u32) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            achieved: false,
            achieved_at: None,
            requirement_kind: Some(kind),
            requirement: Some(target),
        }
    }
}

/// The milestone list every companion starts with. "Adoption Day" is
/// pre-achieved.
pub fn default_milestones(now: DateTime<Utc>) -> Vec<Milestone> {
    vec![
        Milestone::achieved_now("milestone-1", "Adoption Day", now),
        Milestone::pending("milestone-2", "First Week Together", RequirementKind::Days, 7),
        Milestone::pending("milestone-3", "First Month Anniversary", RequirementKind::Days, 30),
        Milestone::pending("milestone-4", "Log 10 Vegan Meals", RequirementKind::Meals, 10),
        Milestone::pending("milestone-5", "Share 5 Times", RequirementKind::Shares, 5),
    ]
}

fn daily_action_count(record: &CompanionRecord, action: DailyAction) -> u32 {
    record
        .actions
        .iter()
        .filter(|entry| entry.kind == ActionKind::Daily(action))
        .count() as u32
}

fn requirement_met(record: &CompanionRecord, kind: RequirementKind, target: u32, now: DateTime<Utc>) -> bool {
    let current = match kind {
        RequirementKind::Days => {
            let days = (now - record.adopted_at).num_days();
            if days < 0 {
                0
            } else {
                days as u32
            }
        }
        RequirementKind::Meals => daily_action_count(record, DailyAction::LogMeal),
        RequirementKind::Shares => daily_action_count(record, DailyAction::ShareImpact),
    };
    current >= target
}

/// Flips every pending milestone whose requirement is now met,
/// stamping the achievement time. Returns an event per newly
/// achieved milestone.
pub fn refresh_milestones(record: &mut CompanionRecord, now: DateTime<Utc>) -> Vec<ProgressionEvent> {
    let mut events = Vec::new();
    // Split borrow: requirement checks read the action history, flips
    // write the milestone list.
    let pending: Vec<usize> = record
        .milestones
        .iter()
        .enumerate()
        .filter_map(|(index, milestone)| {
            if milestone.achieved {
                return None;
            }
            let (kind, target) = (milestone.requirement_kind?, milestone.requirement?);
            requirement_met(record, kind, target, now).then_some(index)
        })
        .collect();

    for index in pending {
        let milestone = &mut record.milestones[index];
        milestone.achieved = true;
        milestone.achieved_at = Some(now);
        events.push(ProgressionEvent::MilestoneAchieved {
            id: milestone.id.clone(),
            name: milestone.name.clone(),
        });
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::species::rescue_roster;
    use chrono::Duration;

    fn fresh_record(now: DateTime<Utc>) -> CompanionRecord {
        CompanionRecord::adopt(&rescue_roster()[0], now)
    }

    #[test]
    fn test_adoption_day_pre_achieved() {
        let now = Utc::now();
        let milestones = default_milestones(now);
        assert_eq!(milestones.len(), 5);
        assert!(milestones[0].achieved);
        assert_eq!(milestones[0].achieved_at, Some(now));
        assert!(milestones[1..].iter().all(|m| !m.achieved));
    }

    #[test]
    fn test_refresh_is_noop_on_fresh_record() {
        let now = Utc::now();
        let mut record = fresh_record(now);
        assert!(refresh_milestones(&mut record, now).is_empty());
    }

    #[test]
    fn test_first_week_milestone() {
        let adopted = Utc::now();
        let mut record = fresh_record(adopted);
        let later = adopted + Duration::days(7);

        let events = refresh_milestones(&mut record, later);
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0],
            ProgressionEvent::MilestoneAchieved {
                id: "milestone-2".to_string(),
                name: "First Week Together".to_string(),
            }
        );
        assert!(record.milestones[1].achieved);
        assert_eq!(record.milestones[1].achieved_at, Some(later));
    }

    #[test]
    fn test_month_milestone_includes_week() {
        let adopted = Utc::now();
        let mut record = fresh_record(adopted);
        let later = adopted + Duration::days(45);

        let events = refresh_milestones(&mut record, later);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_achieved_milestones_stay_achieved() {
        let adopted = Utc::now();
        let mut record = fresh_record(adopted);
        let later = adopted + Duration::days(8);

        refresh_milestones(&mut record, later);
        // A second refresh reports nothing new and flips nothing back.
        let events = refresh_milestones(&mut record, later);
        assert!(events.is_empty());
        assert!(record.milestones[1].achieved);
    }

    #[test]
    fn test_legacy_milestone_shape_parses() {
        let json = r#"{
            "id": "milestone-2",
            "name": "First Week Together",
            "achieved": false,
            "requirementType": "days",
            "requirement": 7
        }"#;
        let milestone: Milestone = serde_json::from_str(json).unwrap();
        assert_eq!(milestone.requirement_kind, Some(RequirementKind::Days));
        assert_eq!(milestone.requirement, Some(7));
    }
}
