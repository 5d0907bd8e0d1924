//! Tier Ladder
//!
//! Maps a cumulative impact score to a named rank by threshold
//! comparison, and reports progress toward the next rank.

use serde::{Deserialize, Serialize};

/// A single rank in the ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDef {
    /// Stable identifier, e.g. "bronze".
    pub id: String,
    /// Display title, e.g. "Bronze Impactor".
    pub title: String,
    /// Minimum score at which this tier is attained (inclusive).
    pub threshold: i64,
}

impl TierDef {
    fn new(id: &str, title: &str, threshold: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            threshold,
        }
    }
}

/// Progress from the current tier toward the next one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierProgress {
    /// The next tier up, None at the top of the ladder.
    pub next: Option<TierDef>,
    /// 0-100; fixed at 100 when there is no next tier.
    pub percent: u8,
    /// Points still needed to reach the next tier; zero at the top.
    pub points_needed: i64,
}

/// Error raised for a ladder with no tiers, thresholds that are not
/// strictly increasing, or a repeated tier id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LadderError {
    #[error("tier ladder must contain at least one tier")]
    Empty,
    #[error("tier '{tier}' threshold {threshold} does not exceed the previous tier's {previous}")]
    NotIncreasing {
        tier: String,
        threshold: i64,
        previous: i64,
    },
    #[error("duplicate tier id '{0}'")]
    DuplicateId(String),
}

/// An ordered list of tiers with strictly increasing thresholds and
/// unique ids. Construction always validates, including through
/// serde, so a held ladder is never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TierLadder(Vec<TierDef>);

impl<'de> Deserialize<'de> for TierLadder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tiers = Vec::<TierDef>::deserialize(deserializer)?;
        TierLadder::new(tiers).map_err(serde::de::Error::custom)
    }
}

impl Default for TierLadder {
    fn default() -> Self {
        Self(vec![
            TierDef::new("novice", "Plant Beginner", 100),
            TierDef::new("bronze", "Bronze Impactor", 500),
            TierDef::new("silver", "Silver Saver", 1500),
            TierDef::new("gold", "Gold Guardian", 5000),
            TierDef::new("platinum", "Platinum Protector", 15000),
            TierDef::new("diamond", "Diamond Defender", 50000),
        ])
    }
}

impl TierLadder {
    /// Builds a ladder, rejecting empty or non-increasing input.
    pub fn new(tiers: Vec<TierDef>) -> Result<Self, LadderError> {
        let ladder = Self(tiers);
        ladder.validate()?;
        Ok(ladder)
    }

    /// Checks the strictly-increasing threshold and unique-id
    /// invariants.
    pub fn validate(&self) -> Result<(), LadderError> {
        let first = self.0.first().ok_or(LadderError::Empty)?;
        let mut previous = first.threshold;
        for tier in &self.0[1..] {
            if tier.threshold <= previous {
                return Err(LadderError::NotIncreasing {
                    tier: tier.id.clone(),
                    threshold: tier.threshold,
                    previous,
                });
            }
            previous = tier.threshold;
        }
        let mut seen = std::collections::HashSet::new();
        for tier in &self.0 {
            if !seen.insert(tier.id.as_str()) {
                return Err(LadderError::DuplicateId(tier.id.clone()));
            }
        }
        Ok(())
    }

    pub fn tiers(&self) -> &[TierDef] {
        &self.0
    }

    /// Index of the highest tier whose threshold is <= score; 0 when
    /// the score is below every threshold.
    fn tier_index_for(&self, score: i64) -> usize {
        let mut index = 0;
        for (i, tier) in self.0.iter().enumerate() {
            if score >= tier.threshold {
                index = i;
            }
        }
        index
    }

    /// The highest tier whose threshold is <= score; the lowest tier
    /// when the score is below every threshold. Comparison is
    /// inclusive: a score exactly at a threshold attains that tier.
    pub fn tier_for(&self, score: i64) -> &TierDef {
        &self.0[self.tier_index_for(score)]
    }

    /// Progress from the tier assigned to `score` toward the next
    /// tier up the ladder.
    pub fn progress_to_next(&self, score: i64) -> TierProgress {
        let index = self.tier_index_for(score);
        let current = &self.0[index];

        match self.0.get(index + 1) {
            Some(next) => {
                let range = next.threshold - current.threshold;
                let gained = score - current.threshold;
                let percent = ((gained as f64 / range as f64) * 100.0).round();
                TierProgress {
                    percent: percent.clamp(0.0, 100.0) as u8,
                    points_needed: (next.threshold - score).max(0),
                    next: Some(next.clone()),
                }
            }
            None => TierProgress {
                next: None,
                percent: 100,
                points_needed: 0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ladder_is_valid() {
        assert!(TierLadder::default().validate().is_ok());
        assert_eq!(TierLadder::default().tiers().len(), 6);
    }

    #[test]
    fn test_score_below_all_thresholds_gets_lowest_tier() {
        let ladder = TierLadder::default();
        assert_eq!(ladder.tier_for(0).id, "novice");
        assert_eq!(ladder.tier_for(99).id, "novice");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let ladder = TierLadder::default();
        assert_eq!(ladder.tier_for(500).id, "bronze");
        assert_eq!(ladder.tier_for(499).id, "novice");
        assert_eq!(ladder.tier_for(50000).id, "diamond");
    }

    #[test]
    fn test_tier_assignment_is_monotonic() {
        let ladder = TierLadder::default();
        let mut previous_index = 0;
        for score in (0..60000).step_by(250) {
            let tier = ladder.tier_for(score);
            let index = ladder
                .tiers()
                .iter()
                .position(|t| t.id == tier.id)
                .unwrap();
            assert!(index >= previous_index, "tier dropped at score {score}");
            previous_index = index;
        }
    }

    #[test]
    fn test_progress_midway() {
        let ladder = TierLadder::default();
        // Score 1000: bronze (500) -> silver (1500), halfway.
        let progress = ladder.progress_to_next(1000);
        assert_eq!(progress.next.as_ref().unwrap().id, "silver");
        assert_eq!(progress.percent, 50);
        assert_eq!(progress.points_needed, 500);
    }

    #[test]
    fn test_progress_below_lowest_threshold_clamps_to_zero() {
        let ladder = TierLadder::default();
        // Score 50 is assigned novice (threshold 100); gained is negative.
        let progress = ladder.progress_to_next(50);
        assert_eq!(progress.next.as_ref().unwrap().id, "bronze");
        assert_eq!(progress.percent, 0);
        assert_eq!(progress.points_needed, 450);
    }

    #[test]
    fn test_progress_at_top_tier() {
        let ladder = TierLadder::default();
        let progress = ladder.progress_to_next(80000);
        assert!(progress.next.is_none());
        assert_eq!(progress.percent, 100);
        assert_eq!(progress.points_needed, 0);
    }

    #[test]
    fn test_non_increasing_ladder_rejected() {
        let err = TierLadder::new(vec![
            TierDef::new("a", "A", 100),
            TierDef::new("b", "B", 100),
        ])
        .unwrap_err();
        assert!(matches!(err, LadderError::NotIncreasing { .. }));
    }

    #[test]
    fn test_empty_ladder_rejected() {
        assert_eq!(TierLadder::new(vec![]).unwrap_err(), LadderError::Empty);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = TierLadder::new(vec![
            TierDef::new("a", "A", 100),
            TierDef::new("a", "A again", 200),
        ])
        .unwrap_err();
        assert_eq!(err, LadderError::DuplicateId("a".to_string()));
    }

    #[test]
    fn test_deserialization_validates() {
        assert!(serde_json::from_str::<TierLadder>("[]").is_err());

        let duplicate = r#"[
            {"id": "a", "title": "A", "threshold": 100},
            {"id": "a", "title": "A again", "threshold": 200}
        ]"#;
        assert!(serde_json::from_str::<TierLadder>(duplicate).is_err());

        let valid = r#"[
            {"id": "seed", "title": "Seed", "threshold": 0},
            {"id": "sprout", "title": "Sprout", "threshold": 250}
        ]"#;
        let ladder: TierLadder = serde_json::from_str(valid).unwrap();
        assert_eq!(ladder.tier_for(300).id, "sprout");
    }
}
