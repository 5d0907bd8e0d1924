//! Achievements
//!
//! One-time boolean milestones evaluated independently of the tier
//! ladder. Evaluation is pure; raising notifications for newly earned
//! achievements is the caller's concern.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::score::{EconomicTotals, EnvironmentalTotals};

/// Snapshot of the totals an achievement predicate can inspect.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpactTotals {
    pub water: f64,
    pub carbon: f64,
    pub land: f64,
    pub grain: f64,
    /// Economic impact points (already weighted and rounded).
    pub economic: i64,
}

impl ImpactTotals {
    pub fn new(environmental: &EnvironmentalTotals, economic_points: i64) -> Self {
        Self {
            water: environmental.water,
            carbon: environmental.carbon,
            land: environmental.land,
            grain: environmental.grain,
            economic: economic_points,
        }
    }

    /// Convenience for callers that have raw economic totals.
    pub fn from_parts(
        environmental: &EnvironmentalTotals,
        economic: &EconomicTotals,
        weights: &crate::score::EconomicWeights,
    ) -> Self {
        Self::new(environmental, crate::score::economic_score(economic, weights))
    }
}

/// The fixed achievement set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievement {
    WaterGuardian,
    CarbonChampion,
    EconomicInnovator,
}

impl Achievement {
    pub const ALL: [Achievement; 3] = [
        Achievement::WaterGuardian,
        Achievement::CarbonChampion,
        Achievement::EconomicInnovator,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Achievement::WaterGuardian => "Water Guardian",
            Achievement::CarbonChampion => "Carbon Champion",
            Achievement::EconomicInnovator => "Economic Innovator",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::WaterGuardian => "Save 1,000 gallons of water",
            Achievement::CarbonChampion => "Prevent 100kg of CO2 emissions",
            Achievement::EconomicInnovator => "Generate 1,000 economic impact points",
        }
    }

    /// Whether the totals satisfy this achievement's requirement.
    pub fn is_met(self, totals: &ImpactTotals) -> bool {
        match self {
            Achievement::WaterGuardian => totals.water >= 1000.0,
            Achievement::CarbonChampion => totals.carbon >= 100.0,
            Achievement::EconomicInnovator => totals.economic >= 1000,
        }
    }
}

/// Returns achievements whose predicate holds and which are not
/// already earned, in [`Achievement::ALL`] order.
///
/// Folding the result back into `earned` and calling again yields an
/// empty vector: the earned set only grows.
pub fn evaluate_achievements(
    totals: &ImpactTotals,
    earned: &HashSet<Achievement>,
) -> Vec<Achievement> {
    Achievement::ALL
        .into_iter()
        .filter(|achievement| !earned.contains(achievement) && achievement.is_met(totals))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(water: f64, carbon: f64, economic: i64) -> ImpactTotals {
        ImpactTotals {
            water,
            carbon,
            economic,
            ..Default::default()
        }
    }

    #[test]
    fn test_no_achievements_at_zero() {
        let newly = evaluate_achievements(&ImpactTotals::default(), &HashSet::new());
        assert!(newly.is_empty());
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let newly = evaluate_achievements(&totals(1000.0, 100.0, 1000), &HashSet::new());
        assert_eq!(
            newly,
            vec![
                Achievement::WaterGuardian,
                Achievement::CarbonChampion,
                Achievement::EconomicInnovator
            ]
        );
    }

    #[test]
    fn test_already_earned_excluded() {
        let mut earned = HashSet::new();
        earned.insert(Achievement::WaterGuardian);
        let newly = evaluate_achievements(&totals(5000.0, 10.0, 0), &earned);
        assert!(newly.is_empty());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let current = totals(2000.0, 150.0, 500);
        let mut earned = HashSet::new();

        let first = evaluate_achievements(&current, &earned);
        assert_eq!(first.len(), 2);
        earned.extend(first);

        let second = evaluate_achievements(&current, &earned);
        assert!(second.is_empty());
    }
}
