//! Score Composition
//!
//! Folds the per-dimension totals into a single integer impact score
//! via fixed linear weights. Weights are overridable from config the
//! same way the impact tables are.

use serde::{Deserialize, Serialize};

use crate::consumption::{aggregate, ConsumptionVector};
use crate::tables::{EconomicTables, EnvironmentalTables};

/// Environmental dimension totals for a consumption vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalTotals {
    /// Gallons of water.
    pub water: f64,
    /// Kilograms of CO2.
    pub carbon: f64,
    /// Square feet of land.
    pub land: f64,
    /// Pounds of grain.
    pub grain: f64,
}

impl EnvironmentalTotals {
    /// Aggregates all four environmental dimensions.
    pub fn compute(consumption: &ConsumptionVector, tables: &EnvironmentalTables) -> Self {
        Self {
            water: aggregate(consumption, &tables.water).total,
            carbon: aggregate(consumption, &tables.carbon).total,
            land: aggregate(consumption, &tables.land).total,
            grain: aggregate(consumption, &tables.grain).total,
        }
    }
}

/// Economic dimension totals for a consumption vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EconomicTotals {
    /// Household cost savings, USD.
    pub savings: f64,
    /// Jobs created, x0.001.
    pub jobs: f64,
    /// Market growth contribution, USD.
    pub market: f64,
    /// Healthcare savings, USD.
    pub healthcare: f64,
}

impl EconomicTotals {
    /// Aggregates all four economic dimensions.
    pub fn compute(consumption: &ConsumptionVector, tables: &EconomicTables) -> Self {
        Self {
            savings: aggregate(consumption, &tables.savings).total,
            jobs: aggregate(consumption, &tables.jobs).total,
            market: aggregate(consumption, &tables.market).total,
            healthcare: aggregate(consumption, &tables.healthcare).total,
        }
    }
}

/// Per-dimension point weights for the environmental score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalWeights {
    pub water: f64,
    pub carbon: f64,
    pub land: f64,
    pub grain: f64,
}

impl Default for EnvironmentalWeights {
    fn default() -> Self {
        Self {
            water: 0.1,
            carbon: 10.0,
            land: 0.5,
            grain: 5.0,
        }
    }
}

/// Per-dimension point weights for the economic score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicWeights {
    pub savings: f64,
    pub jobs: f64,
    pub market: f64,
    pub healthcare: f64,
}

impl Default for EconomicWeights {
    fn default() -> Self {
        Self {
            savings: 2.0,
            jobs: 500.0,
            market: 1.5,
            healthcare: 1.8,
        }
    }
}

/// Combined score weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub environmental: EnvironmentalWeights,
    pub economic: EconomicWeights,
}

/// Weighted environmental score, rounded to the nearest integer.
///
/// Negative totals are folded in as-is; the function never panics.
pub fn environmental_score(totals: &EnvironmentalTotals, weights: &EnvironmentalWeights) -> i64 {
    let raw = totals.water * weights.water
        + totals.carbon * weights.carbon
        + totals.land * weights.land
        + totals.grain * weights.grain;
    raw.round() as i64
}

/// Weighted economic score, rounded to the nearest integer.
pub fn economic_score(totals: &EconomicTotals, weights: &EconomicWeights) -> i64 {
    let raw = totals.savings * weights.savings
        + totals.jobs * weights.jobs
        + totals.market * weights.market
        + totals.healthcare * weights.healthcare;
    raw.round() as i64
}

/// Displayed impact score: environmental plus economic.
pub fn total_impact_score(
    environmental: &EnvironmentalTotals,
    economic: &EconomicTotals,
    weights: &ScoreWeights,
) -> i64 {
    environmental_score(environmental, &weights.environmental)
        + economic_score(economic, &weights.economic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food::FoodCategory;

    #[test]
    fn test_zero_consumption_scores_zero() {
        let consumption = ConsumptionVector::new();
        let env = EnvironmentalTotals::compute(&consumption, &EnvironmentalTables::default());
        let eco = EconomicTotals::compute(&consumption, &EconomicTables::default());
        let weights = ScoreWeights::default();
        assert_eq!(total_impact_score(&env, &eco, &weights), 0);
    }

    #[test]
    fn test_two_beef_meals_environmental_score() {
        // water 1320, carbon 54, land 193.8, grain 26
        let consumption = ConsumptionVector::from_entries(&[(FoodCategory::Beef, 2)]);
        let env = EnvironmentalTotals::compute(&consumption, &EnvironmentalTables::default());
        assert_eq!(env.water, 1320.0);

        // Water alone contributes round(1320 * 0.1) = 132
        let water_only = EnvironmentalTotals {
            water: env.water,
            ..Default::default()
        };
        assert_eq!(
            environmental_score(&water_only, &EnvironmentalWeights::default()),
            132
        );
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        let totals = EnvironmentalTotals {
            water: 5.0, // 0.5 points
            ..Default::default()
        };
        let score = environmental_score(&totals, &EnvironmentalWeights::default());
        assert_eq!(score, 1);
    }

    #[test]
    fn test_negative_totals_accepted() {
        let totals = EconomicTotals {
            savings: -10.0,
            ..Default::default()
        };
        assert_eq!(economic_score(&totals, &EconomicWeights::default()), -20);
    }

    #[test]
    fn test_score_monotone_in_consumption() {
        let weights = ScoreWeights::default();
        let env_tables = EnvironmentalTables::default();
        let eco_tables = EconomicTables::default();

        let mut previous = i64::MIN;
        for meals in 0..=10 {
            let consumption = ConsumptionVector::from_entries(&[(FoodCategory::Cheese, meals)]);
            let env = EnvironmentalTotals::compute(&consumption, &env_tables);
            let eco = EconomicTotals::compute(&consumption, &eco_tables);
            let score = total_impact_score(&env, &eco, &weights);
            assert!(score >= previous);
            previous = score;
        }
    }

    #[test]
    fn test_economic_points_formula() {
        // 1 beef substitution: 5.2*2 + 2.1*500 + 8.5*1.5 + 6.8*1.8 = 1085.39
        let consumption = ConsumptionVector::from_entries(&[(FoodCategory::Beef, 1)]);
        let eco = EconomicTotals::compute(&consumption, &EconomicTables::default());
        assert_eq!(economic_score(&eco, &EconomicWeights::default()), 1085);
    }
}
