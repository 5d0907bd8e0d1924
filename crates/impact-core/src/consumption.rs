//! Consumption Vectors and Aggregation
//!
//! A consumption vector records meals per week for each food
//! category. Aggregation multiplies it against an impact table and
//! sums, producing a per-category breakdown and a dimension total.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::food::FoodCategory;
use crate::tables::ImpactTable;

/// Upper bound on meals per week for a single category, matching the
/// slider range in the calculator UI.
pub const MAX_MEALS_PER_WEEK: u32 = 10;

/// Weekly meal counts per food category. Unset categories are zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConsumptionVector(HashMap<FoodCategory, u32>);

impl ConsumptionVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a vector from (category, meals) pairs, clamping each
    /// count to [`MAX_MEALS_PER_WEEK`].
    pub fn from_entries(entries: &[(FoodCategory, u32)]) -> Self {
        let mut vector = Self::new();
        for &(category, meals) in entries {
            vector.set(category, meals);
        }
        vector
    }

    /// Sets the weekly meal count for a category, clamped to the
    /// slider cap. A zero count removes the entry.
    pub fn set(&mut self, category: FoodCategory, meals: u32) {
        let meals = meals.min(MAX_MEALS_PER_WEEK);
        if meals == 0 {
            self.0.remove(&category);
        } else {
            self.0.insert(category, meals);
        }
    }

    /// Weekly meal count for a category.
    pub fn get(&self, category: FoodCategory) -> u32 {
        self.0.get(&category).copied().unwrap_or(0)
    }

    /// True if every category is zero.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pointwise sum of two vectors, each entry clamped to the cap.
    pub fn combine(&self, other: &ConsumptionVector) -> ConsumptionVector {
        let mut combined = ConsumptionVector::new();
        for category in FoodCategory::ALL {
            combined.set(category, self.get(category) + other.get(category));
        }
        combined
    }
}

/// Impact contribution of a single food category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryImpact {
    pub category: FoodCategory,
    /// Weekly meal count that produced this contribution.
    pub meals: u32,
    /// meals x per-meal magnitude.
    pub amount: f64,
}

/// Aggregated result for one dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionBreakdown {
    /// Contributions for categories with nonzero consumption, in
    /// [`FoodCategory::ALL`] order.
    pub per_category: Vec<CategoryImpact>,
    /// Sum over all categories, zero-consumption entries included as
    /// zero.
    pub total: f64,
}

/// Multiplies consumption against a table and sums.
///
/// Pure and total: absent categories count as zero, so there is no
/// error path.
pub fn aggregate(consumption: &ConsumptionVector, table: &ImpactTable) -> DimensionBreakdown {
    let mut per_category = Vec::new();
    let mut total = 0.0;
    for category in FoodCategory::ALL {
        let meals = consumption.get(category);
        let amount = f64::from(meals) * table.get(category);
        total += amount;
        if meals > 0 {
            per_category.push(CategoryImpact {
                category,
                meals,
                amount,
            });
        }
    }
    DimensionBreakdown { per_category, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::EnvironmentalTables;

    #[test]
    fn test_all_zero_consumption_totals_zero() {
        let consumption = ConsumptionVector::new();
        let tables = EnvironmentalTables::default();
        assert_eq!(aggregate(&consumption, &tables.water).total, 0.0);
        assert_eq!(aggregate(&consumption, &tables.carbon).total, 0.0);
        assert!(aggregate(&consumption, &tables.land).per_category.is_empty());
    }

    #[test]
    fn test_two_beef_meals_water() {
        let consumption = ConsumptionVector::from_entries(&[(FoodCategory::Beef, 2)]);
        let tables = EnvironmentalTables::default();
        let breakdown = aggregate(&consumption, &tables.water);
        assert_eq!(breakdown.total, 1320.0);
        assert_eq!(breakdown.per_category.len(), 1);
        assert_eq!(breakdown.per_category[0].category, FoodCategory::Beef);
        assert_eq!(breakdown.per_category[0].amount, 1320.0);
    }

    #[test]
    fn test_zero_categories_excluded_from_breakdown() {
        let consumption = ConsumptionVector::from_entries(&[
            (FoodCategory::Beef, 1),
            (FoodCategory::Milk, 3),
        ]);
        let tables = EnvironmentalTables::default();
        let breakdown = aggregate(&consumption, &tables.water);
        assert_eq!(breakdown.per_category.len(), 2);
        // ALL order: beef before milk
        assert_eq!(breakdown.per_category[0].category, FoodCategory::Beef);
        assert_eq!(breakdown.per_category[1].category, FoodCategory::Milk);
    }

    #[test]
    fn test_set_clamps_to_slider_cap() {
        let mut consumption = ConsumptionVector::new();
        consumption.set(FoodCategory::Chicken, 25);
        assert_eq!(consumption.get(FoodCategory::Chicken), MAX_MEALS_PER_WEEK);
    }

    #[test]
    fn test_set_zero_clears_entry() {
        let mut consumption = ConsumptionVector::new();
        consumption.set(FoodCategory::Fish, 4);
        consumption.set(FoodCategory::Fish, 0);
        assert!(consumption.is_empty());
    }

    #[test]
    fn test_aggregation_is_linear() {
        let c1 = ConsumptionVector::from_entries(&[
            (FoodCategory::Beef, 2),
            (FoodCategory::Eggs, 3),
        ]);
        let c2 = ConsumptionVector::from_entries(&[
            (FoodCategory::Beef, 1),
            (FoodCategory::Cheese, 5),
        ]);
        let combined = c1.combine(&c2);
        let tables = EnvironmentalTables::default();
        for table in [&tables.water, &tables.carbon, &tables.land, &tables.grain] {
            let lhs = aggregate(&combined, table).total;
            let rhs = aggregate(&c1, table).total + aggregate(&c2, table).total;
            assert!((lhs - rhs).abs() < 1e-9);
        }
    }
}
