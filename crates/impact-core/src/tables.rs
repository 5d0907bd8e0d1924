//! Impact Tables
//!
//! Per-meal impact magnitudes for each food category, grouped by
//! dimension. Defaults carry the production constants; any entry can
//! be overridden from a TOML config section.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::food::FoodCategory;

/// A mapping from food category to per-meal magnitude for one
/// dimension. Absent categories count as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactTable(pub HashMap<FoodCategory, f64>);

impl ImpactTable {
    /// Builds a table from (category, magnitude) pairs.
    pub fn from_entries(entries: &[(FoodCategory, f64)]) -> Self {
        Self(entries.iter().copied().collect())
    }

    /// Per-meal magnitude for a category, zero if absent.
    pub fn get(&self, category: FoodCategory) -> f64 {
        self.0.get(&category).copied().unwrap_or(0.0)
    }
}

/// Environmental impact tables: water (gallons), carbon (kg CO2),
/// land (sq ft), grain (lbs) per meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvironmentalTables {
    pub water: ImpactTable,
    pub carbon: ImpactTable,
    pub land: ImpactTable,
    pub grain: ImpactTable,
}

impl Default for EnvironmentalTables {
    fn default() -> Self {
        use FoodCategory::*;
        Self {
            water: ImpactTable::from_entries(&[
                (Beef, 660.0),
                (Pork, 330.0),
                (Lamb, 520.0),
                (Chicken, 100.0),
                (Turkey, 130.0),
                (Fish, 220.0),
                (Eggs, 53.0),
                (Cheese, 50.0),
                (Milk, 30.0),
                (Yogurt, 35.0),
            ]),
            carbon: ImpactTable::from_entries(&[
                (Beef, 27.0),
                (Pork, 12.1),
                (Lamb, 39.2),
                (Chicken, 6.9),
                (Turkey, 10.9),
                (Fish, 6.1),
                (Eggs, 4.8),
                (Cheese, 13.5),
                (Milk, 3.2),
                (Yogurt, 3.8),
            ]),
            land: ImpactTable::from_entries(&[
                (Beef, 96.9),
                (Pork, 15.0),
                (Lamb, 85.1),
                (Chicken, 7.1),
                (Turkey, 12.5),
                (Fish, 3.7),
                (Eggs, 5.7),
                (Cheese, 13.8),
                (Milk, 8.9),
                (Yogurt, 9.2),
            ]),
            grain: ImpactTable::from_entries(&[
                (Beef, 13.0),
                (Pork, 5.9),
                (Lamb, 21.0),
                (Chicken, 2.7),
                (Turkey, 3.8),
                (Fish, 5.2),
                (Eggs, 3.0),
                (Cheese, 6.0),
                (Milk, 1.9),
                (Yogurt, 2.1),
            ]),
        }
    }
}

/// Economic impact tables: household savings (USD), jobs created
/// (x0.001), market growth (USD), healthcare savings (USD) per meal
/// substituted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicTables {
    pub savings: ImpactTable,
    pub jobs: ImpactTable,
    pub market: ImpactTable,
    pub healthcare: ImpactTable,
}

impl Default for EconomicTables {
    fn default() -> Self {
        use FoodCategory::*;
        Self {
            savings: ImpactTable::from_entries(&[
                (Beef, 5.2),
                (Pork, 3.8),
                (Lamb, 7.1),
                (Chicken, 2.5),
                (Turkey, 3.2),
                (Fish, 4.8),
                (Eggs, 1.2),
                (Cheese, 2.5),
                (Milk, 0.8),
                (Yogurt, 1.1),
            ]),
            jobs: ImpactTable::from_entries(&[
                (Beef, 2.1),
                (Pork, 1.8),
                (Lamb, 2.6),
                (Chicken, 1.2),
                (Turkey, 1.5),
                (Fish, 1.9),
                (Eggs, 0.9),
                (Cheese, 1.3),
                (Milk, 0.7),
                (Yogurt, 0.8),
            ]),
            market: ImpactTable::from_entries(&[
                (Beef, 8.5),
                (Pork, 5.7),
                (Lamb, 9.2),
                (Chicken, 3.8),
                (Turkey, 4.6),
                (Fish, 6.3),
                (Eggs, 2.1),
                (Cheese, 3.5),
                (Milk, 1.5),
                (Yogurt, 1.9),
            ]),
            healthcare: ImpactTable::from_entries(&[
                (Beef, 6.8),
                (Pork, 4.9),
                (Lamb, 7.2),
                (Chicken, 3.1),
                (Turkey, 3.7),
                (Fish, 4.2),
                (Eggs, 1.8),
                (Cheese, 3.2),
                (Milk, 1.2),
                (Yogurt, 1.5),
            ]),
        }
    }
}
