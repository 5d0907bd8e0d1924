//! Everyday Equivalents
//!
//! Converts raw environmental totals into relatable quantities for
//! presentation (showers, miles driven, tree-years, and so on).

use serde::Serialize;

use crate::score::EnvironmentalTotals;

// Conversion factors: 20 gallons per shower, 2 gallons per day of
// drinking water, 4 kg CO2 per mile driven, 21 kg CO2 absorbed per
// tree per year, ~4300 sq ft per small park, ~11,000 sq ft per soccer
// field, ~3 lbs of grain per meal.
const SHOWERS_PER_GALLON: f64 = 0.05;
const DRINKING_DAYS_PER_GALLON: f64 = 0.5;
const MILES_PER_KG_CO2: f64 = 0.25;
const KG_CO2_PER_TREE_YEAR: f64 = 21.0;
const PARKS_PER_SQ_FT: f64 = 0.00023;
const FIELDS_PER_SQ_FT: f64 = 0.000091;
const MEALS_PER_LB_GRAIN: f64 = 0.33;

/// Relatable equivalents of an environmental total set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EnvironmentalEquivalents {
    /// Showers' worth of water.
    pub showers: i64,
    /// Days of drinking water.
    pub drinking_days: i64,
    /// Miles of driving emissions.
    pub miles_driven: i64,
    /// Years of absorption by one tree.
    pub tree_years: i64,
    /// Small parks' worth of land.
    pub parks: i64,
    /// Soccer fields' worth of land.
    pub soccer_fields: i64,
    /// Meals the grain could feed to people.
    pub people_meals: i64,
}

impl EnvironmentalEquivalents {
    pub fn from_totals(totals: &EnvironmentalTotals) -> Self {
        Self {
            showers: (totals.water * SHOWERS_PER_GALLON).round() as i64,
            drinking_days: (totals.water * DRINKING_DAYS_PER_GALLON).round() as i64,
            miles_driven: (totals.carbon * MILES_PER_KG_CO2).round() as i64,
            tree_years: (totals.carbon / KG_CO2_PER_TREE_YEAR).round() as i64,
            parks: (totals.land * PARKS_PER_SQ_FT).round() as i64,
            soccer_fields: (totals.land * FIELDS_PER_SQ_FT).round() as i64,
            people_meals: (totals.grain * MEALS_PER_LB_GRAIN).round() as i64,
        }
    }
}
