//! Impact calculation: tables, aggregation, scores, tiers, badges.
//!
//! Everything here is a pure function over small fixed tables: a
//! consumption vector is multiplied against per-meal impact tables,
//! the dimension totals are folded into an integer score, and the
//! score is mapped onto a tier ladder. Achievements are independent
//! one-time predicates over the same totals.
//!
//! # Modules
//!
//! - [`food`]: the fixed food-category set
//! - [`tables`]: per-meal magnitudes for each dimension
//! - [`consumption`]: weekly meal counts and aggregation
//! - [`score`]: weighted score composition
//! - [`equivalents`]: relatable presentation quantities
//! - [`tiers`]: the ordered tier ladder
//! - [`achievements`]: one-time boolean milestones
//! - [`config`]: TOML overrides with production defaults

pub mod achievements;
pub mod config;
pub mod consumption;
pub mod equivalents;
pub mod food;
pub mod score;
pub mod tables;
pub mod tiers;

pub use achievements::{evaluate_achievements, Achievement, ImpactTotals};
pub use config::{ConfigError, ImpactConfig};
pub use consumption::{
    aggregate, CategoryImpact, ConsumptionVector, DimensionBreakdown, MAX_MEALS_PER_WEEK,
};
pub use equivalents::EnvironmentalEquivalents;
pub use food::{FoodCategory, ParseFoodError};
pub use score::{
    economic_score, environmental_score, total_impact_score, EconomicTotals, EconomicWeights,
    EnvironmentalTotals, EnvironmentalWeights, ScoreWeights,
};
pub use tables::{EconomicTables, EnvironmentalTables, ImpactTable};
pub use tiers::{LadderError, TierDef, TierLadder, TierProgress};
