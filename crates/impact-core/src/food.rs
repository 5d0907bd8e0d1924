//! Food Categories
//!
//! The fixed set of animal-product categories the calculator tracks.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An animal-product food category.
///
/// The set is fixed; every impact table is keyed by these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Beef,
    Pork,
    Lamb,
    Chicken,
    Turkey,
    Fish,
    Eggs,
    Cheese,
    Milk,
    Yogurt,
}

impl FoodCategory {
    /// All categories, in display order.
    pub const ALL: [FoodCategory; 10] = [
        FoodCategory::Beef,
        FoodCategory::Pork,
        FoodCategory::Lamb,
        FoodCategory::Chicken,
        FoodCategory::Turkey,
        FoodCategory::Fish,
        FoodCategory::Eggs,
        FoodCategory::Cheese,
        FoodCategory::Milk,
        FoodCategory::Yogurt,
    ];

    /// Lowercase name, matching the serde representation.
    pub fn name(self) -> &'static str {
        match self {
            FoodCategory::Beef => "beef",
            FoodCategory::Pork => "pork",
            FoodCategory::Lamb => "lamb",
            FoodCategory::Chicken => "chicken",
            FoodCategory::Turkey => "turkey",
            FoodCategory::Fish => "fish",
            FoodCategory::Eggs => "eggs",
            FoodCategory::Cheese => "cheese",
            FoodCategory::Milk => "milk",
            FoodCategory::Yogurt => "yogurt",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for parsing a food category from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown food category: '{0}'")]
pub struct ParseFoodError(pub String);

impl FromStr for FoodCategory {
    type Err = ParseFoodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beef" => Ok(FoodCategory::Beef),
            "pork" => Ok(FoodCategory::Pork),
            "lamb" => Ok(FoodCategory::Lamb),
            "chicken" => Ok(FoodCategory::Chicken),
            "turkey" => Ok(FoodCategory::Turkey),
            "fish" => Ok(FoodCategory::Fish),
            "eggs" => Ok(FoodCategory::Eggs),
            "cheese" => Ok(FoodCategory::Cheese),
            "milk" => Ok(FoodCategory::Milk),
            "yogurt" => Ok(FoodCategory::Yogurt),
            _ => Err(ParseFoodError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_covers_every_category() {
        assert_eq!(FoodCategory::ALL.len(), 10);
        // Display names are unique
        let names: std::collections::HashSet<_> =
            FoodCategory::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_display_roundtrip() {
        for category in FoodCategory::ALL {
            let parsed: FoodCategory = category.name().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Beef".parse::<FoodCategory>().unwrap(), FoodCategory::Beef);
        assert_eq!("MILK".parse::<FoodCategory>().unwrap(), FoodCategory::Milk);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "tofu".parse::<FoodCategory>().unwrap_err();
        assert_eq!(err, ParseFoodError("tofu".to_string()));
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&FoodCategory::Beef).unwrap(), r#""beef""#);
        let parsed: FoodCategory = serde_json::from_str(r#""yogurt""#).unwrap();
        assert_eq!(parsed, FoodCategory::Yogurt);
    }
}
