//! Species and the Rescue Roster
//!
//! The fixed set of adoptable rescued animals. Each profile carries
//! the identity fields copied onto the companion record at adoption.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Species of a rescued animal.
///
/// Serialized capitalized ("Cow") for compatibility with persisted
/// records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    Cow,
    Pig,
    Chicken,
    Goat,
    Sheep,
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Species::Cow => write!(f, "Cow"),
            Species::Pig => write!(f, "Pig"),
            Species::Chicken => write!(f, "Chicken"),
            Species::Goat => write!(f, "Goat"),
            Species::Sheep => write!(f, "Sheep"),
        }
    }
}

/// An adoptable rescued animal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescueProfile {
    /// Stable identifier, e.g. "cow-1".
    pub id: String,
    pub name: String,
    pub species: Species,
    /// Portrait image reference.
    pub portrait: String,
    /// Origin story shown at adoption time.
    pub story: String,
}

impl RescueProfile {
    fn new(id: &str, name: &str, species: Species, portrait: &str, story: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            species,
            portrait: portrait.to_string(),
            story: story.to_string(),
        }
    }
}

/// The five adoptable rescues.
pub fn rescue_roster() -> Vec<RescueProfile> {
    vec![
        RescueProfile::new(
            "cow-1",
            "Bella",
            Species::Cow,
            "https://images.unsplash.com/photo-1472396961693-142e6e269027?auto=format&fit=crop&w=600&q=80",
            "Bella was rescued from a dairy farm where she had been separated from her calves \
             repeatedly. Now she lives peacefully at a sanctuary where she can nurture and \
             protect her young.",
        ),
        RescueProfile::new(
            "pig-1",
            "Oliver",
            Species::Pig,
            "https://images.unsplash.com/photo-1517022812141-23620dba5c23?auto=format&fit=crop&w=600&q=80",
            "Oliver was saved from a factory farm where thousands of pigs lived in crowded, \
             unsanitary conditions. Today, he enjoys mud baths, fresh air, and the company of \
             other rescued pigs.",
        ),
        RescueProfile::new(
            "chicken-1",
            "Luna",
            Species::Chicken,
            "https://images.unsplash.com/photo-1535268647677-300dbf3d78d1?auto=format&fit=crop&w=600&q=80",
            "Luna was rescued from an egg farm where she lived in a tiny cage. Her feathers \
             were missing and her health was poor. With love and care, she recovered and now \
             enjoys dust baths and sunshine.",
        ),
        RescueProfile::new(
            "goat-1",
            "Charlie",
            Species::Goat,
            "https://images.unsplash.com/photo-1438565434616-3ef039228b15?auto=format&fit=crop&w=600&q=80",
            "Charlie was rescued from a petting zoo where he was malnourished and suffering \
             from neglect. Now he enjoys climbing rocks and playing with other goats at his \
             sanctuary home.",
        ),
        RescueProfile::new(
            "sheep-1",
            "Daisy",
            Species::Sheep,
            "https://images.unsplash.com/photo-1465379944081-7f47de8d74ac?auto=format&fit=crop&w=600&q=80",
            "Daisy was rescued just before being sent to slaughter. She had never been \
             properly sheared and was suffering from the weight of her overgrown wool. Now \
             she enjoys the sunshine and grassy fields at her sanctuary.",
        ),
    ]
}
