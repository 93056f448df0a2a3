use serde::{Deserialize, Serialize};

use crate::api_interfaces::counts;

/// A category in a city with the number of matching restaurants.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategoryCount {
    pub id: String,
    pub name: String,
    pub restaurant_count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NeighborhoodCount {
    pub id: String,
    pub name: String,
    pub restaurant_count: u32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AmenityCount {
    pub id: String,
    pub name: String,
    pub restaurant_count: u32,
}

impl From<counts::CategoryCount> for CategoryCount {
    fn from(raw: counts::CategoryCount) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            restaurant_count: raw.count,
        }
    }
}

impl From<counts::NeighborhoodCount> for NeighborhoodCount {
    fn from(raw: counts::NeighborhoodCount) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            restaurant_count: raw.count,
        }
    }
}

impl From<counts::AmenityCount> for AmenityCount {
    fn from(raw: counts::AmenityCount) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            restaurant_count: raw.count,
        }
    }
}
