use serde::Deserialize;

use super::id_string;

/// Raw `GetCategoryListCount` response.
#[derive(Deserialize)]
pub struct CategoryCountsResponse {
    #[serde(rename = "CategoryFilterCounts")]
    pub categories: Vec<CategoryCount>,
}

#[derive(Deserialize)]
pub struct CategoryCount {
    #[serde(rename = "CategoryID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "CategoryName")]
    pub name: String,
    #[serde(rename = "CategoryCount")]
    pub count: u32,
}

/// Raw `GetHoodListCount` response.
#[derive(Deserialize)]
pub struct NeighborhoodCountsResponse {
    #[serde(rename = "HoodFilterCount")]
    pub neighborhoods: Vec<NeighborhoodCount>,
}

#[derive(Deserialize)]
pub struct NeighborhoodCount {
    #[serde(rename = "HoodID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "HoodName")]
    pub name: String,
    #[serde(rename = "HoodCount")]
    pub count: u32,
}

/// Raw `GetAmmendityListCount` response.
#[derive(Deserialize)]
pub struct AmenityCountsResponse {
    #[serde(rename = "AmendityFilterCount")]
    pub amenities: Vec<AmenityCount>,
}

#[derive(Deserialize)]
pub struct AmenityCount {
    #[serde(rename = "AmendityID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "AmendityName")]
    pub name: String,
    #[serde(rename = "AmendityCount")]
    pub count: u32,
}
