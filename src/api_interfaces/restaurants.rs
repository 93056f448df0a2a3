use chrono::NaiveDateTime;
use serde::Deserialize;

use super::{id_string, timestamp};

/// Raw `GetRestaurantListNearBy` response.
#[derive(Deserialize)]
pub struct NearbyResponse {
    #[serde(rename = "Restaurants")]
    pub restaurants: Vec<Restaurant>,
}

/// Raw restaurant record. The `*List` sections are optional.
#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Restaurant {
    #[serde(rename = "RestID", deserialize_with = "id_string")]
    pub rest_id: String,
    #[serde(rename = "AddyID", deserialize_with = "id_string")]
    pub addy_id: String,
    pub rest_name: String,
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub phone: Option<String>,
    pub avg_cost: i64,
    pub distance_away: Option<f64>,
    pub cat_info_list: Option<Vec<Category>>,
    #[serde(rename = "AmendInfoList")]
    pub amenity_info_list: Option<Vec<Amenity>>,
    pub media_info_list: Option<Vec<Media>>,
    pub award_info_list: Option<Vec<Award>>,
    pub hood_info_list: Option<Vec<Neighborhood>>,
    pub deal_info_list: Option<Vec<Deal>>,
}

#[derive(Deserialize)]
pub struct Category {
    #[serde(rename = "CatID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "CatName")]
    pub name: String,
    #[serde(rename = "IsBestOf")]
    pub is_best_of: Option<bool>,
}

#[derive(Deserialize)]
pub struct Amenity {
    #[serde(rename = "AmendityID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "AmendityName")]
    pub name: String,
    #[serde(rename = "AddyID", deserialize_with = "id_string")]
    pub addy_id: String,
}

#[derive(Deserialize)]
pub struct Media {
    #[serde(rename = "MediaFileName")]
    pub file_name: String,
}

#[derive(Deserialize)]
pub struct Award {
    #[serde(rename = "AwardID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "AwardName")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct Neighborhood {
    #[serde(rename = "HoodID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "HoodName")]
    pub name: String,
}

#[derive(Deserialize)]
pub struct Deal {
    #[serde(rename = "Id", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "StartDate", deserialize_with = "timestamp")]
    pub start_date: NaiveDateTime,
}

/// Raw `GetRestauranDescByAddyID` response.
#[derive(Deserialize)]
pub struct DescriptionResponse {
    #[serde(rename = "Restaurant")]
    pub restaurant: Description,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Description {
    pub rest_desc: Option<String>,
    pub rest_cite: Option<String>,
    pub rest_add_info: Option<String>,
}
