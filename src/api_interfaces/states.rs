use serde::Deserialize;

use super::id_string;

/// Raw `GetAllMajorUSCites` response.
#[derive(Deserialize)]
pub struct MajorCitiesResponse {
    #[serde(rename = "Cities")]
    pub cities: Vec<MajorCity>,
}

/// One major city row; only its state columns are used.
#[derive(Deserialize)]
pub struct MajorCity {
    #[serde(rename = "State_ID", deserialize_with = "id_string")]
    pub state_id: String,
    #[serde(rename = "StateShort")]
    pub state_short: String,
}

/// Raw `GetCityListByStateID` response.
#[derive(Deserialize)]
pub struct CitiesResponse {
    #[serde(rename = "Cities")]
    pub cities: Vec<City>,
}

#[derive(Deserialize)]
pub struct City {
    #[serde(rename = "D_City_ID", deserialize_with = "id_string")]
    pub id: String,
    #[serde(rename = "City_Name")]
    pub name: String,
}
