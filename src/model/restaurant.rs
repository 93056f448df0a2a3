use chrono::NaiveDateTime;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    api_interfaces::restaurants,
    constants::{
        EDITORS_PICK_AWARD_ID, EDITORS_PICK_LABEL, IMAGE_URL_FORMAT, IMAGE_URL_REPLACE_TOKEN,
    },
    error::DataError,
};

/// A restaurant location.
///
/// Restaurants returned by a nearby search are summaries: `description` and
/// `serves` stay empty until the description is fetched, after which
/// `is_fully_loaded` reports true.
#[derive(Builder, Clone, Debug, Serialize, Deserialize)]
#[builder(setter(into))]
pub struct Restaurant {
    pub id: String,
    pub location_id: String,
    pub name: String,
    #[builder(default)]
    pub street_address: String,
    #[builder(default)]
    pub city_state_zip: String,
    #[builder(default)]
    pub phone_number: Option<String>,
    /// One `$` per price tier, at least one.
    pub price_range: String,
    #[builder(default)]
    pub image_uri: Option<String>,
    /// Distance from the search origin, when the search had one.
    #[builder(default)]
    pub spatial_offset: Option<f64>,
    #[builder(default)]
    pub is_editors_pick: bool,
    #[builder(default)]
    pub awards: Vec<Award>,
    #[builder(default)]
    pub categories: Vec<Category>,
    #[builder(default)]
    pub neighborhoods: Vec<Neighborhood>,
    #[builder(default)]
    pub amenities: Vec<Amenity>,
    #[builder(default)]
    pub deals: Vec<Deal>,
    #[builder(setter(skip))]
    description: Option<String>,
    #[builder(setter(skip))]
    serves: Option<String>,
    #[builder(setter(skip))]
    fully_loaded: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Award {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub is_best_of: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Neighborhood {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Amenity {
    pub id: String,
    pub name: String,
    pub location_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDateTime,
}

impl Restaurant {
    pub fn builder() -> RestaurantBuilder {
        RestaurantBuilder::default()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn serves(&self) -> Option<&str> {
        self.serves.as_deref()
    }

    pub fn is_fully_loaded(&self) -> bool {
        self.fully_loaded
    }

    pub(crate) fn into_fully_loaded(mut self, description: String, serves: Option<String>) -> Self {
        self.description = Some(description);
        self.serves = serves;
        self.fully_loaded = true;
        self
    }
}

/// Largest `AvgCost` accepted from the upstream.
const MAX_AVG_COST: i64 = 10;

/// `avg_cost` 0 renders as `$`, 1 as `$$`, and so on.
fn price_range(avg_cost: i64) -> Result<String, DataError> {
    if avg_cost > MAX_AVG_COST {
        return Err(DataError::message(format!("AvgCost out of range: {avg_cost}")));
    }
    let tiers = usize::try_from(avg_cost).unwrap_or(0) + 1;
    Ok("$".repeat(tiers))
}

fn image_uri(file_name: &str) -> String {
    IMAGE_URL_FORMAT.replace(IMAGE_URL_REPLACE_TOKEN, file_name)
}

impl TryFrom<restaurants::Restaurant> for Restaurant {
    type Error = DataError;

    fn try_from(raw: restaurants::Restaurant) -> Result<Self, DataError> {
        let mut builder = Restaurant::builder();

        let street_address = match raw.address2 {
            Some(line2) => format!("{}\n{}", raw.address1.unwrap_or_default(), line2),
            None => raw.address1.unwrap_or_default(),
        };
        let city_state_zip = format!(
            "{}, {} {}",
            raw.city.unwrap_or_default(),
            raw.state.unwrap_or_default(),
            raw.zip.unwrap_or_default()
        );

        builder
            .id(raw.rest_id)
            .location_id(raw.addy_id)
            .name(raw.rest_name)
            .street_address(street_address)
            .city_state_zip(city_state_zip)
            .phone_number(raw.phone)
            .price_range(price_range(raw.avg_cost)?)
            .spatial_offset(raw.distance_away)
            .categories(
                raw.cat_info_list
                    .unwrap_or_default()
                    .into_iter()
                    .map(Category::from)
                    .collect::<Vec<_>>(),
            )
            .amenities(
                raw.amenity_info_list
                    .unwrap_or_default()
                    .into_iter()
                    .map(Amenity::from)
                    .collect::<Vec<_>>(),
            );

        // only the first media record is used
        if let Some(media) = raw.media_info_list.and_then(|media| media.into_iter().next()) {
            builder.image_uri(image_uri(&media.file_name));
        }

        if let Some(awards) = raw.award_info_list {
            let is_editors_pick = awards.iter().any(|award| award.id == EDITORS_PICK_AWARD_ID);
            builder
                .is_editors_pick(is_editors_pick)
                .awards(awards.into_iter().map(Award::from).collect::<Vec<_>>());
        }

        if let Some(neighborhoods) = raw.hood_info_list {
            builder.neighborhoods(
                neighborhoods
                    .into_iter()
                    .map(Neighborhood::from)
                    .collect::<Vec<_>>(),
            );
        }

        if let Some(deals) = raw.deal_info_list {
            builder.deals(deals.into_iter().map(Deal::from).collect::<Vec<_>>());
        }

        Ok(builder.build()?)
    }
}

impl From<restaurants::Award> for Award {
    fn from(raw: restaurants::Award) -> Self {
        // LocalEats renamed "Top 100" to editor's pick but still sends the old name
        let name = if raw.id == EDITORS_PICK_AWARD_ID {
            EDITORS_PICK_LABEL.to_string()
        } else {
            raw.name.unwrap_or_default()
        };
        Self { id: raw.id, name }
    }
}

impl From<restaurants::Category> for Category {
    fn from(raw: restaurants::Category) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            is_best_of: raw.is_best_of.unwrap_or(false),
        }
    }
}

impl From<restaurants::Neighborhood> for Neighborhood {
    fn from(raw: restaurants::Neighborhood) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
        }
    }
}

impl From<restaurants::Amenity> for Amenity {
    fn from(raw: restaurants::Amenity) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            location_id: raw.addy_id,
        }
    }
}

impl From<restaurants::Deal> for Deal {
    fn from(raw: restaurants::Deal) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description.unwrap_or_default(),
            start_date: raw.start_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn raw(value: Value) -> restaurants::Restaurant {
        serde_json::from_value(value).unwrap()
    }

    fn minimal() -> Value {
        json!({
            "RestID": 101,
            "AddyID": 9001,
            "RestName": "Prince's Hot Chicken",
            "Address1": "123 Ewing Dr",
            "City": "Nashville",
            "State": "TN",
            "Zip": "37207",
            "Phone": "615-226-9442",
            "AvgCost": 0
        })
    }

    #[test]
    fn maps_summary_fields() {
        let restaurant = Restaurant::try_from(raw(minimal())).unwrap();

        assert_eq!(restaurant.id, "101");
        assert_eq!(restaurant.location_id, "9001");
        assert_eq!(restaurant.name, "Prince's Hot Chicken");
        assert_eq!(restaurant.street_address, "123 Ewing Dr");
        assert_eq!(restaurant.city_state_zip, "Nashville, TN 37207");
        assert_eq!(restaurant.phone_number.as_deref(), Some("615-226-9442"));
        assert_eq!(restaurant.price_range, "$");
        assert!(restaurant.description().is_none());
        assert!(!restaurant.is_fully_loaded());
    }

    #[test]
    fn price_range_is_one_more_than_avg_cost() {
        let mut value = minimal();
        value["AvgCost"] = json!(2);

        let restaurant = Restaurant::try_from(raw(value)).unwrap();

        assert_eq!(restaurant.price_range, "$$$");
    }

    #[test]
    fn price_range_never_empty() {
        assert_eq!(price_range(-3).unwrap(), "$");
        assert_eq!(price_range(3).unwrap(), "$$$$");
    }

    #[test]
    fn huge_avg_cost_is_rejected() {
        let mut value = minimal();
        value["AvgCost"] = json!(i64::MAX);

        let err = Restaurant::try_from(raw(value)).unwrap_err();

        assert!(matches!(err, DataError::Message(_)));
        assert_eq!(
            err.to_string(),
            format!("AvgCost out of range: {}", i64::MAX)
        );
        assert_eq!(price_range(MAX_AVG_COST).unwrap().len(), 11);
        assert!(price_range(MAX_AVG_COST + 1).is_err());
    }

    #[test]
    fn second_address_line_is_joined_with_newline() {
        let mut value = minimal();
        value["Address2"] = json!("Suite 400");

        let restaurant = Restaurant::try_from(raw(value)).unwrap();

        assert_eq!(restaurant.street_address, "123 Ewing Dr\nSuite 400");
    }

    #[test]
    fn missing_sections_map_to_empty() {
        let restaurant = Restaurant::try_from(raw(minimal())).unwrap();

        assert!(restaurant.categories.is_empty());
        assert!(restaurant.amenities.is_empty());
        assert!(restaurant.awards.is_empty());
        assert!(restaurant.neighborhoods.is_empty());
        assert!(restaurant.deals.is_empty());
        assert!(restaurant.image_uri.is_none());
        assert!(restaurant.spatial_offset.is_none());
        assert!(!restaurant.is_editors_pick);
    }

    #[test]
    fn editors_pick_award_is_renamed() {
        let mut value = minimal();
        value["AwardInfoList"] = json!([
            { "AwardID": 3, "AwardName": "Best Of" },
            { "AwardID": 1, "AwardName": "Top 100" }
        ]);

        let restaurant = Restaurant::try_from(raw(value)).unwrap();

        assert!(restaurant.is_editors_pick);
        assert_eq!(restaurant.awards.len(), 2);
        assert_eq!(restaurant.awards[0].name, "Best Of");
        assert_eq!(restaurant.awards[1].id, "1");
        assert_eq!(restaurant.awards[1].name, "Editors Pick");
    }

    #[test]
    fn other_awards_do_not_set_editors_pick() {
        let mut value = minimal();
        value["AwardInfoList"] = json!([{ "AwardID": "7", "AwardName": "Best Patio" }]);

        let restaurant = Restaurant::try_from(raw(value)).unwrap();

        assert!(!restaurant.is_editors_pick);
        assert_eq!(restaurant.awards[0].name, "Best Patio");
    }

    #[test]
    fn only_first_media_record_is_used() {
        let mut value = minimal();
        value["MediaInfoList"] = json!([
            { "MediaFileName": "23132-1.jpg" },
            { "MediaFileName": "23132-2.jpg" }
        ]);

        let restaurant = Restaurant::try_from(raw(value)).unwrap();

        assert_eq!(
            restaurant.image_uri.as_deref(),
            Some("http://cdn.localeats.com/media/images/23132-1.jpg?dummy=dummy40")
        );
    }

    #[test]
    fn maps_sections() {
        let mut value = minimal();
        value["DistanceAway"] = json!(1.25);
        value["CatInfoList"] = json!([
            { "CatID": "52", "CatName": "Hot Chicken", "IsBestOf": true },
            { "CatID": "8", "CatName": "Southern" }
        ]);
        value["AmendInfoList"] = json!([
            { "AmendityID": "4", "AmendityName": "Patio", "AddyID": "9001" }
        ]);
        value["HoodInfoList"] = json!([{ "HoodID": 12, "HoodName": "East Nashville" }]);
        value["DealInfoList"] = json!([{
            "Id": 5,
            "Title": "Free pickle",
            "Description": "With any plate",
            "StartDate": "2015-03-01T00:00:00"
        }]);

        let restaurant = Restaurant::try_from(raw(value)).unwrap();

        assert_eq!(restaurant.spatial_offset, Some(1.25));
        assert!(restaurant.categories[0].is_best_of);
        assert!(!restaurant.categories[1].is_best_of);
        assert_eq!(restaurant.amenities[0].location_id, "9001");
        assert_eq!(restaurant.neighborhoods[0].id, "12");
        assert_eq!(restaurant.deals[0].title, "Free pickle");
        assert_eq!(
            restaurant.deals[0].start_date.to_string(),
            "2015-03-01 00:00:00"
        );
    }

    #[test]
    fn into_fully_loaded_keeps_identity() {
        let summary = Restaurant::try_from(raw(minimal())).unwrap();

        let description = "Hot chicken. Since 1945".to_string();
        let full = summary
            .clone()
            .into_fully_loaded(description, Some("Lunch".to_string()));

        assert_eq!(full.id, summary.id);
        assert_eq!(full.location_id, summary.location_id);
        assert_eq!(full.name, summary.name);
        assert_eq!(full.description(), Some("Hot chicken. Since 1945"));
        assert_eq!(full.serves(), Some("Lunch"));
        assert!(full.is_fully_loaded());
    }

    #[test]
    fn builder_requires_price_range() {
        let result = Restaurant::builder()
            .id("1")
            .location_id("2")
            .name("Nameless")
            .build();
        assert!(matches!(
            result,
            Err(RestaurantBuilderError::UninitializedField("price_range"))
        ));
    }
}
