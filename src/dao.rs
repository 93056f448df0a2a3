//! Remote data access for the LocalEats API.
//!
//! Each operation issues exactly one GET and maps the JSON into domain types.
//! Nothing is retried and nothing is paginated.

use std::future::Future;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    api_interfaces::{counted, counts, restaurants, states},
    command::Command,
    config::Config,
    error::DataError,
    filter::FilterOptions,
    model::{AmenityCount, CategoryCount, City, NeighborhoodCount, Restaurant, State},
    query::NearbyQuery,
    ApiKey,
};

const GET_MAJOR_CITIES: &str = "GetAllMajorUSCites";
const GET_CITIES_BY_STATE: &str = "GetCityListByStateID";
const GET_RESTAURANTS_NEARBY: &str = "GetRestaurantListNearBy";
const GET_RESTAURANT_DESCRIPTION: &str = "GetRestauranDescByAddyID";
const GET_CATEGORY_COUNTS: &str = "GetCategoryListCount";
const GET_NEIGHBORHOOD_COUNTS: &str = "GetHoodListCount";
const GET_AMENITY_COUNTS: &str = "GetAmmendityListCount";

/// Sections requested with every nearby search: awards, categories, deals,
/// hoods, price, reviews, specials, amenities, media.
const NEARBY_SECTIONS: &str = "acdhprstm";

const STATES_PAGE_SIZE: u32 = 100;
const CITIES_PAGE_SIZE: u32 = 500;

const NO_STATE_INFORMATION: &str = "No state information available.";

/// Source of LocalEats data.
pub trait RestaurantDao: Send + Sync {
    /// All supported states, sorted by name. The upstream lists one row per
    /// major city; states repeated across rows are returned once.
    fn get_states(&self) -> impl Future<Output = Result<Vec<State>, DataError>> + Send;

    /// `state` with its city list attached.
    fn get_cities(&self, state: &State) -> impl Future<Output = Result<State, DataError>> + Send;

    fn get_restaurants_nearby(
        &self,
        query: &NearbyQuery,
    ) -> impl Future<Output = Result<Vec<Restaurant>, DataError>> + Send;

    /// A fully loaded copy of `restaurant`.
    fn get_restaurant_description(
        &self,
        restaurant: &Restaurant,
    ) -> impl Future<Output = Result<Restaurant, DataError>> + Send;

    fn get_category_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> impl Future<Output = Result<Vec<CategoryCount>, DataError>> + Send;

    fn get_neighborhood_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> impl Future<Output = Result<Vec<NeighborhoodCount>, DataError>> + Send;

    fn get_amenity_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> impl Future<Output = Result<Vec<AmenityCount>, DataError>> + Send;
}

/// [`RestaurantDao`] backed by the LocalEats HTTP API.
#[derive(Clone, Debug)]
pub struct HttpRestaurantDao {
    http: Client,
    api_key: ApiKey,
    endpoint: String,
}

impl HttpRestaurantDao {
    pub fn new(http: Client, config: Config) -> Self {
        Self {
            http,
            api_key: config.api_key,
            endpoint: config.endpoint,
        }
    }

    /// The parsed body, or `None` when the body is empty.
    async fn do_get(&self, command: &Command) -> Result<Option<Value>, DataError> {
        debug!(
            command = command.name(),
            query = %command.query_string(),
            "executing GET"
        );
        let response = self
            .http
            .get(command.to_url(&self.endpoint, &self.api_key))
            .send()
            .await
            .map_err(|e| DataError::RequestError(e.without_url()))?;
        if !response.status().is_success() {
            warn!(
                command = command.name(),
                status = %response.status(),
                "request failed"
            );
            return Err(DataError::ResponseError(response.status()));
        }
        let body = response
            .text()
            .await
            .map_err(|e| DataError::ResponseBodyError(e.without_url()))?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }

    async fn get_body(&self, command: &Command) -> Result<Value, DataError> {
        self.do_get(command).await?.ok_or(DataError::EmptyResponse)
    }

    fn counts_command(
        name: &str,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Command, DataError> {
        Ok(Command::new(name)?
            .param("format", "json")
            .param("cityid", &city.id)
            .filters(filters))
    }
}

impl RestaurantDao for HttpRestaurantDao {
    async fn get_states(&self) -> Result<Vec<State>, DataError> {
        let command = Command::new(GET_MAJOR_CITIES)?
            .param("format", "json")
            .param("top", STATES_PAGE_SIZE)
            .param("skip", 0);

        let body = self.get_body(&command).await?;
        let response = counted::<states::MajorCitiesResponse>(body)?
            .ok_or_else(|| DataError::message(NO_STATE_INFORMATION))?;

        let mut states = response
            .cities
            .into_iter()
            .map(State::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        // one row per major city, so a state can appear more than once
        states.sort_by(|a, b| a.name.cmp(&b.name));
        states.dedup_by(|a, b| a.id == b.id);
        Ok(states)
    }

    async fn get_cities(&self, state: &State) -> Result<State, DataError> {
        let command = Command::new(GET_CITIES_BY_STATE)?
            .param("top", CITIES_PAGE_SIZE)
            .param("format", "json")
            .param("stateId", &state.id);

        let body = self.get_body(&command).await?;
        let cities = counted::<states::CitiesResponse>(body)?
            .map(|response| response.cities.into_iter().map(City::from).collect())
            .unwrap_or_default();
        Ok(state.clone().with_cities(cities))
    }

    async fn get_restaurants_nearby(
        &self,
        query: &NearbyQuery,
    ) -> Result<Vec<Restaurant>, DataError> {
        debug_assert!(
            query.has_origin(),
            "nearby search needs lat/lon or a city id"
        );

        let mut command = Command::new(GET_RESTAURANTS_NEARBY)?.param("format", "json");
        if let Some(city_id) = query.city_id.as_deref().filter(|id| !id.is_empty()) {
            command = command.param("cityid", city_id);
        }
        command = command.param("ginfo", NEARBY_SECTIONS);
        if let Some(latitude) = query.latitude {
            command = command.param("lat", latitude);
        }
        if let Some(longitude) = query.longitude {
            command = command.param("lon", longitude);
        }
        let command = command
            .param("top", query.size)
            .param("skip", query.skip)
            .filters(&query.filters);

        let Some(body) = self.do_get(&command).await? else {
            return Ok(Vec::new());
        };
        let Some(response) = counted::<restaurants::NearbyResponse>(body)? else {
            return Ok(Vec::new());
        };
        response
            .restaurants
            .into_iter()
            .map(Restaurant::try_from)
            .collect()
    }

    async fn get_restaurant_description(
        &self,
        restaurant: &Restaurant,
    ) -> Result<Restaurant, DataError> {
        let command = Command::new(GET_RESTAURANT_DESCRIPTION)?
            .param("format", "json")
            .param("addyid", &restaurant.location_id);

        let body = self.get_body(&command).await?;
        let response: restaurants::DescriptionResponse = serde_json::from_value(body)?;
        let details = response.restaurant;
        let description = format!(
            "{} {}",
            details.rest_desc.unwrap_or_default(),
            details.rest_cite.unwrap_or_default()
        );
        Ok(restaurant
            .clone()
            .into_fully_loaded(description, details.rest_add_info))
    }

    async fn get_category_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<CategoryCount>, DataError> {
        let command = Self::counts_command(GET_CATEGORY_COUNTS, city, filters)?;
        let body = self.get_body(&command).await?;
        let response: counts::CategoryCountsResponse = serde_json::from_value(body)?;
        Ok(response
            .categories
            .into_iter()
            .map(CategoryCount::from)
            .collect())
    }

    async fn get_neighborhood_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<NeighborhoodCount>, DataError> {
        let command = Self::counts_command(GET_NEIGHBORHOOD_COUNTS, city, filters)?;
        let body = self.get_body(&command).await?;
        let response: counts::NeighborhoodCountsResponse = serde_json::from_value(body)?;
        Ok(response
            .neighborhoods
            .into_iter()
            .map(NeighborhoodCount::from)
            .collect())
    }

    async fn get_amenity_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<AmenityCount>, DataError> {
        let command = Self::counts_command(GET_AMENITY_COUNTS, city, filters)?;
        let body = self.get_body(&command).await?;
        let response: counts::AmenityCountsResponse = serde_json::from_value(body)?;
        Ok(response
            .amenities
            .into_iter()
            .map(AmenityCount::from)
            .collect())
    }
}
