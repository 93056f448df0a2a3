use std::{path::Path, sync::Arc};

use crate::{
    cache::MemoryCache,
    config::Config,
    dao::HttpRestaurantDao,
    error::{ConfigError, DataError, SaveError},
    filter::FilterOptions,
    image,
    model::{AmenityCount, CategoryCount, City, NeighborhoodCount, Restaurant, State},
    query::NearbyQuery,
    repository::CachingRepository,
    util::default_http_client,
};

/// Entry point to the LocalEats API.
///
/// Results are cached for the lifetime of the cache; clone the `Arc` given to
/// [`Client::with_cache`] to share it between clients.
pub struct Client {
    http_client: reqwest::Client,
    repository: CachingRepository<HttpRestaurantDao>,
}

impl Client {
    /// Client with its own, initially empty cache.
    pub fn new(http_client: reqwest::Client, config: Config) -> Result<Self, ConfigError> {
        Self::with_cache(http_client, config, Arc::new(MemoryCache::new()))
    }

    pub fn with_cache(
        http_client: reqwest::Client,
        config: Config,
        cache: Arc<MemoryCache>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let dao = HttpRestaurantDao::new(http_client.clone(), config);
        Ok(Self {
            http_client,
            repository: CachingRepository::new(dao, cache),
        })
    }

    /// Client configured from `LOCALEATS_API_KEY` / `LOCALEATS_ENDPOINT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(default_http_client()?, Config::from_env()?)
    }

    pub fn cache(&self) -> &Arc<MemoryCache> {
        self.repository.cache()
    }

    pub async fn get_states_list(&self) -> Result<Vec<State>, DataError> {
        self.repository.get_states().await
    }

    /// `state` with its cities attached. A state that already has them is
    /// returned as is.
    pub async fn get_cities(&self, state: &State) -> Result<State, DataError> {
        if state.cities_loaded() {
            return Ok(state.clone());
        }
        self.repository.get_cities(state).await
    }

    pub async fn get_city_list(&self, state: &State) -> Result<Vec<City>, DataError> {
        if let Some(cities) = state.cities() {
            return Ok(cities.to_vec());
        }
        let loaded = self.repository.get_cities(state).await?;
        Ok(loaded.cities().map(<[City]>::to_vec).unwrap_or_default())
    }

    pub async fn get_restaurants_nearby(
        &self,
        query: &NearbyQuery,
    ) -> Result<Vec<Restaurant>, DataError> {
        self.repository.get_restaurants_nearby(query).await
    }

    /// `restaurant` with its description and meal times filled in.
    pub async fn get_restaurant_description(
        &self,
        restaurant: &Restaurant,
    ) -> Result<Restaurant, DataError> {
        if restaurant.is_fully_loaded() {
            return Ok(restaurant.clone());
        }
        self.repository.get_restaurant_description(restaurant).await
    }

    pub async fn get_category_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<CategoryCount>, DataError> {
        self.repository.get_category_counts(city, filters).await
    }

    pub async fn get_neighborhood_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<NeighborhoodCount>, DataError> {
        self.repository.get_neighborhood_counts(city, filters).await
    }

    pub async fn get_amenity_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<AmenityCount>, DataError> {
        self.repository.get_amenity_counts(city, filters).await
    }

    pub async fn save_restaurant_image(
        &self,
        restaurant: &Restaurant,
        path: impl AsRef<Path>,
    ) -> Result<(), SaveError> {
        image::save_image(&self.http_client, restaurant, path).await
    }
}
