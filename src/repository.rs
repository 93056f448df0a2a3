//! Read-through caching over a [`RestaurantDao`].

use std::{future::Future, sync::Arc};

use serde::Serialize;
use tracing::debug;

use crate::{
    cache::{CacheKey, MemoryCache},
    dao::RestaurantDao,
    error::DataError,
    filter::FilterOptions,
    model::{AmenityCount, CategoryCount, City, NeighborhoodCount, Restaurant, State},
    query::NearbyQuery,
};

/// Serves repeated calls from a [`MemoryCache`] and forwards misses to the dao.
///
/// Only successful results are stored. Two identical calls racing on an empty
/// cache may both reach the dao; the later result overwrites the earlier one.
pub struct CachingRepository<D> {
    dao: D,
    cache: Arc<MemoryCache>,
}

impl<D: RestaurantDao> CachingRepository<D> {
    pub fn new(dao: D, cache: Arc<MemoryCache>) -> Self {
        Self { dao, cache }
    }

    pub fn cache(&self) -> &Arc<MemoryCache> {
        &self.cache
    }

    pub fn dao(&self) -> &D {
        &self.dao
    }

    pub async fn get_states(&self) -> Result<Vec<State>, DataError> {
        let key = CacheKey::derive("get_states", &())?;
        self.read_through(key, self.dao.get_states()).await
    }

    pub async fn get_cities(&self, state: &State) -> Result<State, DataError> {
        let key = CacheKey::for_entity("get_cities", &state.id);
        self.read_through(key, self.dao.get_cities(state)).await
    }

    pub async fn get_restaurants_nearby(
        &self,
        query: &NearbyQuery,
    ) -> Result<Vec<Restaurant>, DataError> {
        let key = CacheKey::derive("get_restaurants_nearby", query)?;
        self.read_through(key, self.dao.get_restaurants_nearby(query))
            .await
    }

    pub async fn get_restaurant_description(
        &self,
        restaurant: &Restaurant,
    ) -> Result<Restaurant, DataError> {
        let key = CacheKey::for_entity(
            "get_restaurant_description",
            &format!("{}@{}", restaurant.id, restaurant.location_id),
        );
        self.read_through(key, self.dao.get_restaurant_description(restaurant))
            .await
    }

    pub async fn get_category_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<CategoryCount>, DataError> {
        let key = city_key("get_category_counts", city, filters)?;
        self.read_through(key, self.dao.get_category_counts(city, filters))
            .await
    }

    pub async fn get_neighborhood_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<NeighborhoodCount>, DataError> {
        let key = city_key("get_neighborhood_counts", city, filters)?;
        self.read_through(key, self.dao.get_neighborhood_counts(city, filters))
            .await
    }

    pub async fn get_amenity_counts(
        &self,
        city: &City,
        filters: &FilterOptions,
    ) -> Result<Vec<AmenityCount>, DataError> {
        let key = city_key("get_amenity_counts", city, filters)?;
        self.read_through(key, self.dao.get_amenity_counts(city, filters))
            .await
    }

    async fn read_through<T, F>(&self, key: CacheKey, fetch: F) -> Result<T, DataError>
    where
        T: Clone + Send + Sync + 'static,
        F: Future<Output = Result<T, DataError>>,
    {
        if let Some(hit) = self.cache.get::<T>(&key) {
            debug!(key = key.as_str(), "cache hit");
            return Ok(hit);
        }
        debug!(key = key.as_str(), "cache miss");
        let value = fetch.await?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }
}

fn city_key(operation: &str, city: &City, filters: &FilterOptions) -> Result<CacheKey, DataError> {
    #[derive(Serialize)]
    struct Args<'a> {
        city_id: &'a str,
        filters: &'a FilterOptions,
    }

    Ok(CacheKey::derive(
        operation,
        &Args {
            city_id: &city.id,
            filters,
        },
    )?)
}
