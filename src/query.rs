use derive_builder::Builder;
use serde::Serialize;

use crate::{constants::DEFAULT_PAGE_SIZE, filter::FilterOptions, model::City};

/// Parameters of a nearby-restaurants search.
///
/// The search needs an origin: either both `latitude` and `longitude`, or a
/// `city_id`. When both are given the upstream receives both.
#[derive(Builder, Clone, Debug, PartialEq, Serialize)]
#[builder(default, setter(into))]
pub struct NearbyQuery {
    pub filters: FilterOptions,
    #[builder(setter(into, strip_option))]
    pub latitude: Option<f64>,
    #[builder(setter(into, strip_option))]
    pub longitude: Option<f64>,
    #[builder(setter(into, strip_option))]
    pub city_id: Option<String>,
    /// Page size.
    pub size: u32,
    /// Number of restaurants to skip before the page starts.
    pub skip: u32,
}

impl Default for NearbyQuery {
    fn default() -> Self {
        Self {
            filters: FilterOptions::default(),
            latitude: None,
            longitude: None,
            city_id: None,
            size: DEFAULT_PAGE_SIZE,
            skip: 0,
        }
    }
}

impl NearbyQuery {
    pub fn builder() -> NearbyQueryBuilder {
        NearbyQueryBuilder::default()
    }

    /// Restaurants in `city`, first page.
    pub fn in_city(city: &City, filters: FilterOptions) -> Self {
        Self {
            filters,
            city_id: Some(city.id.clone()),
            ..Self::default()
        }
    }

    /// Restaurants around a geo location, first page.
    pub fn near(latitude: f64, longitude: f64, filters: FilterOptions) -> Self {
        Self {
            filters,
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    /// The next page of the same search.
    pub fn next_page(&self) -> Self {
        Self {
            skip: self.skip.saturating_add(self.size),
            ..self.clone()
        }
    }

    pub fn has_origin(&self) -> bool {
        (self.latitude.is_some() && self.longitude.is_some())
            || self.city_id.as_deref().is_some_and(|id| !id.is_empty())
    }
}
