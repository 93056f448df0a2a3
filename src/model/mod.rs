//! Domain entities produced from API responses.
//!
//! Every entity is identified by its `id`: two values with the same id are the
//! same logical record whatever their other fields hold.

mod counts;
mod restaurant;
mod state;

pub use counts::{AmenityCount, CategoryCount, NeighborhoodCount};
pub use restaurant::{
    Amenity, Award, Category, Deal, Neighborhood, Restaurant, RestaurantBuilder,
    RestaurantBuilderError,
};
pub use state::{City, State};

macro_rules! identified_by_id {
    ($($ty:ty),+ $(,)?) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.id == other.id
            }
        }

        impl Eq for $ty {}

        impl std::hash::Hash for $ty {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.id.hash(state);
            }
        }
    )+};
}

identified_by_id!(
    State,
    City,
    CategoryCount,
    NeighborhoodCount,
    AmenityCount,
    Restaurant,
    Award,
    Category,
    Neighborhood,
    Amenity,
    Deal,
);
