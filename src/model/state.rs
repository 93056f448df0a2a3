use std::{collections::HashMap, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::{api_interfaces::states, error::DataError};

/// Display names for the state abbreviations the API reports.
static STATE_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("AL", "Alabama"),
        ("AK", "Alaska"),
        ("AZ", "Arizona"),
        ("AR", "Arkansas"),
        ("CA", "California"),
        ("CO", "Colorado"),
        ("CT", "Connecticut"),
        ("DE", "Delaware"),
        ("DC", "Dist. of Columbia"),
        ("FL", "Florida"),
        ("GA", "Georgia"),
        ("HI", "Hawaii"),
        ("ID", "Idaho"),
        ("IL", "Illinois"),
        ("IN", "Indiana"),
        ("IA", "Iowa"),
        ("KS", "Kansas"),
        ("KY", "Kentucky"),
        ("LA", "Louisiana"),
        ("ME", "Maine"),
        ("MD", "Maryland"),
        ("MA", "Massachusetts"),
        ("MI", "Michigan"),
        ("MN", "Minnesota"),
        ("MS", "Mississippi"),
        ("MO", "Missouri"),
        ("MT", "Montana"),
        ("NE", "Nebraska"),
        ("NV", "Nevada"),
        ("NH", "New Hampshire"),
        ("NJ", "New Jersey"),
        ("NM", "New Mexico"),
        ("NY", "New York"),
        ("NC", "North Carolina"),
        ("ND", "North Dakota"),
        ("OH", "Ohio"),
        ("OK", "Oklahoma"),
        ("OR", "Oregon"),
        ("PA", "Pennsylvania"),
        ("RI", "Rhode Island"),
        ("SC", "South Carolina"),
        ("SD", "South Dakota"),
        ("TN", "Tennessee"),
        ("TX", "Texas"),
        ("UT", "Utah"),
        ("VT", "Vermont"),
        ("VA", "Virginia"),
        ("WA", "Washington"),
        ("WV", "West Virginia"),
        ("WI", "Wisconsin"),
        ("WY", "Wyoming"),
    ])
});

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct State {
    pub id: String,
    pub name: String,
    #[serde(default)]
    cities: Option<Vec<City>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct City {
    pub id: String,
    pub name: String,
}

impl State {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cities: None,
        }
    }

    /// The cities of this state, once loaded.
    pub fn cities(&self) -> Option<&[City]> {
        self.cities.as_deref()
    }

    /// True once a city list has been attached, even an empty one.
    pub fn cities_loaded(&self) -> bool {
        self.cities.is_some()
    }

    /// Attach the city list. An already attached list is kept.
    pub(crate) fn with_cities(mut self, cities: Vec<City>) -> Self {
        if self.cities.is_none() {
            self.cities = Some(cities);
        }
        self
    }
}

impl City {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl TryFrom<states::MajorCity> for State {
    type Error = DataError;

    fn try_from(raw: states::MajorCity) -> Result<Self, DataError> {
        let name = STATE_NAMES.get(raw.state_short.as_str()).ok_or_else(|| {
            DataError::message(format!("Unknown state abbreviation: {}", raw.state_short))
        })?;
        Ok(State::new(raw.state_id, *name))
    }
}

impl From<states::City> for City {
    fn from(raw: states::City) -> Self {
        City::new(raw.id, raw.name)
    }
}
