//! Restaurant filter options.
//!
//! Each option becomes one query parameter on the request. Options that accept
//! several ids take them comma separated, e.g. `pfil=1,2`.
//!
//! The upstream filters are coarse: every option widens the match rather than
//! narrowing it. Asking for `CATEGORIES` with a category id together with
//! `BEST_OF_WINNER` returns restaurants in that category *or* restaurants that
//! won a best-of award in any category.

use std::borrow::Cow;

use serde::Serialize;

use crate::error::InvalidArgument;

/// Only restaurants that are Top 10 award winners.
pub const TOP_10: FilterOption = FilterOption::from_static("tfil", "1");
/// Only restaurants that are best-of category winners.
pub const BEST_OF_WINNER: FilterOption = FilterOption::from_static("bfil", "1");
pub const PRICE_1: FilterOption = FilterOption::from_static("pfil", "1");
pub const PRICE_2: FilterOption = FilterOption::from_static("pfil", "2");
pub const PRICE_3: FilterOption = FilterOption::from_static("pfil", "3");
pub const PRICE_4: FilterOption = FilterOption::from_static("pfil", "4");

// Empty until extended with `add_value`.
pub const CATEGORIES: FilterOption = FilterOption::from_static("cfil", "");
pub const NEIGHBORHOODS: FilterOption = FilterOption::from_static("hfil", "");
pub const AMENITY_FEATURES: FilterOption = FilterOption::from_static("afil", "");
pub const MEAL_TIMES: FilterOption = FilterOption::from_static("sfil", "");

/// Sort alphabetically by name instead of by distance.
pub const SORT_BY_NAME: FilterOption = FilterOption::from_static("SortExpr", "rest_name");

/// A single named filter predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FilterOption {
    name: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl FilterOption {
    const fn from_static(name: &'static str, value: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            value: Cow::Borrowed(value),
        }
    }

    pub fn new(name: impl Into<String>, value: impl ToString) -> Result<Self, InvalidArgument> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidArgument::EmptyName);
        }
        Ok(Self {
            name: Cow::Owned(name),
            value: Cow::Owned(value.to_string()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// True for the empty templates meant to be extended.
    pub fn is_template(&self) -> bool {
        self.value.is_empty()
    }

    /// Return a copy with `other` appended to the value, comma separated.
    pub fn add_value(&self, other: &str) -> Result<Self, InvalidArgument> {
        if other.is_empty() {
            return Err(InvalidArgument::EmptyValue(self.name.to_string()));
        }
        let value = if self.value.is_empty() {
            other.to_string()
        } else {
            format!("{},{}", self.value, other)
        };
        Ok(Self {
            name: self.name.clone(),
            value: Cow::Owned(value),
        })
    }
}

/// Ordered list of filter options.
///
/// Options sharing a name are never merged here; each one is sent as its own
/// query parameter. Use [`FilterOption::add_value`] to combine values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FilterOptions(Vec<FilterOption>);

impl FilterOptions {
    pub const EMPTY: FilterOptions = FilterOptions(Vec::new());

    pub fn new() -> Self {
        Self::default()
    }

    pub fn new_with(options: impl IntoIterator<Item = FilterOption>) -> Self {
        Self(options.into_iter().collect())
    }

    /// Return a copy with `options` appended after the existing ones.
    pub fn merge(&self, options: impl IntoIterator<Item = FilterOption>) -> Self {
        let mut merged = self.clone();
        merged.0.extend(options);
        merged
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterOption> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<FilterOption> for FilterOptions {
    fn from(option: FilterOption) -> Self {
        Self(vec![option])
    }
}

impl FromIterator<FilterOption> for FilterOptions {
    fn from_iter<I: IntoIterator<Item = FilterOption>>(iter: I) -> Self {
        Self::new_with(iter)
    }
}

impl<'a> IntoIterator for &'a FilterOptions {
    type Item = &'a FilterOption;
    type IntoIter = std::slice::Iter<'a, FilterOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
