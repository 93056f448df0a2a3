//! Request descriptor for one upstream command.

use std::hash::{Hash, Hasher};

use url::form_urlencoded::Serializer;

use crate::{constants::API_KEY_PARAM, error::InvalidArgument, filter::FilterOptions, ApiKey};

/// A command name plus its ordered query parameters.
///
/// Two commands are equal when their names and serialized query strings are.
/// The endpoint and API key are supplied by [`Command::to_url`] and are not
/// part of a command, so they never take part in equality or hashing.
#[derive(Clone, Debug)]
pub struct Command {
    name: String,
    params: Vec<(String, String)>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidArgument> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidArgument::EmptyCommand);
        }
        Ok(Self {
            name,
            params: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Append every filter option after the explicit parameters.
    pub fn filters(mut self, filters: &FilterOptions) -> Self {
        self.params.extend(
            filters
                .iter()
                .map(|option| (option.name().to_string(), option.value().to_string())),
        );
        self
    }

    /// The percent-encoded query string, without the API key.
    pub fn query_string(&self) -> String {
        let mut serializer = Serializer::new(String::new());
        serializer.extend_pairs(self.params.iter());
        serializer.finish()
    }

    /// The full request URL. `endpoint` is expected to end with `/`.
    pub fn to_url(&self, endpoint: &str, api_key: &ApiKey) -> String {
        let mut serializer = Serializer::new(String::new());
        serializer.append_pair(API_KEY_PARAM, api_key.get());
        serializer.extend_pairs(self.params.iter());
        format!("{}{}?{}", endpoint, self.name, serializer.finish())
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.query_string() == other.query_string()
    }
}

impl Eq for Command {}

impl Hash for Command {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.query_string().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CATEGORIES, PRICE_1, PRICE_3, SORT_BY_NAME, TOP_10};

    #[test]
    fn new_rejects_empty_name() {
        let err = Command::new("").unwrap_err();
        assert_eq!(err, InvalidArgument::EmptyCommand);
    }

    #[test]
    fn filters_follow_params_in_order() {
        let filters = FilterOptions::new_with([TOP_10, PRICE_1, PRICE_3]);

        let command = Command::new("GetCategoryListCount")
            .unwrap()
            .param("format", "json")
            .param("cityid", "42")
            .filters(&filters);

        assert_eq!(
            command.query_string(),
            "format=json&cityid=42&tfil=1&pfil=1&pfil=3"
        );
    }

    #[test]
    fn values_are_percent_encoded() {
        let categories = CATEGORIES.add_value("1").unwrap().add_value("2").unwrap();

        let command = Command::new("Test")
            .unwrap()
            .param("q", "a b&c")
            .filters(&categories.into());

        assert_eq!(command.query_string(), "q=a+b%26c&cfil=1%2C2");
    }

    #[test]
    fn empty_value_serializes_as_empty() {
        let command = Command::new("Test").unwrap().filters(&CATEGORIES.into());
        assert_eq!(command.query_string(), "cfil=");
    }

    #[test]
    fn to_url_puts_key_first() {
        let command = Command::new("GetRestaurantListNearBy")
            .unwrap()
            .param("top", 25)
            .filters(&SORT_BY_NAME.into());

        let url = command.to_url("http://example.com/Mobile/", &ApiKey::from_raw("k"));

        assert_eq!(
            url,
            "http://example.com/Mobile/GetRestaurantListNearBy?skey=k&top=25&SortExpr=rest_name"
        );
    }

    #[test]
    fn equality_is_defined_by_serialized_query() {
        let a = Command::new("X")
            .unwrap()
            .param("top", 10)
            .filters(&TOP_10.into());
        let b = Command::new("X")
            .unwrap()
            .param("top", "10")
            .param("tfil", "1");
        let c = Command::new("Y")
            .unwrap()
            .param("top", 10)
            .filters(&TOP_10.into());

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_ignores_endpoint_and_key() {
        let a = Command::new("X").unwrap().param("top", 10);
        let b = a.clone();

        let url_a = a.to_url("http://one.example/", &ApiKey::from_raw("k1"));
        let url_b = b.to_url("http://two.example/", &ApiKey::from_raw("k2"));

        assert_ne!(url_a, url_b);
        assert_eq!(a, b);
        let hash = |command: &Command| {
            let mut hasher = std::collections::hash_map::DefaultHasher::new();
            command.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&b));
    }
}
