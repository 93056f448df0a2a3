//! Raw response shapes from the LocalEats API.
//!
//! Request structures are omitted since every command is a plain GET with a
//! query string.

pub mod counts;
pub mod restaurants;
pub mod states;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Leading `Count` field of list responses.
#[derive(Deserialize)]
struct Counted {
    #[serde(rename = "Count")]
    count: i64,
}

/// Deserialize `value` only when its `Count` is positive.
pub fn counted<T: DeserializeOwned>(value: Value) -> Result<Option<T>, serde_json::Error> {
    let Counted { count } = Counted::deserialize(&value)?;
    if count <= 0 {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some)
}

/// Ids arrive as strings for some commands and integers for others.
pub fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}

/// Accepts RFC 3339 timestamps, offset-less `2015-03-01T00:00:00`, and the WCF
/// `/Date(1425168000000+0000)/` form. Results are in UTC.
pub fn timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Some(inner) = raw.strip_prefix("/Date(").and_then(|rest| rest.strip_suffix(")/")) {
        return wcf_date(inner)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid WCF date: {raw}")));
    }
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.naive_utc())
        .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(serde::de::Error::custom)
}

/// Milliseconds since the epoch, optionally followed by a `+hhmm`/`-hhmm` zone.
/// The zone only affects local display, so it is ignored.
fn wcf_date(inner: &str) -> Option<NaiveDateTime> {
    let millis_end = inner
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '+' || c == '-')
        .map_or(inner.len(), |(i, _)| i);
    let millis = inner[..millis_end].parse::<i64>().ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.naive_utc())
}
