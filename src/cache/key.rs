use std::fmt;

use serde::Serialize;

/// Key of one cached result.
///
/// Derived keys serialize the argument tuple to JSON, so arguments that are
/// equal by value give equal keys however they were built.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Key for `operation` called with `args`.
    pub fn derive<A: Serialize + ?Sized>(
        operation: &str,
        args: &A,
    ) -> Result<Self, serde_json::Error> {
        let args = serde_json::to_string(args)?;
        Ok(Self(format!("{operation}:{args}")))
    }

    /// Key for `operation` on the entity identified by `id`.
    pub fn for_entity(operation: &str, id: &str) -> Self {
        Self(format!("{operation}#{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
