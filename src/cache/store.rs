use std::{
    any::Any,
    collections::HashMap,
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::warn;

use super::CacheKey;

type Entry = Arc<dyn Any + Send + Sync>;

/// Thread-safe map from [`CacheKey`] to any cloneable value.
///
/// Share one instance between repositories with an `Arc`.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<CacheKey, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the stored value. An entry of another type counts as a miss.
    pub fn get<T: Clone + Send + Sync + 'static>(&self, key: &CacheKey) -> Option<T> {
        let entries = self.read("get");
        let entry = entries.get(key)?;
        match entry.downcast_ref::<T>() {
            Some(value) => Some(value.clone()),
            None => {
                warn!(
                    key = key.as_str(),
                    expected = std::any::type_name::<T>(),
                    "cached entry has unexpected type"
                );
                None
            }
        }
    }

    pub fn insert<T: Send + Sync + 'static>(&self, key: CacheKey, value: T) {
        self.write("insert").insert(key, Arc::new(value));
    }

    pub fn contains(&self, key: &CacheKey) -> bool {
        self.read("contains").contains_key(key)
    }

    pub fn remove(&self, key: &CacheKey) -> bool {
        self.write("remove").remove(key).is_some()
    }

    pub fn clear(&self) {
        self.write("clear").clear();
    }

    pub fn len(&self) -> usize {
        self.read("len").len()
    }

    pub fn is_empty(&self) -> bool {
        self.read("is_empty").is_empty()
    }

    fn read(&self, op: &'static str) -> RwLockReadGuard<'_, HashMap<CacheKey, Entry>> {
        match self.entries.read() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!(
                    op,
                    lock_kind = "rwlock.read",
                    "recovered from poisoned cache lock"
                );
                poisoned.into_inner()
            }
        }
    }

    fn write(&self, op: &'static str) -> RwLockWriteGuard<'_, HashMap<CacheKey, Entry>> {
        match self.entries.write() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!(
                    op,
                    lock_kind = "rwlock.write",
                    "recovered from poisoned cache lock"
                );
                poisoned.into_inner()
            }
        }
    }
}
