//! In-process cache for API results.
//!
//! Entries never expire and are never evicted; a cache lives as long as the
//! value that owns it.

mod key;
mod store;

pub use key::CacheKey;
pub use store::MemoryCache;
