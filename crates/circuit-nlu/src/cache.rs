//! In-memory keyword extraction cache using moka.
//!
//! Keys are blake3 hashes of the normalized query, so repeated searches
//! skip the model call.

use std::time::Duration;

use moka::sync::Cache;

pub struct KeywordCache {
    cache: Cache<String, Vec<String>>,
}

impl KeywordCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Cache key for a query. Surrounding whitespace does not matter.
    pub fn key_for(query: &str) -> String {
        blake3::hash(query.trim().as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, query: &str) -> Option<Vec<String>> {
        self.cache.get(&Self::key_for(query))
    }

    pub fn insert(&self, query: &str, keywords: Vec<String>) {
        self.cache.insert(Self::key_for(query), keywords);
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
