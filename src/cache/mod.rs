//! Explicit report cache with TTL staleness and tag invalidation.
//!
//! The dashboard's fetch layer keeps computed reports in a cache keyed by
//! logical resource. This module makes that cache an explicit component: a
//! key-to-entry map where each entry records when it was inserted and how
//! long it stays fresh, plus an invalidation API keyed by resource tags.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::config::FetchPolicy;

/// A single cached entry.
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    tags: Vec<String>,
    inserted_at: Instant,
    stale_time: Duration,
}

/// The outcome of a cache lookup.
///
/// A `Stale` hit still carries the value: the entry outlived its freshness
/// window but has not been invalidated, and callers may serve it flagged
/// while a refetch is underway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheLookup<'a, V> {
    /// The entry exists and is within its freshness window.
    Fresh(&'a V),
    /// The entry exists but its freshness window has elapsed.
    Stale(&'a V),
    /// No entry exists for the key.
    Miss,
}

/// An in-memory cache of computed values keyed by resource key.
///
/// Entries are tagged with logical resource tags on insertion; invalidation
/// drops entries by exact key or by tag. Staleness follows the configured
/// [`FetchPolicy`] stale-time window.
///
/// # Example
///
/// ```
/// use margin_engine::cache::{CacheLookup, ReportCache};
/// use margin_engine::config::FetchPolicy;
///
/// let mut cache: ReportCache<String> = ReportCache::new(FetchPolicy::default());
/// cache.insert("report:2026-08", "summary".to_string(), vec!["reports".to_string()]);
///
/// assert!(matches!(cache.get("report:2026-08"), CacheLookup::Fresh(_)));
/// assert_eq!(cache.invalidate_tag("reports"), 1);
/// assert!(matches!(cache.get("report:2026-08"), CacheLookup::Miss));
/// ```
#[derive(Debug, Clone)]
pub struct ReportCache<V> {
    entries: HashMap<String, CacheEntry<V>>,
    policy: FetchPolicy,
}

impl<V> ReportCache<V> {
    /// Creates an empty cache governed by the given fetch policy.
    pub fn new(policy: FetchPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            policy,
        }
    }

    /// Returns the fetch policy governing this cache.
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// Inserts a value under a key with its resource tags.
    ///
    /// Replaces any existing entry for the key and restarts its freshness
    /// window.
    pub fn insert(&mut self, key: impl Into<String>, value: V, tags: Vec<String>) {
        self.insert_at(key, value, tags, Instant::now());
    }

    /// Inserts a value recording an explicit insertion instant.
    ///
    /// `insert` delegates here with the current instant; tests pass explicit
    /// instants to exercise staleness without sleeping.
    pub fn insert_at(
        &mut self,
        key: impl Into<String>,
        value: V,
        tags: Vec<String>,
        now: Instant,
    ) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                value,
                tags,
                inserted_at: now,
                stale_time: self.policy.stale_time(),
            },
        );
    }

    /// Looks up a key, judging freshness against the current instant.
    pub fn get(&self, key: &str) -> CacheLookup<'_, V> {
        self.get_at(key, Instant::now())
    }

    /// Looks up a key, judging freshness against an explicit instant.
    pub fn get_at(&self, key: &str, now: Instant) -> CacheLookup<'_, V> {
        match self.entries.get(key) {
            Some(entry) => {
                if now.duration_since(entry.inserted_at) < entry.stale_time {
                    CacheLookup::Fresh(&entry.value)
                } else {
                    CacheLookup::Stale(&entry.value)
                }
            }
            None => CacheLookup::Miss,
        }
    }

    /// Drops the entry for a key. Returns true if an entry existed.
    pub fn invalidate_key(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drops every entry carrying the given tag. Returns the number dropped.
    pub fn invalidate_tag(&mut self, tag: &str) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.tags.iter().any(|t| t.as_str() == tag));
        before - self.entries.len()
    }

    /// Drops all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of cached entries (fresh and stale alike).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
