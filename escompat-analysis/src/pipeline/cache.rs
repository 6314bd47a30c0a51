//! File content cache with LRU eviction and TTL expiry.
//!
//! Path-keyed, bounded entry count. Entries hold either file content or
//! the read error, so a persistently missing file is not re-stat'd on
//! every batch. Entries are inserted once per path and never mutated in
//! place; the mutex makes concurrent read/insert safe under rayon workers.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use escompat_core::errors::CacheReadError;

/// What one path resolved to, shared cheaply across lookups.
pub type CachedRead = Result<Arc<str>, CacheReadError>;

struct CacheEntry {
    content: CachedRead,
    inserted_at: Instant,
    /// Access sequence number for LRU eviction.
    last_access: u64,
}

struct CacheInner {
    entries: FxHashMap<PathBuf, CacheEntry>,
    tick: u64,
    hits: u64,
    misses: u64,
}

/// Read-only snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

pub struct FileCache {
    inner: Mutex<CacheInner>,
    capacity: usize,
    ttl: Duration,
}

impl Default for FileCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FileCache {
    pub const DEFAULT_CAPACITY: usize = 512;
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

    pub fn new() -> Self {
        Self::with_policy(Self::DEFAULT_CAPACITY, Self::DEFAULT_TTL)
    }

    pub fn with_policy(capacity: usize, ttl: Duration) -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                entries: FxHashMap::default(),
                tick: 0,
                hits: 0,
                misses: 0,
            }),
            capacity: capacity.max(1),
            ttl,
        }
    }

    /// Cached read for a path: expired entries count as misses and are
    /// dropped; live entries are touched for LRU purposes.
    pub fn get(&self, path: &Path) -> Option<CachedRead> {
        let mut guard = self.lock();
        let inner = &mut *guard;

        match inner.entries.get(path) {
            Some(entry) if entry.inserted_at.elapsed() >= self.ttl => {
                inner.entries.remove(path);
                inner.misses += 1;
                None
            }
            Some(_) => {
                inner.tick += 1;
                let tick = inner.tick;
                let content = inner.entries.get_mut(path).map(|entry| {
                    entry.last_access = tick;
                    entry.content.clone()
                });
                inner.hits += 1;
                content
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    /// Insert a read outcome, evicting the least recently used entry when
    /// the cache is at capacity.
    pub fn insert(&self, path: PathBuf, content: CachedRead) {
        let mut guard = self.lock();
        let inner = &mut *guard;

        if !inner.entries.contains_key(&path) && inner.entries.len() >= self.capacity {
            evict_lru(inner);
        }

        inner.tick += 1;
        let tick = inner.tick;
        inner.entries.insert(
            path,
            CacheEntry {
                content,
                inserted_at: Instant::now(),
                last_access: tick,
            },
        );
    }

    /// Read through the cache. With `use_cache` false this is a plain read
    /// that neither consults nor populates the cache.
    pub fn read(&self, path: &Path, use_cache: bool) -> CachedRead {
        if use_cache {
            if let Some(cached) = self.get(path) {
                return cached;
            }
        }

        let result: CachedRead = std::fs::read_to_string(path)
            .map(Arc::from)
            .map_err(|e| CacheReadError::new(path.to_path_buf(), &e));

        if use_cache {
            self.insert(path.to_path_buf(), result.clone());
        }
        result
    }

    pub fn stats(&self) -> CacheStats {
        let guard = self.lock();
        CacheStats {
            hits: guard.hits,
            misses: guard.misses,
            size: guard.entries.len(),
        }
    }

    pub fn clear(&self) {
        let mut guard = self.lock();
        guard.entries.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn evict_lru(inner: &mut CacheInner) {
    let victim = inner
        .entries
        .iter()
        .min_by_key(|(_, entry)| entry.last_access)
        .map(|(path, _)| path.clone());
    if let Some(path) = victim {
        inner.entries.remove(&path);
    }
}
