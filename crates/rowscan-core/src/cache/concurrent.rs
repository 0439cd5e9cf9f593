use super::{CacheKey, MetadataCache};
use crate::ColumnMap;

use crossbeam_skiplist::SkipMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

/// Column maps in a lock-free skip list.
///
/// Entries are stamped with the generation they were stored in. A reset
/// bumps the generation first, which hides every older entry in one atomic
/// step, and only then clears the list.
#[derive(Debug, Default)]
pub struct ConcurrentCache {
    generation: AtomicU64,
    maps: SkipMap<CacheKey, Entry>,
}

#[derive(Debug)]
struct Entry {
    generation: u64,
    map: Arc<ColumnMap>,
}

impl ConcurrentCache {
    pub fn new() -> ConcurrentCache {
        ConcurrentCache::default()
    }
}

impl MetadataCache for ConcurrentCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<ColumnMap>> {
        let generation = self.generation.load(Ordering::Acquire);
        let entry = self.maps.get(key)?;
        let entry = entry.value();

        (entry.generation == generation).then(|| entry.map.clone())
    }

    fn set(&self, key: CacheKey, map: Arc<ColumnMap>) {
        let generation = self.generation.load(Ordering::Acquire);
        self.maps.insert(key, Entry { generation, map });
    }

    fn reset(&self) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.maps.clear();
        log::trace!("concurrent metadata cache reset; generation={generation}");
    }
}
