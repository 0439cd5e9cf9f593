use super::{CacheKey, MetadataCache};
use crate::ColumnMap;

use parking_lot::RwLock;
use std::{collections::HashMap, sync::Arc};

/// Column maps in a `HashMap` guarded by a read/write lock.
#[derive(Debug, Default)]
pub struct LockedCache {
    maps: RwLock<HashMap<CacheKey, Arc<ColumnMap>>>,
}

impl LockedCache {
    pub fn new() -> LockedCache {
        LockedCache::default()
    }
}

impl MetadataCache for LockedCache {
    fn get(&self, key: &CacheKey) -> Option<Arc<ColumnMap>> {
        self.maps.read().get(key).cloned()
    }

    fn set(&self, key: CacheKey, map: Arc<ColumnMap>) {
        self.maps.write().insert(key, map);
    }

    fn reset(&self) {
        let stale = std::mem::take(&mut *self.maps.write());
        log::trace!("locked metadata cache reset; dropped={}", stale.len());
    }
}
