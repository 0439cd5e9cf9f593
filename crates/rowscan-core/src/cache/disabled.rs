use super::{CacheKey, MetadataCache};
use crate::ColumnMap;

use std::sync::Arc;

/// A cache that never stores anything, forcing resolution on every scan.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledCache;

impl MetadataCache for DisabledCache {
    fn get(&self, _key: &CacheKey) -> Option<Arc<ColumnMap>> {
        None
    }

    fn set(&self, _key: CacheKey, _map: Arc<ColumnMap>) {}

    fn reset(&self) {}
}
