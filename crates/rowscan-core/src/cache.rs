//! Memoization of resolved column maps, keyed by record type and resolver
//! settings.

mod concurrent;
pub use concurrent::ConcurrentCache;

mod disabled;
pub use disabled::DisabledCache;

mod locked;
pub use locked::LockedCache;

use crate::{resolve::Settings, ColumnMap};

use serde::{Deserialize, Serialize};
use std::{any::TypeId, sync::Arc};

/// Identifies one cached column map.
///
/// A map depends on the resolver that built it as much as on the record
/// type, so one cache can serve resolvers configured differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    record: TypeId,
    settings: Settings,
}

impl CacheKey {
    pub fn new(record: TypeId, settings: Settings) -> CacheKey {
        CacheKey { record, settings }
    }

    pub fn record(&self) -> TypeId {
        self.record
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

/// Storage for column maps that have already been resolved.
///
/// Every implementation must hand back maps equal to a fresh resolution;
/// implementations only differ in how they behave under concurrent access.
pub trait MetadataCache: Send + Sync {
    /// Returns the cached map for `key`, if any.
    fn get(&self, key: &CacheKey) -> Option<Arc<ColumnMap>>;

    /// Stores the map resolved for `key`.
    fn set(&self, key: CacheKey, map: Arc<ColumnMap>);

    /// Discards every entry.
    ///
    /// Concurrent `get` calls observe either all entries or none of them.
    fn reset(&self);
}

/// Selects the [`MetadataCache`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheMode {
    /// Resolve on every scan.
    Disabled,

    /// A map behind a read/write lock.
    Locked,

    /// A lock-free map tuned for read-heavy access.
    #[default]
    Concurrent,
}

impl CacheMode {
    pub fn build(self) -> Arc<dyn MetadataCache> {
        match self {
            CacheMode::Disabled => Arc::new(DisabledCache),
            CacheMode::Locked => Arc::new(LockedCache::new()),
            CacheMode::Concurrent => Arc::new(ConcurrentCache::new()),
        }
    }
}

impl std::str::FromStr for CacheMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "disabled" => Ok(CacheMode::Disabled),
            "locked" => Ok(CacheMode::Locked),
            "concurrent" => Ok(CacheMode::Concurrent),
            _ => crate::bail!("unknown cache mode `{s}`; expected disabled, locked or concurrent"),
        }
    }
}
