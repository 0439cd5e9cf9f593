//! The entry point: configuration, metadata cache and drain-all helpers.

mod builder;
pub use builder::Builder;

use crate::{Config, FromRows, RowScanner};

use rowscan_core::{
    ColumnMap, Destination, Error, MetadataCache, Record, RecordDescriptor, Resolver, Result, Rows,
};

use std::{any::TypeId, fmt, sync::Arc};

/// Shared state between all `Api` clones.
pub(crate) struct Shared {
    pub(crate) config: Config,
    pub(crate) resolver: Resolver,
    pub(crate) cache: Arc<dyn MetadataCache>,
}

/// Scans rows into destinations, memoizing record metadata.
///
/// Cloning is cheap and every clone shares the same cache. An `Api` can be
/// used from many threads at once.
#[derive(Clone)]
pub struct Api {
    shared: Arc<Shared>,
}

impl Api {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// An `Api` with the default configuration.
    pub fn new() -> Api {
        Builder::default().build()
    }

    pub fn config(&self) -> &Config {
        &self.shared.config
    }

    /// Wraps `rows` for row-by-row scanning.
    pub fn row_scanner<R: Rows>(&self, rows: R) -> RowScanner<R> {
        RowScanner::new(self.clone(), rows)
    }

    /// Returns the column map of `T`, resolving it on first use.
    pub fn column_map<T: Record>(&self) -> Result<Arc<ColumnMap>> {
        self.column_map_of(TypeId::of::<T>(), T::descriptor())
    }

    pub(crate) fn column_map_of(
        &self,
        ty: TypeId,
        descriptor: &'static RecordDescriptor,
    ) -> Result<Arc<ColumnMap>> {
        let key = self.shared.resolver.cache_key(ty);
        if let Some(map) = self.shared.cache.get(&key) {
            log::trace!("column map cache hit; record={}", descriptor.name);
            return Ok(map);
        }

        let map = Arc::new(self.shared.resolver.resolve(descriptor)?);
        self.shared.cache.set(key, map.clone());
        Ok(map)
    }

    /// Discards every memoized column map.
    ///
    /// Later scans resolve again and produce equal maps.
    pub fn reset_cache(&self) {
        self.shared.cache.reset();
    }

    /// Scans every row into a fresh `T` and collects the results.
    ///
    /// `rows` is always closed. The first error wins, whether it came from
    /// scanning, from iteration or from closing.
    pub fn scan_all<T, B>(&self, rows: impl Rows) -> Result<B>
    where
        T: Destination + Default,
        B: FromRows<T>,
    {
        let mut scanner = self.row_scanner(rows);
        let result = drain(&mut scanner);
        finish(scanner, result)
    }

    /// Scans exactly one row into a fresh `T`.
    ///
    /// No rows is a record-not-found error and more than one is a
    /// too-many-records error. `rows` is always closed.
    pub fn scan_one<T>(&self, rows: impl Rows) -> Result<T>
    where
        T: Destination + Default,
    {
        let mut scanner = self.row_scanner(rows);
        let result = first(&mut scanner);
        finish(scanner, result)
    }
}

fn drain<R: Rows, T, B>(scanner: &mut RowScanner<R>) -> Result<B>
where
    T: Destination + Default,
    B: FromRows<T>,
{
    let mut ret = B::default();

    while scanner.next() {
        let mut dst = T::default();
        scanner.scan(&mut dst)?;
        ret.extend(Some(dst));
    }

    scanner.err()?;
    Ok(ret)
}

fn first<R: Rows, T>(scanner: &mut RowScanner<R>) -> Result<T>
where
    T: Destination + Default,
{
    if !scanner.next() {
        scanner.err()?;
        return Err(Error::record_not_found(std::any::type_name::<T>()));
    }

    let mut dst = T::default();
    scanner.scan(&mut dst)?;

    if scanner.next() {
        return Err(Error::too_many_records(std::any::type_name::<T>()));
    }

    scanner.err()?;
    Ok(dst)
}

fn finish<R: Rows, T>(mut scanner: RowScanner<R>, result: Result<T>) -> Result<T> {
    let closed = scanner.close();
    let value = result?;
    closed?;
    Ok(value)
}

impl Default for Api {
    fn default() -> Self {
        Api::new()
    }
}

impl fmt::Debug for Api {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Api")
            .field("config", &self.shared.config)
            .finish_non_exhaustive()
    }
}
