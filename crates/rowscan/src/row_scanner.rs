//! Row-by-row scanning over a caller-driven cursor.

use crate::{bind, Api};

use rowscan_core::{ColumnMap, Destination, Error, Result, Rows, Shape};

use std::{any::TypeId, collections::HashSet, sync::Arc};

/// Scans the current row of a cursor into destinations.
///
/// The caller drives iteration with [`RowScanner::next`]; each call to
/// [`RowScanner::scan`] copies the current row. Columns are read once, on
/// the first scan, and the column map of the last record type is kept so
/// repeated scans into the same type skip the cache.
///
/// ```
/// use rowscan::{Api, Record, ValueRows, row};
///
/// #[derive(Default, Record)]
/// struct Total {
///     pub count: i64,
/// }
///
/// let mut scanner = Api::new().row_scanner(ValueRows::new(["count"], vec![row![3]]));
/// let mut total = Total::default();
///
/// while scanner.next() {
///     scanner.scan(&mut total).unwrap();
/// }
/// scanner.err().unwrap();
/// scanner.close().unwrap();
///
/// assert_eq!(total.count, 3);
/// ```
pub struct RowScanner<R> {
    api: Api,
    rows: R,
    columns: Option<Arc<[String]>>,
    last: Option<(TypeId, Arc<ColumnMap>)>,
}

impl<R: Rows> RowScanner<R> {
    pub(crate) fn new(api: Api, rows: R) -> RowScanner<R> {
        RowScanner {
            api,
            rows,
            columns: None,
            last: None,
        }
    }

    /// Copies the current row into `dst`.
    ///
    /// Records receive each column in the field it maps to. Maps receive
    /// one entry per column. Anything else must come from a single-column
    /// row.
    pub fn scan<D: Destination + ?Sized>(&mut self, dst: &mut D) -> Result<()> {
        let columns = self.columns()?;
        let rows = &mut self.rows;

        match dst.shape() {
            Shape::Record(record) => {
                let map = match &self.last {
                    Some((ty, map)) if *ty == record.record_type_id() => map.clone(),
                    _ => {
                        let ty = record.record_type_id();
                        let map = self.api.column_map_of(ty, record.record_descriptor())?;
                        self.last = Some((ty, map.clone()));
                        map
                    }
                };

                let allow_unknown_columns = self.api.config().allow_unknown_columns;
                bind::record(&columns, &map, record, allow_unknown_columns, |targets| {
                    rows.scan(targets)
                })
            }
            Shape::Mapping(mapping) => {
                bind::mapping(&columns, mapping, |targets| rows.scan(targets))
            }
            Shape::Scalar(target) => bind::scalar(&columns, target, |targets| rows.scan(targets)),
        }
    }

    /// Column names of the result set.
    ///
    /// Read from the cursor on first use. Fails if two columns share a name.
    pub fn columns(&mut self) -> Result<Arc<[String]>> {
        if let Some(columns) = &self.columns {
            return Ok(columns.clone());
        }

        let columns = self.rows.columns()?;
        let mut seen = HashSet::with_capacity(columns.len());

        for column in &columns {
            if !seen.insert(column.as_str()) {
                return Err(Error::duplicate_column(column.as_str()));
            }
        }

        let columns: Arc<[String]> = columns.into();
        self.columns = Some(columns.clone());
        Ok(columns)
    }

    /// Advances the cursor; see [`Rows::next`].
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> bool {
        self.rows.next()
    }

    pub fn err(&self) -> Result<()> {
        self.rows.err()
    }

    pub fn close(&mut self) -> Result<()> {
        self.rows.close()
    }

    pub fn get_ref(&self) -> &R {
        &self.rows
    }

    pub fn into_inner(self) -> R {
        self.rows
    }
}

impl<R> std::fmt::Debug for RowScanner<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowScanner")
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}
