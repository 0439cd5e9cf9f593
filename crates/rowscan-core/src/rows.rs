use crate::{Error, Result, Target, Value};

/// A forward-only cursor over a result set.
///
/// This is the only thing rowscan needs from a database library. Adapters
/// wrap the library's own rows type and forward each call.
pub trait Rows {
    /// Advances to the next row. Returns `false` once the result set is
    /// exhausted (or iteration failed; see [`Rows::err`]).
    fn next(&mut self) -> bool;

    /// Column names of the result set, in order. Stable across rows.
    fn columns(&self) -> Result<Vec<String>>;

    /// Copies the current row into `targets`, one per column, positionally.
    fn scan(&mut self, targets: &mut [&mut dyn Target]) -> Result<()>;

    /// Reports any error encountered during iteration.
    fn err(&self) -> Result<()>;

    /// Releases the cursor. Calling it more than once is not an error.
    fn close(&mut self) -> Result<()>;
}

impl<R: Rows + ?Sized> Rows for &mut R {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn scan(&mut self, targets: &mut [&mut dyn Target]) -> Result<()> {
        (**self).scan(targets)
    }

    fn err(&self) -> Result<()> {
        (**self).err()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<R: Rows + ?Sized> Rows for Box<R> {
    fn next(&mut self) -> bool {
        (**self).next()
    }

    fn columns(&self) -> Result<Vec<String>> {
        (**self).columns()
    }

    fn scan(&mut self, targets: &mut [&mut dyn Target]) -> Result<()> {
        (**self).scan(targets)
    }

    fn err(&self) -> Result<()> {
        (**self).err()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// An in-memory result set.
///
/// Copies values positionally with [`Target::assign`]. Useful for tests and
/// for adapters over libraries that hand back fully materialized rows.
#[derive(Debug, Clone, Default)]
pub struct ValueRows {
    columns: Vec<String>,
    rows: std::collections::VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
    closed: bool,
}

impl ValueRows {
    pub fn new<C, S>(columns: C, rows: Vec<Vec<Value>>) -> ValueRows
    where
        C: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ValueRows {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: rows.into(),
            current: None,
            closed: false,
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Rows for ValueRows {
    fn next(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    fn columns(&self) -> Result<Vec<String>> {
        if self.closed {
            crate::bail!("rows are closed");
        }
        Ok(self.columns.clone())
    }

    fn scan(&mut self, targets: &mut [&mut dyn Target]) -> Result<()> {
        let Some(row) = &self.current else {
            crate::bail!("scan called without a current row");
        };

        if targets.len() != row.len() {
            return Err(Error::invalid_destination(format!(
                "expected {} destination arguments in scan, got {}",
                row.len(),
                targets.len()
            )));
        }

        for (target, value) in targets.iter_mut().zip(row) {
            target.assign(value.clone())?;
        }

        Ok(())
    }

    fn err(&self) -> Result<()> {
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        self.current = None;
        Ok(())
    }
}
