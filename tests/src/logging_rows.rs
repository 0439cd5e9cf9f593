use rowscan::{Error, Result, Rows, Target, Value, ValueRows};
use std::sync::{Arc, Mutex};

/// A cursor wrapper that records every call made on it.
///
/// Failures can be injected to exercise error propagation: an iteration
/// failure ends the result set early and is reported by `err`, a close
/// failure is returned from every `close` call.
#[derive(Debug)]
pub struct LoggingRows<R = ValueRows> {
    inner: R,

    /// Log of all calls made through this cursor
    ops_log: Arc<Mutex<Vec<RowsOp>>>,

    /// Rows served before iteration fails
    fail_after: Option<usize>,

    fail_close: bool,

    served: usize,
    failed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowsOp {
    Columns,
    Next(bool),
    Scan(usize),
    Err,
    Close,
}

impl LoggingRows {
    pub fn new<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Value>>,
    ) -> LoggingRows {
        LoggingRows::wrap(ValueRows::new(columns, rows))
    }
}

impl<R: Rows> LoggingRows<R> {
    pub fn wrap(inner: R) -> LoggingRows<R> {
        LoggingRows {
            inner,
            ops_log: Arc::new(Mutex::new(Vec::new())),
            fail_after: None,
            fail_close: false,
            served: 0,
            failed: false,
        }
    }

    /// Fails iteration once `rows` rows have been served.
    pub fn fail_iteration_after(mut self, rows: usize) -> Self {
        self.fail_after = Some(rows);
        self
    }

    pub fn fail_close(mut self) -> Self {
        self.fail_close = true;
        self
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> Arc<Mutex<Vec<RowsOp>>> {
        self.ops_log.clone()
    }

    fn log(&self, op: RowsOp) {
        self.ops_log
            .lock()
            .expect("Failed to acquire ops log lock")
            .push(op);
    }
}

impl<R: Rows> Rows for LoggingRows<R> {
    fn next(&mut self) -> bool {
        let more = if self.fail_after == Some(self.served) {
            self.failed = true;
            false
        } else {
            self.inner.next()
        };

        if more {
            self.served += 1;
        }

        self.log(RowsOp::Next(more));
        more
    }

    fn columns(&self) -> Result<Vec<String>> {
        self.log(RowsOp::Columns);
        self.inner.columns()
    }

    fn scan(&mut self, targets: &mut [&mut dyn Target]) -> Result<()> {
        self.log(RowsOp::Scan(targets.len()));
        self.inner.scan(targets)
    }

    fn err(&self) -> Result<()> {
        self.log(RowsOp::Err);
        if self.failed {
            return Err(Error::driver(std::io::Error::other("connection reset")));
        }
        self.inner.err()
    }

    fn close(&mut self) -> Result<()> {
        self.log(RowsOp::Close);
        self.inner.close()?;
        if self.fail_close {
            return Err(Error::driver(std::io::Error::other("close failed")));
        }
        Ok(())
    }
}
