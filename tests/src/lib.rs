pub use counting_cache::CountingCache;

mod logging_rows;
pub use logging_rows::{LoggingRows, RowsOp};

/// Routes `log` output through the test harness. Safe to call repeatedly.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
