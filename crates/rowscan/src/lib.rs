//! Scan rows of any data-access library into records, maps and scalars.
//!
//! ```
//! use rowscan::{Api, Record, ValueRows, row};
//!
//! #[derive(Debug, Default, Record)]
//! struct User {
//!     pub id: i64,
//!     pub first_name: String,
//! }
//!
//! let rows = ValueRows::new(["id", "first_name"], vec![row![1, "Ann"], row![2, "Bob"]]);
//! let users = Api::new().scan_all::<User, Vec<_>>(rows).unwrap();
//!
//! assert_eq!(users[1].first_name, "Bob");
//! ```

pub mod api;
pub use api::Api;

mod bind;

mod collect;
pub use collect::FromRows;

mod config;
pub use config::Config;

pub mod row_scanner;
pub use row_scanner::RowScanner;

pub use rowscan_core::{
    bail, cache, err, name, row, CacheKey, CacheMode, ColumnMap, Destination, Discard, Error, FieldPath,
    FromValue, IntoError, Mapping, MetadataCache, Record, RecordDescriptor, Result, Rows, Shape,
    Target, Value, ValueRows,
};
pub use rowscan_core::{
    record,
    resolve::{NameMapper, Resolver},
};

pub use rowscan_macros::Record;

#[doc(hidden)]
pub mod codegen_support {
    pub use rowscan_core::{
        record::{FieldDescriptor, FieldMut, FieldTy, Record, RecordDescriptor, Tag},
        Destination, Shape,
    };
}
