//! Core types for scanning rows into records, maps and scalars.
//!
//! Most users depend on the `rowscan` crate instead, which re-exports
//! everything needed here together with the `Record` derive.

#[macro_use]
mod macros;

pub mod cache;
pub use cache::{CacheKey, CacheMode, MetadataCache};

pub mod destination;
pub use destination::{Destination, Mapping, Shape};

mod error;
pub use error::{Error, IntoError};

pub mod name;

pub mod record;
pub use record::{FieldMut, Record, RecordDescriptor};

pub mod resolve;
pub use resolve::{ColumnMap, FieldPath, Resolver};

pub mod rows;
pub use rows::{Rows, ValueRows};

pub mod target;
pub use target::{Discard, FromValue, Target};

mod value;
pub use value::Value;

/// A Result type alias that uses rowscan's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
