//! Copy targets: the slots a row cursor writes column values into.

use crate::{Error, Result, Value};

use uuid::Uuid;

/// An addressable slot that can receive one copied column value.
///
/// Row cursors receive one target per column, in column order, and call
/// [`Target::assign`] with the column's value. Every [`FromValue`] type is a
/// target; implement this trait directly for slots that need to do more
/// than replace themselves (e.g. accumulate or ignore values).
pub trait Target {
    fn assign(&mut self, value: Value) -> Result<()>;
}

/// Conversion from a column [`Value`] into a Rust value.
///
/// This is the per-value copy rule. Conversions are strict apart from
/// range-checked integer widening and narrowing.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self>;
}

impl<T: FromValue> Target for T {
    fn assign(&mut self, value: Value) -> Result<()> {
        *self = T::from_value(value)?;
        Ok(())
    }
}

/// A target that accepts and drops any value.
///
/// Bound to columns that are allowed to have no destination field.
#[derive(Debug, Default, Clone, Copy)]
pub struct Discard;

impl Target for Discard {
    fn assign(&mut self, _value: Value) -> Result<()> {
        Ok(())
    }
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::from_value(value)?))
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            Value::I64(v @ (0 | 1)) => Ok(v == 1),
            Value::U64(v @ (0 | 1)) => Ok(v == 1),
            value => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            value => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Bytes(v) => Ok(v),
            Value::String(v) => Ok(v.into_bytes()),
            value => Err(Error::type_conversion(value, "Vec<u8>")),
        }
    }
}

impl FromValue for Uuid {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(v) => Ok(v),
            Value::String(v) => Ok(Uuid::parse_str(&v)?),
            Value::Bytes(v) => Ok(Uuid::from_slice(&v)?),
            value => Err(Error::type_conversion(value, "Uuid")),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I64(v) => Ok(v as f64),
            Value::U64(v) => Ok(v as f64),
            value => Err(Error::type_conversion(value, "f64")),
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v as f32),
            Value::I64(v) => Ok(v as f32),
            Value::U64(v) => Ok(v as f32),
            value => Err(Error::type_conversion(value, "f32")),
        }
    }
}

macro_rules! impl_from_value_int {
    ( $( $ty:ident ),* ) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => $ty::try_from(v)
                            .map_err(|_| Error::type_conversion(Value::I64(v), stringify!($ty))),
                        Value::U64(v) => $ty::try_from(v)
                            .map_err(|_| Error::type_conversion(Value::U64(v), stringify!($ty))),
                        value => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

impl_from_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
