//! The three kinds of values a row can be scanned into.

use crate::{Record, Result, Target, Value};

use indexmap::IndexMap;
use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};
use uuid::Uuid;

/// How a destination receives a row.
pub enum Shape<'a> {
    /// Columns land in record fields, matched by name.
    Record(&'a mut dyn Record),

    /// Every column becomes one `column → value` entry.
    Mapping(&'a mut dyn Mapping),

    /// The row's only column is copied into the value itself.
    Scalar(&'a mut dyn Target),
}

impl Shape<'_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Record(_) => "record",
            Shape::Mapping(_) => "mapping",
            Shape::Scalar(_) => "scalar",
        }
    }
}

/// A value that can be scanned into.
///
/// Records get this from `#[derive(Record)]`; string-keyed maps and the
/// built-in scalar types implement it here.
pub trait Destination {
    fn shape(&mut self) -> Shape<'_>;
}

impl<T: Destination + ?Sized> Destination for Box<T> {
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Destination + ?Sized> Destination for &mut T {
    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

/// A string-keyed map that can take one entry per column.
pub trait Mapping {
    /// Prepares a fresh value holder per column, lets `copy` fill them, then
    /// stores every `column → value` pair. Existing keys are overwritten.
    fn scan_row(
        &mut self,
        columns: &[String],
        copy: &mut dyn FnMut(&mut [&mut dyn Target]) -> Result<()>,
    ) -> Result<()>;
}

fn fill_holders<V: Target + Default>(
    columns: &[String],
    copy: &mut dyn FnMut(&mut [&mut dyn Target]) -> Result<()>,
) -> Result<Vec<V>> {
    let mut holders: Vec<V> = columns.iter().map(|_| V::default()).collect();
    let mut targets: Vec<&mut dyn Target> = holders
        .iter_mut()
        .map(|holder| holder as &mut dyn Target)
        .collect();

    copy(&mut targets)?;
    drop(targets);

    Ok(holders)
}

impl<V: Target + Default, S: BuildHasher> Mapping for HashMap<String, V, S> {
    fn scan_row(
        &mut self,
        columns: &[String],
        copy: &mut dyn FnMut(&mut [&mut dyn Target]) -> Result<()>,
    ) -> Result<()> {
        let values = fill_holders::<V>(columns, copy)?;
        self.extend(columns.iter().cloned().zip(values));
        Ok(())
    }
}

impl<V: Target + Default> Mapping for BTreeMap<String, V> {
    fn scan_row(
        &mut self,
        columns: &[String],
        copy: &mut dyn FnMut(&mut [&mut dyn Target]) -> Result<()>,
    ) -> Result<()> {
        let values = fill_holders::<V>(columns, copy)?;
        self.extend(columns.iter().cloned().zip(values));
        Ok(())
    }
}

impl<V: Target + Default, S: BuildHasher> Mapping for IndexMap<String, V, S> {
    fn scan_row(
        &mut self,
        columns: &[String],
        copy: &mut dyn FnMut(&mut [&mut dyn Target]) -> Result<()>,
    ) -> Result<()> {
        let values = fill_holders::<V>(columns, copy)?;
        self.extend(columns.iter().cloned().zip(values));
        Ok(())
    }
}

impl<V: Target + Default, S: BuildHasher> Destination for HashMap<String, V, S> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl<V: Target + Default> Destination for BTreeMap<String, V> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl<V: Target + Default, S: BuildHasher> Destination for IndexMap<String, V, S> {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

macro_rules! impl_scalar_destination {
    ( $( $ty:ty ),* $(,)? ) => {
        $(
            impl Destination for $ty {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Scalar(self)
                }
            }

            impl Destination for Option<$ty> {
                fn shape(&mut self) -> Shape<'_> {
                    Shape::Scalar(self)
                }
            }
        )*
    };
}

impl_scalar_destination!(
    bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String, Vec<u8>, Uuid,
);

impl Destination for Value {
    fn shape(&mut self) -> Shape<'_> {
        Shape::Scalar(self)
    }
}
