//! Static type descriptions of records and mutable access to their fields.
//!
//! `#[derive(Record)]` generates a [`RecordDescriptor`] for the struct and a
//! [`Record::fields_mut`] implementation that hands out every field at once,
//! so disjoint fields can be bound to different columns of the same row.

use crate::Target;

use std::any::TypeId;

/// Static description of a record type.
#[derive(Debug)]
pub struct RecordDescriptor {
    /// Type name, used in error messages.
    pub name: &'static str,

    /// Declared fields, in declaration order.
    pub fields: &'static [FieldDescriptor],
}

/// Static description of one record field.
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Field identifier as written in the struct.
    pub name: &'static str,

    /// Column override from the `#[db(...)]` attribute.
    pub tag: Tag,

    /// `true` if the field is visible outside its module (`pub` in any form).
    pub exported: bool,

    /// `true` if the record's columns are promoted into the parent's namespace.
    pub embedded: bool,

    pub ty: FieldTy,
}

/// Column override attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// No override; the column name is derived from the field name.
    Absent,

    /// Explicit column name, or column prefix for embedded records.
    Column(&'static str),

    /// The field and everything below it is invisible to scanning.
    Ignore,
}

/// Type class of a field, as far as column resolution is concerned.
#[derive(Debug, Clone, Copy)]
pub enum FieldTy {
    /// A leaf that receives a column value.
    Value,

    /// A record whose fields are traversed. `Option` and `Box` wrappers are
    /// unwrapped; the function returns the descriptor of the inner record.
    Record(fn() -> &'static RecordDescriptor),
}

impl FieldTy {
    pub fn as_record(&self) -> Option<&'static RecordDescriptor> {
        match self {
            FieldTy::Value => None,
            FieldTy::Record(descriptor) => Some(descriptor()),
        }
    }
}

/// A struct whose fields can be populated from row columns.
///
/// Implemented by `#[derive(Record)]`; not meant to be implemented by hand.
pub trait Record: 'static {
    /// Descriptor of this record type.
    fn descriptor() -> &'static RecordDescriptor
    where
        Self: Sized;

    /// Same as [`Record::descriptor`], callable on trait objects.
    fn record_descriptor(&self) -> &'static RecordDescriptor;

    /// Identity of the record type; part of the metadata cache key.
    fn record_type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Mutable access to every field, indexed by declaration position.
    ///
    /// Fields invisible to scanning are returned as [`FieldMut::Skip`].
    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Mutable access to a single field.
pub enum FieldMut<'a> {
    /// The field takes no part in scanning.
    Skip,

    /// A leaf value.
    Value(&'a mut dyn Target),

    /// A nested record stored inline (or boxed).
    Record(&'a mut dyn Record),

    /// A nested record that may be absent and is allocated on demand.
    OptionalRecord(&'a mut dyn OptionalRecord),
}

impl core::fmt::Debug for FieldMut<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FieldMut::Skip => f.write_str("Skip"),
            FieldMut::Value(_) => f.write_str("Value"),
            FieldMut::Record(record) => {
                write!(f, "Record({})", record.record_descriptor().name)
            }
            FieldMut::OptionalRecord(_) => f.write_str("OptionalRecord"),
        }
    }
}

/// An optional nested record, e.g. `Option<User>` or `Option<Box<User>>`.
pub trait OptionalRecord {
    /// Returns the nested record, allocating a default one if absent.
    fn ensure(&mut self) -> &mut dyn Record;
}

impl<T: Record + Default> OptionalRecord for Option<T> {
    fn ensure(&mut self) -> &mut dyn Record {
        self.get_or_insert_with(T::default)
    }
}

impl<T: Record> Record for Box<T> {
    fn descriptor() -> &'static RecordDescriptor {
        T::descriptor()
    }

    fn record_descriptor(&self) -> &'static RecordDescriptor {
        (**self).record_descriptor()
    }

    fn record_type_id(&self) -> TypeId {
        (**self).record_type_id()
    }

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
        (**self).fields_mut()
    }
}
