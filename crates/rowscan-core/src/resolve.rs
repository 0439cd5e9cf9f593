//! Column resolution: from a record descriptor to the column map.

use crate::{
    cache::CacheKey,
    record::{RecordDescriptor, Tag},
    Error, Result,
};

use indexmap::IndexMap;
use std::{
    any::TypeId,
    collections::VecDeque,
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

/// Maps a field identifier to its default column name fragment.
pub type NameMapper = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Positions of the fields leading from a record down to one leaf field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<usize>);

impl FieldPath {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn child(&self, index: usize) -> FieldPath {
        let mut path = Vec::with_capacity(self.0.len() + 1);
        path.extend_from_slice(&self.0);
        path.push(index);
        FieldPath(path)
    }
}

impl From<Vec<usize>> for FieldPath {
    fn from(path: Vec<usize>) -> Self {
        FieldPath(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Column name → field path for one record type.
///
/// Entries keep the order in which they were discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMap {
    columns: IndexMap<String, FieldPath>,
}

impl ColumnMap {
    pub fn get(&self, column: &str) -> Option<&FieldPath> {
        self.columns.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldPath)> {
        self.columns.iter().map(|(column, path)| (column.as_str(), path))
    }
}

impl<'a> IntoIterator for &'a ColumnMap {
    type Item = (&'a String, &'a FieldPath);
    type IntoIter = indexmap::map::Iter<'a, String, FieldPath>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// One pending record in the breadth-first traversal.
struct Frame {
    record: &'static RecordDescriptor,
    index_prefix: FieldPath,
    column_prefix: String,

    /// Records enclosing this one, outermost first.
    ancestors: Vec<&'static RecordDescriptor>,
}

impl Frame {
    fn descends_from(&self, record: &'static RecordDescriptor) -> bool {
        std::ptr::eq(self.record, record)
            || self.ancestors.iter().any(|ancestor| std::ptr::eq(*ancestor, record))
    }
}

/// Identifies installed name mappers. Zero is the snake case converter.
static NEXT_MAPPER_ID: AtomicU64 = AtomicU64::new(1);

/// Derives [`ColumnMap`]s from record descriptors.
#[derive(Clone)]
pub struct Resolver {
    name_mapper: NameMapper,
    mapper_id: u64,
    separator: String,
    strict: bool,
}

/// The resolver settings a column map depends on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Settings {
    mapper_id: u64,
    separator: Arc<str>,
    strict: bool,
}

impl Resolver {
    pub fn new() -> Resolver {
        Resolver {
            name_mapper: Arc::new(crate::name::to_snake_case),
            mapper_id: 0,
            separator: ".".to_string(),
            strict: false,
        }
    }

    /// Function deriving a column fragment from a field identifier.
    ///
    /// Every call counts as a distinct mapper, so maps cached under another
    /// mapper are never reused.
    pub fn name_mapper(mut self, mapper: NameMapper) -> Self {
        self.name_mapper = mapper;
        self.mapper_id = NEXT_MAPPER_ID.fetch_add(1, Ordering::Relaxed);
        self
    }

    /// Separator placed between a column prefix and the column fragment.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Report a column claimed by more than one field instead of keeping the
    /// first one.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn settings(&self) -> Settings {
        Settings {
            mapper_id: self.mapper_id,
            separator: self.separator.as_str().into(),
            strict: self.strict,
        }
    }

    /// The key under which the map of record type `ty` is cached.
    pub fn cache_key(&self, ty: TypeId) -> CacheKey {
        CacheKey::new(ty, self.settings())
    }

    /// Builds the column map of `record`.
    ///
    /// Records are walked breadth first: all fields of a record are visited,
    /// in declaration order, before any nested record. The first field to
    /// claim a column name keeps it. A record nested inside itself is only
    /// traversed at its outermost occurrence.
    pub fn resolve(&self, record: &'static RecordDescriptor) -> Result<ColumnMap> {
        let mut columns = IndexMap::with_capacity(record.fields.len());
        let mut queue = VecDeque::from([Frame {
            record,
            index_prefix: FieldPath::default(),
            column_prefix: String::new(),
            ancestors: vec![],
        }]);

        while let Some(frame) = queue.pop_front() {
            for (position, field) in frame.record.fields.iter().enumerate() {
                if !field.exported && !field.embedded {
                    continue;
                }

                let tag = match field.tag {
                    Tag::Ignore => continue,
                    Tag::Column(name) => Some(name),
                    Tag::Absent => None,
                };

                let path = frame.index_prefix.child(position);
                let fragment = match tag {
                    Some(name) => name.to_string(),
                    None => (self.name_mapper)(field.name),
                };

                if !field.embedded {
                    let column = self.join(&frame.column_prefix, &fragment);

                    if columns.contains_key(&column) {
                        if self.strict {
                            return Err(Error::ambiguous_column(column, record.name));
                        }
                    } else {
                        columns.insert(column, path.clone());
                    }
                }

                if let Some(nested) = field.ty.as_record() {
                    if frame.descends_from(nested) {
                        continue;
                    }

                    // Embedded records only pick up an explicit prefix.
                    let column_prefix = if field.embedded {
                        self.join(&frame.column_prefix, tag.unwrap_or(""))
                    } else {
                        self.join(&frame.column_prefix, &fragment)
                    };

                    let mut ancestors = frame.ancestors.clone();
                    ancestors.push(frame.record);

                    queue.push_back(Frame {
                        record: nested,
                        index_prefix: path,
                        column_prefix,
                        ancestors,
                    });
                }
            }
        }

        log::debug!(
            "resolved column map; record={}, columns={}",
            record.name,
            columns.len()
        );

        Ok(ColumnMap { columns })
    }

    fn join(&self, prefix: &str, part: &str) -> String {
        match (prefix.is_empty(), part.is_empty()) {
            (true, _) => part.to_string(),
            (false, true) => prefix.to_string(),
            (false, false) => format!("{prefix}{}{part}", self.separator),
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Resolver::new()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("separator", &self.separator)
            .field("strict", &self.strict)
            .finish_non_exhaustive()
    }
}
