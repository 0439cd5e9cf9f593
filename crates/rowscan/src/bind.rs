//! Builds the copy targets of one row for each destination shape.

use rowscan_core::{
    record::{FieldMut, Record},
    ColumnMap, Discard, Error, Mapping, Result, Target,
};

use indexmap::IndexMap;

/// Column position and the remaining field path it addresses.
type Entry<'p> = (usize, &'p [usize]);

/// Binds every column to the record field its path addresses, then copies.
///
/// Absent optional records on the way are allocated before the copy runs.
pub(crate) fn record(
    columns: &[String],
    map: &ColumnMap,
    record: &mut dyn Record,
    allow_unknown_columns: bool,
    copy: impl FnOnce(&mut [&mut dyn Target]) -> Result<()>,
) -> Result<()> {
    let descriptor = record.record_descriptor();
    let mut entries = Vec::with_capacity(columns.len());

    for (position, column) in columns.iter().enumerate() {
        match map.get(column) {
            Some(path) => entries.push((position, path.as_slice())),
            None if allow_unknown_columns => {}
            None => return Err(Error::unknown_column(column.as_str(), descriptor.name)),
        }
    }

    let mut slots: Vec<Option<&mut dyn Target>> = columns.iter().map(|_| None).collect();
    collect_targets(record, entries, columns, &mut slots)?;

    let mut discards = vec![Discard; columns.len()];
    let mut targets: Vec<&mut dyn Target> = slots
        .into_iter()
        .zip(discards.iter_mut())
        .map(|(slot, discard)| slot.unwrap_or(discard))
        .collect();

    copy(&mut targets)
}

fn collect_targets<'a>(
    record: &'a mut dyn Record,
    entries: Vec<Entry<'_>>,
    columns: &[String],
    slots: &mut [Option<&'a mut dyn Target>],
) -> Result<()> {
    let name = record.record_descriptor().name;
    let mut fields = record.fields_mut();

    let mut groups: IndexMap<usize, Vec<Entry<'_>>> = IndexMap::new();
    for (column, path) in entries {
        let Some((&position, rest)) = path.split_first() else {
            return Err(Error::invalid_destination(format!(
                "column `{}` has an empty field path in {name}",
                columns[column]
            )));
        };
        groups.entry(position).or_default().push((column, rest));
    }

    for (position, group) in groups {
        let Some(field) = fields.get_mut(position) else {
            return Err(Error::invalid_destination(format!(
                "{name} has no field at position {position}"
            )));
        };
        let field = std::mem::replace(field, FieldMut::Skip);

        if let Some(&(column, _)) = group.iter().find(|(_, rest)| rest.is_empty()) {
            if group.len() > 1 {
                return Err(Error::invalid_destination(format!(
                    "column `{}` overlaps other columns in {name}",
                    columns[column]
                )));
            }

            match field {
                FieldMut::Value(target) => slots[column] = Some(target),
                FieldMut::Record(_) | FieldMut::OptionalRecord(_) => {
                    return Err(Error::invalid_destination(format!(
                        "column `{}` addresses a nested record in {name}, not a value field",
                        columns[column]
                    )));
                }
                FieldMut::Skip => {
                    return Err(Error::invalid_destination(format!(
                        "column `{}` addresses a hidden field in {name}",
                        columns[column]
                    )));
                }
            }

            continue;
        }

        let nested = match field {
            FieldMut::Record(nested) => nested,
            FieldMut::OptionalRecord(optional) => optional.ensure(),
            FieldMut::Value(_) | FieldMut::Skip => {
                return Err(Error::invalid_destination(format!(
                    "field at position {position} of {name} is not a record"
                )));
            }
        };

        collect_targets(nested, group, columns, slots)?;
    }

    Ok(())
}

/// Hands the mapping one fresh holder per column.
pub(crate) fn mapping(
    columns: &[String],
    mapping: &mut dyn Mapping,
    mut copy: impl FnMut(&mut [&mut dyn Target]) -> Result<()>,
) -> Result<()> {
    mapping.scan_row(columns, &mut copy)
}

/// Copies the only column of the row into `target`.
pub(crate) fn scalar(
    columns: &[String],
    target: &mut dyn Target,
    copy: impl FnOnce(&mut [&mut dyn Target]) -> Result<()>,
) -> Result<()> {
    if columns.len() != 1 {
        return Err(Error::invalid_destination(format!(
            "expected exactly 1 column, got {}",
            columns.len()
        )));
    }

    copy(&mut [target])
}
