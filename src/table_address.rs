//! Table cell addressing.
//!
//! A table-addressed label path always has exactly three segments: the
//! table name plus one key per axis. Which segment is the row and which is
//! the column depends on the table's [`Orientation`]; the second segment is
//! always matched against the table's own fields and the third against its
//! definition fields. Dynamic-rows tables replace the own-field match with
//! a numeric row index, surfaced on regions with a leading `#` marker.
//!
//! Lookup misses mean the table schema was renamed or retyped since the
//! label was written; they yield [`Error::UnresolvableTableAddress`] and
//! the caller drops the label.

use crate::error::{Error, Result};
use crate::model::{Orientation, Region, TableKind, TableTag};

/// Marker prefix on the row key of a dynamic-rows table cell.
pub const DYNAMIC_ROW_PREFIX: char = '#';

/// The resolved (row, column) address of one table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellKeys {
    /// Row key (dynamic rows carry the `#` prefix)
    pub row_key: String,
    /// Column key
    pub column_key: String,
}

fn unresolvable(table: &TableTag, detail: impl Into<String>) -> Error {
    Error::UnresolvableTableAddress {
        table: table.name.clone(),
        detail: detail.into(),
    }
}

/// Resolve a 3-segment label path to the addressed cell's keys.
///
/// `segments[0]` is the table name and is not re-checked here; the caller
/// already used it to look the table up in the catalog.
pub fn resolve_cell_keys(segments: &[String; 3], table: &TableTag) -> Result<CellKeys> {
    match table.kind {
        TableKind::FixedSchema => {
            let own = table
                .own_field(&segments[1])
                .ok_or_else(|| unresolvable(table, format!("no own field '{}'", segments[1])))?;
            let definition = table.definition_field(&segments[2]).ok_or_else(|| {
                unresolvable(table, format!("no definition field '{}'", segments[2]))
            })?;
            let (row_key, column_key) = match table.orientation {
                Orientation::Vertical => (&own.key, &definition.key),
                Orientation::Horizontal => (&definition.key, &own.key),
            };
            Ok(CellKeys {
                row_key: row_key.clone(),
                column_key: column_key.clone(),
            })
        }
        TableKind::DynamicRows => {
            let index: usize = segments[1].parse().map_err(|_| {
                unresolvable(table, format!("row index '{}' is not numeric", segments[1]))
            })?;
            let definition = table.definition_field(&segments[2]).ok_or_else(|| {
                unresolvable(table, format!("no definition field '{}'", segments[2]))
            })?;
            Ok(CellKeys {
                row_key: format!("{}{}", DYNAMIC_ROW_PREFIX, index),
                column_key: definition.key.clone(),
            })
        }
    }
}

/// Build the 3-segment label path addressing a tagged region's cell.
///
/// Inverse of [`resolve_cell_keys`]: for any region consistent with the
/// table's schema, resolving the built path yields the region's own keys.
pub fn build_path(table: &TableTag, region: &Region) -> Result<[String; 3]> {
    let row_key = region
        .row_key
        .as_deref()
        .ok_or_else(|| unresolvable(table, "region has no row key"))?;
    let column_key = region
        .column_key
        .as_deref()
        .ok_or_else(|| unresolvable(table, "region has no column key"))?;

    match table.kind {
        TableKind::FixedSchema => {
            let (own_key, definition_key) = match table.orientation {
                Orientation::Vertical => (row_key, column_key),
                Orientation::Horizontal => (column_key, row_key),
            };
            if table.own_field(own_key).is_none() {
                return Err(unresolvable(table, format!("no own field '{}'", own_key)));
            }
            if table.definition_field(definition_key).is_none() {
                return Err(unresolvable(
                    table,
                    format!("no definition field '{}'", definition_key),
                ));
            }
            Ok([
                table.name.clone(),
                own_key.to_string(),
                definition_key.to_string(),
            ])
        }
        TableKind::DynamicRows => {
            let index = row_key
                .strip_prefix(DYNAMIC_ROW_PREFIX)
                .and_then(|rest| rest.parse::<usize>().ok())
                .ok_or_else(|| {
                    unresolvable(table, format!("row key '{}' is not a row index", row_key))
                })?;
            if table.definition_field(column_key).is_none() {
                return Err(unresolvable(
                    table,
                    format!("no definition field '{}'", column_key),
                ));
            }
            Ok([
                table.name.clone(),
                index.to_string(),
                column_key.to_string(),
            ])
        }
    }
}
