//! Row → record materialization.

use crate::error::{QbError, QbResult};
use crate::value::{Record, Value};

/// Materialize a driver row into a generic [`Record`].
///
/// Every column is read as a dynamically typed [`Value`] and normalized via
/// [`normalize`]. A column that cannot be read surfaces as
/// [`QbError::Decode`] naming the offending column.
pub(crate) fn record_from_row(row: &rusqlite::Row<'_>, columns: &[String]) -> QbResult<Record> {
    let mut record = Record::new();
    for (idx, name) in columns.iter().enumerate() {
        let value: Value = row
            .get(idx)
            .map_err(|e| QbError::decode(name.clone(), e.to_string()))?;
        record.insert(name.clone(), normalize(value));
    }
    Ok(record)
}

/// Normalize a fetched value: BLOBs are decoded to text (lossy UTF-8), all
/// other kinds pass through unchanged.
pub(crate) fn normalize(value: Value) -> Value {
    match value {
        Value::Blob(bytes) => Value::Text(String::from_utf8_lossy(&bytes).into_owned()),
        other => other,
    }
}
