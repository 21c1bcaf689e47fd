//! Delimited-text processing with per-column type inference.

use atlas_model::{FieldDescriptor, FieldType, TableData};
use serde_json::{Number, Value};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Share of non-empty cells that must parse as numbers for a column to be
/// typed numeric.
const NUMERIC_THRESHOLD: f64 = 0.9;

#[derive(Debug, Default)]
struct ColumnStats {
    non_empty: usize,
    integers: usize,
    numbers: usize,
    booleans: usize,
}

impl ColumnStats {
    fn observe(&mut self, cell: &str) {
        if cell.is_empty() {
            return;
        }
        self.non_empty += 1;
        if cell.parse::<i64>().is_ok() {
            self.integers += 1;
        }
        if cell.parse::<f64>().is_ok() {
            self.numbers += 1;
        }
        if is_boolean(cell) {
            self.booleans += 1;
        }
    }

    fn field_type(&self) -> FieldType {
        if self.non_empty == 0 {
            return FieldType::String;
        }
        if self.booleans == self.non_empty {
            return FieldType::Boolean;
        }
        let numeric_ratio = self.numbers as f64 / self.non_empty as f64;
        if numeric_ratio > NUMERIC_THRESHOLD {
            if self.integers == self.numbers {
                FieldType::Integer
            } else {
                FieldType::Real
            }
        } else {
            FieldType::String
        }
    }
}

fn is_boolean(cell: &str) -> bool {
    cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false")
}

/// Parses delimited text into a typed row table.
///
/// The first row is the header. Column types are inferred from the data:
/// boolean when every non-empty cell is `true`/`false`, numeric when more
/// than 90% of non-empty cells parse, string otherwise. Cells that do not
/// conform to their column's type coerce to null, as do empty cells.
pub fn parse_tabular(raw: &str) -> Result<TableData> {
    if raw.trim().is_empty() {
        return Err(IngestError::EmptyResponse);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(raw.as_bytes());

    let headers: Vec<String> = {
        let record = reader.headers()?;
        record.iter().map(|name| name.trim().to_string()).collect()
    };
    if let Some(index) = headers.iter().position(|name| name.is_empty()) {
        return Err(IngestError::UnnamedColumn { index });
    }

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        raw_rows.push(record.iter().map(|cell| cell.trim().to_string()).collect());
    }
    if raw_rows.is_empty() {
        return Err(IngestError::NoRows);
    }

    let mut stats: Vec<ColumnStats> = headers.iter().map(|_| ColumnStats::default()).collect();
    for row in &raw_rows {
        for (column, cell) in stats.iter_mut().zip(row) {
            column.observe(cell);
        }
    }

    let fields: Vec<FieldDescriptor> = headers
        .into_iter()
        .zip(&stats)
        .map(|(name, column)| {
            let field_type = column.field_type();
            debug!(field = %name, ?field_type, "inferred column type");
            FieldDescriptor { name, field_type }
        })
        .collect();

    let rows: Vec<Vec<Value>> = raw_rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .zip(&fields)
                .map(|(cell, field)| coerce_cell(&cell, field.field_type))
                .collect()
        })
        .collect();

    info!(
        rows = rows.len(),
        columns = fields.len(),
        "parsed tabular dataset"
    );
    Ok(TableData { fields, rows })
}

fn coerce_cell(cell: &str, field_type: FieldType) -> Value {
    if cell.is_empty() {
        return Value::Null;
    }
    match field_type {
        FieldType::Integer => cell
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .unwrap_or(Value::Null),
        FieldType::Real => cell
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        FieldType::Boolean => {
            if is_boolean(cell) {
                Value::Bool(cell.eq_ignore_ascii_case("true"))
            } else {
                Value::Null
            }
        }
        FieldType::String => Value::String(cell.to_string()),
    }
}
