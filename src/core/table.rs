//! Tabular record sets built from flattened JSON.
//!
//! A [`Table`] keeps its columns in first-seen order and stores every cell as
//! optional text, which is exactly what survives a round-trip through the CSV
//! cache. Rows always have one cell per column.

use serde_json::Value;
use std::{collections::HashMap, io};


/// One row of cells, aligned with [`Table::columns`].
pub type Row = Vec<Option<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Create an empty table with the given header.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Flatten a JSON response into a table.
    ///
    /// An array yields one row per element, a lone object yields one row.
    /// Nested objects become dot-joined columns. Records that flatten to no
    /// columns at all give an empty table. Returns `None` for any other
    /// shape, including arrays holding non-object elements.
    pub fn from_json(value: &Value) -> Option<Self> {
        let records: Vec<&Value> = match value {
            Value::Array(items) => items.iter().collect(),
            Value::Object(_) => vec![value],
            _ => return None,
        };

        let mut table = Table::default();
        let mut index: HashMap<String, usize> = HashMap::new();

        for record in records {
            let Value::Object(_) = record else {
                return None;
            };

            let mut flat = Vec::new();
            flatten_into("", record, &mut flat);

            let mut row: Row = vec![None; table.columns.len()];
            for (key, cell) in flat {
                let idx = *index.entry(key.clone()).or_insert_with(|| {
                    table.columns.push(key);
                    table.columns.len() - 1
                });
                if idx >= row.len() {
                    row.resize(idx + 1, None);
                }
                row[idx] = cell;
            }
            table.rows.push(row);
        }

        // Rows without any column would not survive the CSV cache.
        if table.columns.is_empty() {
            return Some(Table::default());
        }

        let width = table.columns.len();
        for row in &mut table.rows {
            row.resize(width, None);
        }

        Some(table)
    }

    /// Row-wise union of tables.
    ///
    /// Columns appear in first-seen order; rows from a table lacking a column
    /// get `None` there. Row order is preserved.
    pub fn concat<I>(tables: I) -> Self
    where
        I: IntoIterator<Item = Table>,
    {
        let mut out = Table::default();

        for table in tables {
            let mapping: Vec<usize> = table
                .columns
                .iter()
                .map(|c| out.ensure_column(c))
                .collect();

            for row in table.rows {
                let mut aligned: Row = vec![None; out.columns.len()];
                for (cell, &idx) in row.into_iter().zip(&mapping) {
                    aligned[idx] = cell;
                }
                out.rows.push(aligned);
            }
        }

        out
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows (it may still have a header).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell text at `row` in column `name`; `None` for null cells, unknown
    /// columns, or out-of-range rows.
    pub fn get(&self, row: usize, name: &str) -> Option<&str> {
        let idx = self.column_index(name)?;
        self.rows.get(row)?.get(idx)?.as_deref()
    }

    /// All cells of a column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|r| r[idx].as_deref()).collect())
    }

    /// Append a row, padding or truncating it to the table width.
    pub fn push_row(&mut self, mut row: Row) {
        row.resize(self.columns.len(), None);
        self.rows.push(row);
    }

    /// Replace the column `name` with `values`, appending it if absent.
    ///
    /// `values` shorter than the table leave the remaining cells `None`.
    pub fn set_column(&mut self, name: &str, values: Vec<Option<String>>) {
        let idx = self.ensure_column(name);
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row[idx] = values.next().flatten();
        }
    }

    /// Ensure column `name` exists and set every null cell in it to `value`.
    pub fn fill_column(&mut self, name: &str, value: &str) {
        let idx = self.ensure_column(name);
        for row in &mut self.rows {
            if row[idx].is_none() {
                row[idx] = Some(value.to_string());
            }
        }
    }

    /// Write the table as CSV with a header row.
    ///
    /// A table with no columns writes nothing at all, so it reads back as an
    /// empty table.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> csv::Result<()> {
        if self.columns.is_empty() {
            return Ok(());
        }

        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for row in &self.rows {
            wtr.write_record(row.iter().map(|c| c.as_deref().unwrap_or("")))?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Read a CSV produced by [`Table::write_csv`]. Empty fields become `None`.
    pub fn read_csv<R: io::Read>(reader: R) -> csv::Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut table = Table::with_columns(rdr.headers()?.iter());
        for record in rdr.records() {
            let record = record?;
            table.push_row(record.iter().map(non_empty).collect());
        }

        Ok(table)
    }

    fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column_index(name) {
            return idx;
        }
        self.columns.push(name.to_string());
        for row in &mut self.rows {
            row.push(None);
        }
        self.columns.len() - 1
    }
}

/// Text form of a JSON leaf as stored in a table cell.
///
/// Null and empty strings are `None`; strings are kept verbatim; numbers,
/// booleans and arrays use their compact JSON text.
pub fn json_cell(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => non_empty(s),
        other => Some(other.to_string()),
    }
}

/// Short name of a JSON value's type, for error messages.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn flatten_into(prefix: &str, value: &Value, out: &mut Vec<(String, Option<String>)>) {
    match value {
        Value::Object(map) => {
            for (key, inner) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(&path, inner, out);
            }
        }
        leaf => out.push((prefix.to_string(), json_cell(leaf))),
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
