//! Row-oriented table input (`source, target[, weight, ...]`).
//!
//! Two columns count occurrences of each ordered pair; three or more sum the third column.
//! Columns past the third are ignored.

use serde_json::Value;

use super::Graph;
use crate::error::{Error, Result};

impl Graph<String> {
    /// Builds a graph from string rows, e.g. the records of a CSV reader.
    pub fn from_rows<R, C>(rows: R) -> Result<Self>
    where
        R: IntoIterator,
        R::Item: AsRef<[C]>,
        C: AsRef<str>,
    {
        Self::from_table(rows.into_iter().map(|row| {
            Ok(row
                .as_ref()
                .iter()
                .map(|cell| cell.as_ref().to_string())
                .collect())
        }))
    }

    /// Builds a graph from a JSON array of rows.
    ///
    /// A row is either an array of cells or an object of named cells. The first object row fixes
    /// the column names and their order; later object rows are read by name and must carry exactly
    /// those keys. Non-string node cells are rendered to text; the weight cell may be a number or
    /// a numeric string.
    pub fn from_json(value: &Value) -> Result<Self> {
        let rows = value.as_array().ok_or_else(|| Error::NotTabular {
            reason: "expected an array of rows".to_string(),
        })?;
        let mut columns: Option<Vec<&str>> = None;
        Self::from_table(
            rows.iter()
                .enumerate()
                .map(|(row, value)| json_row(row, value, &mut columns)),
        )
    }

    fn from_table<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = Result<Vec<String>>>,
    {
        let mut width: Option<usize> = None;
        let mut counted: Vec<(String, String)> = Vec::new();
        let mut weighted: Vec<(String, String, f64)> = Vec::new();

        for (row, cells) in rows.into_iter().enumerate() {
            let cells = cells?;
            let expected = *width.get_or_insert(cells.len());
            if cells.len() != expected {
                return Err(Error::RaggedRow {
                    row,
                    expected,
                    found: cells.len(),
                });
            }
            match cells.as_slice() {
                [source, target] => counted.push((source.clone(), target.clone())),
                [source, target, weight, ..] => {
                    weighted.push((source.clone(), target.clone(), parse_weight(row, weight)?))
                }
                _ => return Err(Error::TooFewColumns { columns: expected }),
            }
        }

        match width {
            Some(w) if w > 2 => Self::from_weighted_edges(weighted),
            _ => Ok(Self::from_edges(counted)),
        }
    }
}

fn parse_weight(row: usize, cell: &str) -> Result<f64> {
    cell.trim()
        .parse::<f64>()
        .map_err(|_| Error::NonNumericWeight {
            row,
            value: cell.to_string(),
        })
}

fn json_row<'a>(
    row: usize,
    value: &'a Value,
    columns: &mut Option<Vec<&'a str>>,
) -> Result<Vec<String>> {
    let cells: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => {
            let names = columns.get_or_insert_with(|| map.keys().map(String::as_str).collect());
            let cells = names
                .iter()
                .enumerate()
                .map(|(column, name)| map.get(*name).ok_or(Error::MissingCell { row, column }))
                .collect::<Result<Vec<_>>>()?;
            if map.len() != names.len() {
                return Err(Error::NotTabular {
                    reason: format!("row {row} has columns the first row does not name"),
                });
            }
            cells
        }
        _ => {
            return Err(Error::NotTabular {
                reason: format!("row {row} is neither an array nor an object"),
            });
        }
    };
    cells
        .into_iter()
        .enumerate()
        .map(|(column, cell)| json_cell(row, column, cell))
        .collect()
}

fn json_cell(row: usize, column: usize, cell: &Value) -> Result<String> {
    match cell {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Err(Error::MissingCell { row, column }),
        Value::Array(_) | Value::Object(_) => Err(Error::NotTabular {
            reason: format!("row {row}, column {column} holds a nested value"),
        }),
    }
}
