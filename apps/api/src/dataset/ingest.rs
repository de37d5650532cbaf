//! CSV ingestion: bytes → typed [`Dataset`].
//!
//! Parsing follows dataframe conventions: the first record is the header,
//! NA markers become nulls, and every column is typed as a whole
//! (integer → float → boolean → text).

use std::collections::HashSet;

use crate::dataset::models::{Cell, Dataset};
use crate::dataset::DatasetError;

/// Cell values read as null.
const NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

const TRUE_VALUES: &[&str] = &["True", "TRUE", "true"];
const FALSE_VALUES: &[&str] = &["False", "FALSE", "false"];

/// Parses raw upload bytes as a UTF-8 CSV document.
pub fn parse_csv(bytes: &[u8]) -> Result<Dataset, DatasetError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DatasetError::Parse(format!("'utf-8' codec can't decode upload: {e}")))?;

    if text.trim().is_empty() {
        return Err(DatasetError::Parse("No columns to parse from file".to_string()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(result) => result.map_err(csv_error)?,
        None => return Err(DatasetError::Parse("No columns to parse from file".to_string())),
    };
    let columns = normalize_headers(header.iter());
    let width = columns.len();

    let mut raw_columns: Vec<Vec<Option<String>>> = vec![Vec::new(); width];
    for result in records {
        let record = result.map_err(csv_error)?;
        if record.len() > width {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(DatasetError::Parse(format!(
                "Error tokenizing data. Expected {width} fields in line {line}, saw {}",
                record.len()
            )));
        }
        for (idx, column) in raw_columns.iter_mut().enumerate() {
            let value = record.get(idx).filter(|v| !is_na(v)).map(str::to_string);
            column.push(value);
        }
    }

    let row_count = raw_columns.first().map(Vec::len).unwrap_or(0);
    let typed: Vec<Vec<Cell>> = raw_columns.into_iter().map(type_column).collect();

    let mut rows: Vec<Vec<Cell>> = (0..row_count).map(|_| Vec::with_capacity(width)).collect();
    for column in typed {
        for (row, cell) in rows.iter_mut().zip(column) {
            row.push(cell);
        }
    }

    Ok(Dataset::new(columns, rows))
}

/// Decodes bytes as UTF-8, skipping invalid byte sequences. Every valid
/// character is kept, including a literal U+FFFD.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut decoded = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        decoded.push_str(chunk.valid());
    }
    decoded
}

fn csv_error(e: csv::Error) -> DatasetError {
    DatasetError::Parse(e.to_string())
}

fn is_na(value: &str) -> bool {
    NA_MARKERS.contains(&value)
}

/// Blank names become `Unnamed: <idx>`; repeats become `name.1`, `name.2`, ...
fn normalize_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut columns = Vec::new();

    for (idx, name) in raw.enumerate() {
        let base = if name.is_empty() {
            format!("Unnamed: {idx}")
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while seen.contains(&candidate) {
            candidate = format!("{base}.{suffix}");
            suffix += 1;
        }

        seen.insert(candidate.clone());
        columns.push(candidate);
    }

    columns
}

fn type_column(values: Vec<Option<String>>) -> Vec<Cell> {
    let present: Vec<&str> = values.iter().flatten().map(String::as_str).collect();
    let has_nulls = present.len() < values.len();

    if present.is_empty() {
        return values.iter().map(|_| Cell::Null).collect();
    }

    if present.iter().all(|v| v.trim().parse::<i64>().is_ok()) {
        // Integer columns with gaps widen to float, as NaN has no integer form.
        return values
            .into_iter()
            .map(|v| match v.and_then(|s| s.trim().parse::<i64>().ok()) {
                Some(n) if has_nulls => Cell::Float(n as f64),
                Some(n) => Cell::Int(n),
                None => Cell::Null,
            })
            .collect();
    }

    if present.iter().all(|v| v.trim().parse::<f64>().is_ok()) {
        return values
            .into_iter()
            .map(|v| match v.and_then(|s| s.trim().parse::<f64>().ok()) {
                Some(f) => Cell::Float(f),
                None => Cell::Null,
            })
            .collect();
    }

    if present
        .iter()
        .all(|v| TRUE_VALUES.contains(v) || FALSE_VALUES.contains(v))
    {
        return values
            .into_iter()
            .map(|v| match v {
                Some(s) => Cell::Bool(TRUE_VALUES.contains(&s.as_str())),
                None => Cell::Null,
            })
            .collect();
    }

    values
        .into_iter()
        .map(|v| v.map(Cell::Text).unwrap_or(Cell::Null))
        .collect()
}
