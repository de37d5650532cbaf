use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value};

/// One preview row: column name → cell, in column order.
pub type Record = Map<String, Value>;

/// A single typed cell of a parsed dataset.
///
/// `List` only appears in derived columns (e.g. recommended roles); the CSV
/// parser never produces it.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl Cell {
    /// Renders the cell as text for analysis.
    /// Nulls become `nan` and floats always carry a fractional part (`3.0`).
    pub fn render(&self) -> String {
        match self {
            Cell::Null => "nan".to_string(),
            Cell::Bool(true) => "True".to_string(),
            Cell::Bool(false) => "False".to_string(),
            Cell::Int(n) => n.to_string(),
            Cell::Float(f) if f.is_nan() => "nan".to_string(),
            Cell::Float(f) if f.is_infinite() => {
                if *f > 0.0 { "inf" } else { "-inf" }.to_string()
            }
            Cell::Float(f) => format!("{f:?}"),
            Cell::Text(s) => s.clone(),
            Cell::List(items) => {
                let quoted: Vec<String> = items.iter().map(|i| format!("'{i}'")).collect();
                format!("[{}]", quoted.join(", "))
            }
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Bool(b) => Value::Bool(*b),
            Cell::Int(n) => Value::Number((*n).into()),
            Cell::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            Cell::Text(s) => Value::String(s.clone()),
            Cell::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// An in-memory table parsed from an upload. Every row holds exactly one
/// cell per column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Dataset {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Every cell of `name` rendered as text, or `None` if the column is absent.
    pub fn column_text(&self, name: &str) -> Option<Vec<String>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].render()).collect())
    }

    /// Adds a derived column, replacing an existing column of the same name.
    pub fn set_column(&mut self, name: &str, values: Vec<Cell>) {
        assert_eq!(
            values.len(),
            self.rows.len(),
            "derived column '{name}' must have one value per row"
        );
        match self.column_index(name) {
            Some(idx) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row[idx] = value;
                }
            }
            None => {
                self.columns.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    pub fn record(&self, row: usize) -> Record {
        self.columns
            .iter()
            .cloned()
            .zip(self.rows[row].iter().map(Cell::to_json))
            .collect()
    }

    /// The first `n` rows as records.
    pub fn head(&self, n: usize) -> Vec<Record> {
        (0..self.rows.len().min(n)).map(|i| self.record(i)).collect()
    }

    /// Records for the given row indices, in the given order.
    pub fn records_at(&self, indices: &[usize]) -> Vec<Record> {
        indices.iter().map(|&i| self.record(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["title".to_string(), "salary".to_string()],
            vec![
                vec![Cell::Text("Engineer".to_string()), Cell::Int(100)],
                vec![Cell::Text("Analyst".to_string()), Cell::Null],
            ],
        )
    }

    #[test]
    fn test_render_float_keeps_fraction() {
        assert_eq!(Cell::Float(3.0).render(), "3.0");
        assert_eq!(Cell::Float(2.5).render(), "2.5");
    }

    #[test]
    fn test_render_null_is_nan() {
        assert_eq!(Cell::Null.render(), "nan");
    }

    #[test]
    fn test_non_finite_float_serializes_as_null() {
        assert_eq!(Cell::Float(f64::INFINITY).to_json(), Value::Null);
    }

    #[test]
    fn test_record_preserves_column_order() {
        let record = sample().record(0);
        let keys: Vec<&String> = record.keys().collect();
        assert_eq!(keys, vec!["title", "salary"]);
        assert_eq!(record["salary"], json!(100));
    }

    #[test]
    fn test_set_column_appends_then_replaces() {
        let mut ds = sample();
        ds.set_column("category", vec![Cell::Text("A".into()), Cell::Text("B".into())]);
        assert_eq!(ds.columns().len(), 3);
        ds.set_column("category", vec![Cell::Text("C".into()), Cell::Text("D".into())]);
        assert_eq!(ds.columns().len(), 3);
        assert_eq!(ds.column_text("category").unwrap(), vec!["C", "D"]);
    }

    #[test]
    fn test_head_caps_at_row_count() {
        assert_eq!(sample().head(5).len(), 2);
    }

    #[test]
    fn test_list_cell_serializes_as_array() {
        let cell = Cell::List(vec!["AI Engineer".into(), "Software Engineer".into()]);
        assert_eq!(cell.to_json(), json!(["AI Engineer", "Software Engineer"]));
    }
}
