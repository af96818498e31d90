use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// First sheet as read from the document, before any cleaning.
///
/// `None` marks a cell the document leaves empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { headers, rows }
    }

    /// Builds a raw table from string literals, mapping `""` to a missing cell.
    #[must_use]
    pub fn from_strings(headers: &[&str], rows: &[&[&str]]) -> Self {
        Self {
            headers: headers.iter().map(|header| (*header).to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| (!cell.is_empty()).then(|| (*cell).to_string()))
                        .collect()
                })
                .collect(),
        }
    }
}

/// Cleaned table used for comparison.
///
/// Every row holds exactly one string per column; a missing cell is `""`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CanonicalTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

impl CanonicalTable {
    pub(crate) fn from_parts(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut index = HashMap::with_capacity(columns.len());
        for (position, column) in columns.iter().enumerate() {
            index.entry(column.clone()).or_insert(position);
        }
        Self {
            columns,
            rows,
            index,
        }
    }

    /// Column names in sheet order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at `row`/`column`, or `""` when the table has no such row or column.
    #[must_use]
    pub fn cell(&self, row: usize, column: &str) -> &str {
        self.index
            .get(column)
            .and_then(|&position| self.rows.get(row).and_then(|cells| cells.get(position)))
            .map_or("", String::as_str)
    }

    /// First column name that occurs more than once, if any.
    #[must_use]
    pub fn duplicate_column(&self) -> Option<&str> {
        if self.index.len() == self.columns.len() {
            return None;
        }
        self.columns
            .iter()
            .enumerate()
            .find(|(position, column)| self.index.get(column.as_str()) != Some(position))
            .map(|(_, column)| column.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferenceRecord {
    /// 1-based sheet line number, counting the header row.
    pub row: usize,
    pub column: String,
    pub value_in_first: String,
    pub value_in_second: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub rows_in_first: usize,
    pub rows_in_second: usize,
    pub rows_examined: usize,
    pub columns: Vec<String>,
    pub differences: Vec<DifferenceRecord>,
}

impl ComparisonReport {
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.differences.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::CanonicalTable;

    #[test]
    fn missing_row_and_column_read_as_empty() {
        let table = CanonicalTable::from_parts(
            vec!["Name".to_string()],
            vec![vec!["Alice".to_string()]],
        );
        assert_eq!(table.cell(0, "Name"), "Alice");
        assert_eq!(table.cell(0, "Age"), "");
        assert_eq!(table.cell(5, "Name"), "");
    }

    #[test]
    fn reports_first_repeated_column() {
        let table = CanonicalTable::from_parts(
            vec!["A".to_string(), "B".to_string(), "A".to_string()],
            Vec::new(),
        );
        assert_eq!(table.duplicate_column(), Some("A"));
    }
}
