use std::collections::{BTreeSet, HashSet};

use tracing::debug;

use crate::align::{PositionalAlignment, RowAlignment};
use crate::error::CompareError;
use crate::model::{CanonicalTable, ComparisonReport, DifferenceRecord};
use crate::options::{ColumnOrder, CompareOptions};

/// Every column name present in either table, in the requested order.
#[must_use]
pub fn column_union(
    first: &CanonicalTable,
    second: &CanonicalTable,
    order: ColumnOrder,
) -> Vec<String> {
    match order {
        ColumnOrder::Sorted => first
            .columns()
            .iter()
            .chain(second.columns())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
        ColumnOrder::FirstSeen => {
            let mut seen = HashSet::new();
            first
                .columns()
                .iter()
                .chain(second.columns())
                .filter(|column| seen.insert(column.as_str()))
                .cloned()
                .collect()
        }
    }
}

/// Compares two tables with rows paired by position.
pub fn compare_tables(
    first: &CanonicalTable,
    second: &CanonicalTable,
    options: &CompareOptions,
) -> Result<ComparisonReport, CompareError> {
    compare_tables_with(first, second, options, &PositionalAlignment)
}

/// Compares two tables with rows paired by `alignment`.
///
/// Records come out row by row, and within a row in the column order of
/// `options`. Cells are compared as exact strings.
pub fn compare_tables_with(
    first: &CanonicalTable,
    second: &CanonicalTable,
    options: &CompareOptions,
    alignment: &dyn RowAlignment,
) -> Result<ComparisonReport, CompareError> {
    for table in [first, second] {
        if let Some(column) = table.duplicate_column() {
            return Err(CompareError::Fault(format!(
                "cannot reindex on an axis with duplicate labels: '{column}'"
            )));
        }
    }

    let columns = column_union(first, second, options.column_order);
    let aligned = alignment.align(first.row_count(), second.row_count());

    let mut differences = Vec::new();
    for pair in &aligned {
        for column in &columns {
            let value_in_first = pair.first.map_or("", |row| first.cell(row, column));
            let value_in_second = pair.second.map_or("", |row| second.cell(row, column));
            if value_in_first != value_in_second {
                differences.push(DifferenceRecord {
                    row: pair.line,
                    column: column.clone(),
                    value_in_first: value_in_first.to_string(),
                    value_in_second: value_in_second.to_string(),
                });
            }
        }
    }

    debug!(
        rows_examined = aligned.len(),
        columns = columns.len(),
        differences = differences.len(),
        "compared tables"
    );

    Ok(ComparisonReport {
        rows_in_first: first.row_count(),
        rows_in_second: second.row_count(),
        rows_examined: aligned.len(),
        columns,
        differences,
    })
}
