mod align;
mod cell;
mod diff;
mod error;
mod header;
mod model;
mod normalize;
mod options;
mod report_out;
mod source;

use tracing::{info, warn};

pub use align::{AlignedRow, HEADER_LINE_OFFSET, PositionalAlignment, RowAlignment};
pub use diff::{column_union, compare_tables, compare_tables_with};
pub use error::{CompareError, LoadError, ReportError};
pub use model::{CanonicalTable, ComparisonReport, DifferenceRecord, RawTable};
pub use normalize::{load_table, normalize};
pub use options::{ColumnOrder, CompareOptions};
pub use report_out::{render_text, write_csv, write_csv_to_string, write_json_to_string};
pub use source::{TableSource, read_first_sheet};

/// Outcome of comparing two documents.
///
/// Exactly one of the two states holds: `error` is `None` and `report` carries
/// every difference, or `error` describes the failure and `report` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Comparison {
    pub report: ComparisonReport,
    pub error: Option<String>,
}

impl Comparison {
    #[must_use]
    pub fn differences(&self) -> &[DifferenceRecord] {
        &self.report.differences
    }

    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.error.is_none() && self.report.is_identical()
    }

    fn failed(error: &CompareError) -> Self {
        Self {
            report: ComparisonReport::default(),
            error: Some(error.to_string()),
        }
    }
}

/// Loads both documents and compares their first sheets.
pub fn try_compare_sources(
    first: &TableSource,
    second: &TableSource,
    options: &CompareOptions,
) -> Result<ComparisonReport, CompareError> {
    let first_table = load_table(first)?;
    let second_table = load_table(second)?;
    compare_tables(&first_table, &second_table, options)
}

/// Loads both documents and compares their first sheets; failures are folded
/// into [`Comparison::error`] and never escape.
#[must_use]
pub fn compare_sources(
    first: &TableSource,
    second: &TableSource,
    options: &CompareOptions,
) -> Comparison {
    match try_compare_sources(first, second, options) {
        Ok(report) => {
            info!(
                first = %first.label(),
                second = %second.label(),
                rows_examined = report.rows_examined,
                differences = report.differences.len(),
                "comparison completed"
            );
            Comparison {
                report,
                error: None,
            }
        }
        Err(error) => {
            warn!(
                first = %first.label(),
                second = %second.label(),
                %error,
                "comparison failed"
            );
            Comparison::failed(&error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CompareOptions, TableSource, compare_sources};

    #[test]
    fn unreadable_input_yields_error_and_no_differences() {
        let garbage = TableSource::Bytes(b"PK\x03\x04 truncated".to_vec());
        let comparison = compare_sources(&garbage, &garbage, &CompareOptions::default());

        assert!(comparison.differences().is_empty());
        assert!(!comparison.is_identical());
        let message = comparison.error.expect("error should be reported");
        assert!(message.starts_with("Error processing Excel file:"), "{message}");
    }
}
