use tracing::debug;

use crate::error::LoadError;
use crate::header::trim_headers;
use crate::model::{CanonicalTable, RawTable};
use crate::source::{TableSource, read_first_sheet};

/// Cleans a raw sheet into a canonical table.
///
/// Column names are trimmed, rows whose cells are all missing are dropped
/// before row positions are assigned, and missing cells become `""`.
#[must_use]
pub fn normalize(raw: RawTable) -> CanonicalTable {
    let columns = trim_headers(&raw.headers);
    let width = columns.len();
    let raw_rows = raw.rows.len();

    let rows = raw
        .rows
        .into_iter()
        .filter(|row| !is_blank_row(row))
        .map(|row| {
            let mut cells = row
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect::<Vec<_>>();
            cells.resize(width, String::new());
            cells
        })
        .collect::<Vec<_>>();

    debug!(
        columns = width,
        kept_rows = rows.len(),
        dropped_rows = raw_rows - rows.len(),
        "normalized table"
    );
    CanonicalTable::from_parts(columns, rows)
}

/// Reads the first sheet of `source` and normalizes it.
pub fn load_table(source: &TableSource) -> Result<CanonicalTable, LoadError> {
    read_first_sheet(source).map(normalize)
}

fn is_blank_row(row: &[Option<String>]) -> bool {
    row.iter().all(Option::is_none)
}
