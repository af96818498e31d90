use std::io::Cursor;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, open_workbook_auto, open_workbook_auto_from_rs};
use tracing::debug;

use crate::cell::{cell_to_string, data_cell_to_string};
use crate::error::LoadError;
use crate::header::name_headers;
use crate::model::RawTable;

/// Handle to a spreadsheet document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl TableSource {
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Path(path) => path.display().to_string(),
            Self::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

impl From<&Path> for TableSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}

impl From<PathBuf> for TableSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<u8>> for TableSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

/// Reads the first worksheet of `source`; its first row is the header.
pub fn read_first_sheet(source: &TableSource) -> Result<RawTable, LoadError> {
    let range = match source {
        TableSource::Path(path) => {
            let mut workbook = open_workbook_auto(path)?;
            workbook.worksheet_range_at(0).ok_or(LoadError::NoSheet)??
        }
        TableSource::Bytes(bytes) => {
            let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.as_slice()))?;
            workbook.worksheet_range_at(0).ok_or(LoadError::NoSheet)??
        }
    };

    let (height, width) = range.get_size();
    debug!(source = %source.label(), height, width, "read first worksheet");
    Ok(range_to_raw(&range))
}

pub(crate) fn range_to_raw(range: &Range<Data>) -> RawTable {
    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        return RawTable::default();
    };

    let headers = name_headers(&header_cells.iter().map(cell_to_string).collect::<Vec<_>>());
    let width = headers.len();
    let rows = rows
        .map(|row| {
            let mut cells = row.iter().map(data_cell_to_string).collect::<Vec<_>>();
            cells.resize(width, None);
            cells
        })
        .collect();

    RawTable::new(headers, rows)
}
