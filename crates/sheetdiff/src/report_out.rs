use std::fmt::Write as _;
use std::io;
use std::path::Path;

use csv::{Writer, WriterBuilder};

use crate::error::ReportError;
use crate::model::DifferenceRecord;

const CSV_HEADERS: [&str; 4] = ["row", "column", "value_in_first", "value_in_second"];

fn write_records<W: io::Write>(
    writer: &mut Writer<W>,
    differences: &[DifferenceRecord],
) -> Result<(), ReportError> {
    writer.write_record(CSV_HEADERS)?;
    for difference in differences {
        writer.write_record([
            difference.row.to_string().as_str(),
            difference.column.as_str(),
            difference.value_in_first.as_str(),
            difference.value_in_second.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_csv(
    path: &Path,
    differences: &[DifferenceRecord],
    delimiter: u8,
) -> Result<(), ReportError> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_path(path)?;
    write_records(&mut writer, differences)?;
    Ok(())
}

pub fn write_csv_to_string(
    differences: &[DifferenceRecord],
    delimiter: u8,
) -> Result<String, ReportError> {
    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::<u8>::new());
    write_records(&mut writer, differences)?;

    let bytes = writer
        .into_inner()
        .map_err(|error| ReportError::Csv(error.into_error().into()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn write_json_to_string(differences: &[DifferenceRecord]) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(differences)?)
}

/// Human readable listing, one line per difference.
#[must_use]
pub fn render_text(differences: &[DifferenceRecord]) -> String {
    if differences.is_empty() {
        return "no differences\n".to_string();
    }

    let mut out = String::new();
    for difference in differences {
        let _ = writeln!(
            out,
            "row {}, column {:?}: {:?} != {:?}",
            difference.row, difference.column, difference.value_in_first, difference.value_in_second
        );
    }
    out
}
