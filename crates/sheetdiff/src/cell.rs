use calamine::{Data, ExcelDateTime};
use chrono::NaiveDateTime;

/// Roughly a quarter million years; chrono's `NaiveDate` ends before this.
const MAX_SERIAL_DAYS: f64 = 1.0e8;

/// Cell texts the sheet reader treats as missing values.
const NA_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// String form of a data cell; NA markers read as missing like empty cells.
pub(crate) fn data_cell_to_string(cell: &Data) -> Option<String> {
    cell_to_string(cell).filter(|value| !NA_MARKERS.contains(&value.as_str()))
}

/// String form of a sheet cell, `None` for an empty cell.
pub(crate) fn cell_to_string(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(value) => (!value.is_empty()).then(|| value.clone()),
        Data::Int(value) => Some(value.to_string()),
        Data::Float(value) => Some(format_float(*value)),
        Data::Bool(value) => Some(if *value { "True" } else { "False" }.to_string()),
        Data::DateTime(value) => Some(format_excel_datetime(value)),
        Data::DateTimeIso(value) | Data::DurationIso(value) => Some(value.clone()),
        Data::Error(error) => Some(error.to_string()),
    }
}

fn format_float(value: f64) -> String {
    // Integral values below 2^53 print without a fractional part.
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        #[allow(clippy::cast_possible_truncation)]
        let integral = value as i64;
        return integral.to_string();
    }
    value.to_string()
}

/// Excel date cell as `YYYY-MM-DD HH:MM:SS`, honouring the workbook's 1900 or
/// 1904 date system. Serials outside chrono's date range print as the plain
/// number.
pub(crate) fn format_excel_datetime(value: &ExcelDateTime) -> String {
    let serial = value.as_f64();
    // calamine's conversion saturates huge serials into a panicking duration.
    if !serial.is_finite() || serial.abs() >= MAX_SERIAL_DAYS {
        return serial.to_string();
    }
    value
        .as_datetime()
        .map_or_else(|| serial.to_string(), format_timestamp)
}

fn format_timestamp(datetime: NaiveDateTime) -> String {
    datetime.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use calamine::{CellErrorType, Data, ExcelDateTime, ExcelDateTimeType};

    use super::{cell_to_string, data_cell_to_string, format_excel_datetime};

    fn date(serial: f64, is_1904: bool) -> ExcelDateTime {
        ExcelDateTime::new(serial, ExcelDateTimeType::DateTime, is_1904)
    }

    #[test]
    fn integral_floats_drop_fraction() {
        assert_eq!(cell_to_string(&Data::Float(30.0)).as_deref(), Some("30"));
        assert_eq!(cell_to_string(&Data::Float(30.5)).as_deref(), Some("30.5"));
        assert_eq!(cell_to_string(&Data::Int(-4)).as_deref(), Some("-4"));
    }

    #[test]
    fn empty_cells_are_missing() {
        assert_eq!(cell_to_string(&Data::Empty), None);
        assert_eq!(cell_to_string(&Data::String(String::new())), None);
        assert_eq!(cell_to_string(&Data::String(" ".to_string())).as_deref(), Some(" "));
    }

    #[test]
    fn booleans_and_errors_use_display_spelling() {
        assert_eq!(cell_to_string(&Data::Bool(true)).as_deref(), Some("True"));
        assert_eq!(
            cell_to_string(&Data::Error(CellErrorType::Div0)).as_deref(),
            Some("#DIV/0!")
        );
    }

    #[test]
    fn formats_serial_dates() {
        assert_eq!(format_excel_datetime(&date(45_292.0, false)), "2024-01-01 00:00:00");
        assert_eq!(format_excel_datetime(&date(45_292.5, false)), "2024-01-01 12:00:00");
    }

    #[test]
    fn uses_workbook_date_system() {
        let cell = Data::DateTime(date(0.0, true));
        assert_eq!(cell_to_string(&cell).as_deref(), Some("1904-01-01 00:00:00"));
        assert_eq!(format_excel_datetime(&date(43_830.0, true)), "2024-01-01 00:00:00");
    }

    #[test]
    fn out_of_range_serials_fall_back_to_number() {
        assert_eq!(format_excel_datetime(&date(1.0e9, false)), "1000000000");
        assert_eq!(format_excel_datetime(&date(-1.0e18, true)), "-1000000000000000000");
        assert_eq!(format_excel_datetime(&date(9.9e7, false)), "99000000");
        assert_eq!(format_excel_datetime(&date(f64::INFINITY, false)), "inf");
    }

    #[test]
    fn na_markers_read_as_missing_data() {
        assert_eq!(data_cell_to_string(&Data::Error(CellErrorType::NA)), None);
        assert_eq!(data_cell_to_string(&Data::String("N/A".to_string())), None);
        assert_eq!(data_cell_to_string(&Data::String("null".to_string())), None);
        assert_eq!(
            data_cell_to_string(&Data::String(" NA".to_string())).as_deref(),
            Some(" NA")
        );
        assert_eq!(
            cell_to_string(&Data::String("NA".to_string())).as_deref(),
            Some("NA")
        );
    }
}
