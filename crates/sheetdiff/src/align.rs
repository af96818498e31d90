/// One compared row: the row number reported to users and the position of
/// the matching row in each table, if the table has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignedRow {
    pub line: usize,
    pub first: Option<usize>,
    pub second: Option<usize>,
}

/// Strategy that pairs rows of two tables before cells are compared.
pub trait RowAlignment {
    fn align(&self, first_rows: usize, second_rows: usize) -> Vec<AlignedRow>;
}

/// Pairs rows by ordinal position.
///
/// A row inserted into one table shifts every later pairing, so everything
/// below the insertion is reported as changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionalAlignment;

/// Offset from a 0-based data row index to its sheet line (1-based, after the header).
pub const HEADER_LINE_OFFSET: usize = 2;

impl RowAlignment for PositionalAlignment {
    fn align(&self, first_rows: usize, second_rows: usize) -> Vec<AlignedRow> {
        (0..first_rows.max(second_rows))
            .map(|index| AlignedRow {
                line: index + HEADER_LINE_OFFSET,
                first: (index < first_rows).then_some(index),
                second: (index < second_rows).then_some(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AlignedRow, PositionalAlignment, RowAlignment};

    #[test]
    fn covers_longer_table_with_gaps_on_shorter_side() {
        let aligned = PositionalAlignment.align(3, 1);
        assert_eq!(aligned.len(), 3);
        assert_eq!(
            aligned[0],
            AlignedRow {
                line: 2,
                first: Some(0),
                second: Some(0)
            }
        );
        assert_eq!(
            aligned[2],
            AlignedRow {
                line: 4,
                first: Some(2),
                second: None
            }
        );
    }

    #[test]
    fn empty_tables_align_to_nothing() {
        assert!(PositionalAlignment.align(0, 0).is_empty());
    }
}
