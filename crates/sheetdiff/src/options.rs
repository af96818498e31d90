use std::str::FromStr;

/// Order in which the column union is walked for every row.
///
/// The set of reported differences does not depend on it, only the order in
/// which records for a single row are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnOrder {
    /// Lexicographic by column name.
    #[default]
    Sorted,
    /// The first table's columns in sheet order, then columns only the second
    /// table has, in its sheet order.
    FirstSeen,
}

impl ColumnOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sorted => "sorted",
            Self::FirstSeen => "first-seen",
        }
    }
}

impl FromStr for ColumnOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sorted" | "lexicographic" => Ok(Self::Sorted),
            "first-seen" | "first_seen" | "sheet" => Ok(Self::FirstSeen),
            other => Err(format!(
                "invalid column order '{other}', expected 'sorted' or 'first-seen'"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompareOptions {
    pub column_order: ColumnOrder,
}

#[cfg(test)]
mod tests {
    use super::ColumnOrder;
    use std::str::FromStr;

    #[test]
    fn parse_column_order_aliases() {
        assert_eq!(ColumnOrder::from_str("sorted"), Ok(ColumnOrder::Sorted));
        assert_eq!(ColumnOrder::from_str(" First_Seen "), Ok(ColumnOrder::FirstSeen));
        assert_eq!(ColumnOrder::from_str("sheet"), Ok(ColumnOrder::FirstSeen));
    }

    #[test]
    fn reject_unknown_column_order() {
        let err = ColumnOrder::from_str("random").expect_err("unknown order should fail");
        assert!(err.contains("invalid column order"));
    }
}
