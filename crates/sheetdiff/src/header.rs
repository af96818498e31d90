use std::collections::{HashMap, HashSet};

/// Names header cells the way the sheet reader exposes them: empty cells
/// become `Unnamed: {index}` and repeated names get `.1`, `.2`, ... suffixes.
pub(crate) fn name_headers(cells: &[Option<String>]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    let mut suffixes: HashMap<String, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(cells.len());

    for (index, cell) in cells.iter().enumerate() {
        let base = match cell {
            Some(value) if !value.is_empty() => value.clone(),
            _ => format!("Unnamed: {index}"),
        };

        let mut name = base.clone();
        if used.contains(&name) {
            let suffix = suffixes.entry(base.clone()).or_insert(0);
            loop {
                *suffix += 1;
                name = format!("{base}.{suffix}");
                if !used.contains(&name) {
                    break;
                }
            }
        }
        used.insert(name.clone());
        headers.push(name);
    }

    headers
}

/// Trimmed column names; whitespace-only differences collapse into one name.
pub(crate) fn trim_headers(headers: &[String]) -> Vec<String> {
    headers
        .iter()
        .map(|header| header.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{name_headers, trim_headers};

    fn cells(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|value| (!value.is_empty()).then(|| (*value).to_string()))
            .collect()
    }

    #[test]
    fn names_blank_header_cells_by_position() {
        let headers = name_headers(&cells(&["Name", "", "Age"]));
        assert_eq!(headers, vec!["Name", "Unnamed: 1", "Age"]);
    }

    #[test]
    fn suffixes_repeated_headers() {
        let headers = name_headers(&cells(&["Name", "Name", "Name"]));
        assert_eq!(headers, vec!["Name", "Name.1", "Name.2"]);
    }

    #[test]
    fn trims_surrounding_whitespace_only() {
        let trimmed = trim_headers(&[" Name ".to_string(), "First Name\t".to_string()]);
        assert_eq!(trimmed, vec!["Name", "First Name"]);
    }
}
