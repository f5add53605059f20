/// Helpers for sortable list tables.
///
/// Filtering and pagination are server-side everywhere — a filter change is
/// a new list query — so only the sort-header UI helpers live here.

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// CSS class for the sort indicator span.
pub fn get_sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        assert_eq!(get_sort_indicator("code", "code", true), " ▲");
        assert_eq!(get_sort_indicator("code", "code", false), " ▼");
        assert_eq!(get_sort_indicator("code", "status", true), " ⇅");
    }

    #[test]
    fn test_sort_class() {
        assert_eq!(
            get_sort_class("code", "code"),
            "table__sort-indicator table__sort-indicator--active"
        );
        assert_eq!(get_sort_class("code", "status"), "table__sort-indicator");
    }
}
