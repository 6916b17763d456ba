use std::collections::HashSet;

/// Keep the entries of `all_categories` that appear in `preferred`.
///
/// Order and multiplicity follow `all_categories`. An empty preference list
/// disables filtering and the input is returned as is.
#[must_use]
pub fn filter_by_preferences(preferred: &[String], all_categories: Vec<String>) -> Vec<String> {
    if preferred.is_empty() {
        return all_categories;
    }

    let preferred: HashSet<&str> = preferred.iter().map(String::as_str).collect();
    all_categories
        .into_iter()
        .filter(|category| preferred.contains(category.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn no_preferences_returns_input_unchanged() {
        let result = filter_by_preferences(&[], strings(&["c", "a", "b"]));
        assert_eq!(result, strings(&["c", "a", "b"]));
    }

    #[test]
    fn keeps_only_preferred_categories() {
        let result = filter_by_preferences(&strings(&["b"]), strings(&["a", "b", "c"]));
        assert_eq!(result, strings(&["b"]));
    }

    #[test]
    fn preserves_duplicates_from_input() {
        let result = filter_by_preferences(&strings(&["a"]), strings(&["a", "a", "b"]));
        assert_eq!(result, strings(&["a", "a"]));
    }

    #[test]
    fn follows_input_order_not_preference_order() {
        let result = filter_by_preferences(&strings(&["c", "a"]), strings(&["a", "b", "c"]));
        assert_eq!(result, strings(&["a", "c"]));
    }

    #[test]
    fn preferences_missing_from_input_are_ignored() {
        let result = filter_by_preferences(&strings(&["x", "y"]), strings(&["a", "b"]));
        assert!(result.is_empty());
    }

    #[test]
    fn matching_is_case_sensitive() {
        let result = filter_by_preferences(&strings(&["News"]), strings(&["news", "News"]));
        assert_eq!(result, strings(&["News"]));
    }
}
