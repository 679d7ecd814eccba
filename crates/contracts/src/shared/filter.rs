//! Visible-subset computation for filterable list pages.
//!
//! Pages hold the currently selected [`FilterKey`] as transient UI state and
//! derive the visible list from the loaded records on every change. The
//! source collection is never mutated.

use std::collections::BTreeSet;

/// Currently selected filter. `All` passes the source collection through
/// untouched, in its original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterKey {
    All,
    Value(String),
}

impl FilterKey {
    pub fn value(v: impl Into<String>) -> Self {
        Self::Value(v.into())
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

/// Records that expose the values they can be selected by: the single
/// status of a project, the tag set of a blog post.
pub trait Filterable {
    fn filter_values(&self) -> Vec<String>;
}

/// Ordered subset of `items` matching `key`.
///
/// `FilterKey::All` returns the input unchanged. A value no record carries
/// yields an empty list; keys are validated against [`available_keys`] (or a
/// closed enum) at the UI boundary before they reach this function.
pub fn visible_records<T: Filterable + Clone>(items: Vec<T>, key: &FilterKey) -> Vec<T> {
    match key {
        FilterKey::All => items,
        FilterKey::Value(wanted) => items
            .into_iter()
            .filter(|item| item.filter_values().iter().any(|v| v == wanted))
            .collect(),
    }
}

/// Distinct filter values across `items`, sorted alphabetically.
pub fn available_keys<T: Filterable>(items: &[T]) -> Vec<String> {
    let keys: BTreeSet<String> = items
        .iter()
        .flat_map(|item| item.filter_values())
        .collect();
    keys.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        values: Vec<&'static str>,
    }

    impl Item {
        fn new(id: u32, values: &[&'static str]) -> Self {
            Self {
                id,
                values: values.to_vec(),
            }
        }
    }

    impl Filterable for Item {
        fn filter_values(&self) -> Vec<String> {
            self.values.iter().map(|v| v.to_string()).collect()
        }
    }

    fn projects() -> Vec<Item> {
        vec![
            Item::new(1, &["completed"]),
            Item::new(2, &["concept"]),
            Item::new(3, &["completed"]),
        ]
    }

    #[test]
    fn test_all_returns_input_unchanged() {
        let items = projects();
        let visible = visible_records(items.clone(), &FilterKey::All);
        assert_eq!(visible, items);
    }

    #[test]
    fn test_value_returns_ordered_subsequence() {
        let visible = visible_records(projects(), &FilterKey::value("completed"));
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_each_status_selects_only_matching_records() {
        for status in ["completed", "in-progress", "concept"] {
            let visible = visible_records(projects(), &FilterKey::value(status));
            assert!(visible
                .iter()
                .all(|item| item.values.contains(&status)));
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let key = FilterKey::value("completed");
        let once = visible_records(projects(), &key);
        let twice = visible_records(once.clone(), &key);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_key_yields_empty() {
        let visible = visible_records(projects(), &FilterKey::value("cancelled"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_set_valued_records_match_on_containment() {
        let posts = vec![Item::new(1, &["rust", "wasm"]), Item::new(2, &["wasm"])];
        let visible = visible_records(posts, &FilterKey::value("rust"));
        let ids: Vec<u32> = visible.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_available_keys_dedups_and_sorts() {
        let posts = vec![Item::new(1, &["b", "a"]), Item::new(2, &["b", "c"])];
        assert_eq!(available_keys(&posts), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_available_keys_empty_input() {
        let posts: Vec<Item> = Vec::new();
        assert!(available_keys(&posts).is_empty());
    }
}
