//! Lifecycle of a page's one-shot data load: idle -> loading -> loaded | failed.

use contracts::shared::content::ContentError;

/// State a list page moves through while its collection loads.
///
/// On `Failed` the visible collection is empty; the page renders the error
/// panel instead of silently showing nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> LoadState<T> {
    /// Terminal state for an accessor result.
    pub fn from_result(result: Result<Vec<T>, ContentError>) -> Self {
        match result {
            Ok(records) => Self::Loaded(records),
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// True until the load has resolved either way.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Idle | Self::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T: Clone> LoadState<T> {
    /// The loaded collection; empty before `Loaded` and empty on `Failed`.
    pub fn records(&self) -> Vec<T> {
        match self {
            Self::Loaded(records) => records.clone(),
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_empty_until_loaded() {
        assert!(LoadState::<u32>::Idle.records().is_empty());
        assert!(LoadState::<u32>::Loading.records().is_empty());
        assert_eq!(LoadState::Loaded(vec![1, 2]).records(), vec![1, 2]);
    }

    #[test]
    fn test_failure_substitutes_empty_collection() {
        let state = LoadState::<u32>::from_result(Err(ContentError::Status(500)));
        assert_eq!(state, LoadState::Failed("unexpected status 500".to_string()));
        assert!(state.records().is_empty());
        assert_eq!(state.error(), Some("unexpected status 500"));
    }

    #[test]
    fn test_success_carries_full_collection() {
        let state = LoadState::from_result(Ok(vec![7, 8, 9]));
        assert!(!state.is_loading());
        assert!(state.error().is_none());
        assert_eq!(state.records(), vec![7, 8, 9]);
    }

    #[test]
    fn test_loading_flag() {
        assert!(LoadState::<u32>::Idle.is_loading());
        assert!(LoadState::<u32>::Loading.is_loading());
        assert!(!LoadState::<u32>::Failed("x".to_string()).is_loading());
    }
}
