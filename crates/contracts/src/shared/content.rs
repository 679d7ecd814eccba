//! Contract between pages and the content accessor.
//!
//! The accessor returns a complete, already-ordered collection per call; it
//! does no pagination or caching. Failures are values, never panics.

use crate::domain::common::ContentRecord;
use std::fmt;
use thiserror::Error;

/// Failure raised by a content accessor call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("request failed: {0}")]
    Network(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed content: {0}")]
    Decode(String),
}

/// Field a collection can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedDate,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatedDate => "created_date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Requested ordering of an accessor call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Sort {
    pub fn created_descending() -> Self {
        Self {
            field: SortField::CreatedDate,
            direction: SortDirection::Descending,
        }
    }

    pub fn created_ascending() -> Self {
        Self {
            field: SortField::CreatedDate,
            direction: SortDirection::Ascending,
        }
    }

    /// Order `records` in place.
    pub fn apply<T: ContentRecord>(&self, records: &mut [T]) {
        records.sort_by(|a, b| {
            let ord = match self.field {
                SortField::CreatedDate => a.created_date().cmp(&b.created_date()),
            };
            match self.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
}

/// Renders as the accessor's order argument, "-created_date" style.
impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.direction {
            SortDirection::Ascending => write!(f, "{}", self.field.as_str()),
            SortDirection::Descending => write!(f, "-{}", self.field.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::RecordId;
    use chrono::{DateTime, TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct StubId(String);

    impl RecordId for StubId {
        fn as_string(&self) -> String {
            self.0.clone()
        }

        fn from_string(s: &str) -> Result<Self, String> {
            Ok(Self(s.to_string()))
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Stub {
        id: StubId,
        created: DateTime<Utc>,
    }

    impl Stub {
        fn new(id: &str, day: u32) -> Self {
            Self {
                id: StubId(id.to_string()),
                created: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
            }
        }
    }

    impl ContentRecord for Stub {
        type Id = StubId;

        fn id(&self) -> &StubId {
            &self.id
        }

        fn title(&self) -> &str {
            &self.id.0
        }

        fn created_date(&self) -> DateTime<Utc> {
            self.created
        }

        fn collection_name() -> &'static str {
            "stubs"
        }
    }

    #[test]
    fn test_sort_descending_newest_first() {
        let mut records = vec![Stub::new("a", 1), Stub::new("b", 3), Stub::new("c", 2)];
        Sort::created_descending().apply(&mut records);
        let ids: Vec<&str> = records.iter().map(|r| r.id.0.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_sort_ascending_oldest_first() {
        let mut records = vec![Stub::new("a", 2), Stub::new("b", 1)];
        Sort::created_ascending().apply(&mut records);
        let ids: Vec<&str> = records.iter().map(|r| r.id.0.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_order_argument_form() {
        assert_eq!(Sort::created_descending().to_string(), "-created_date");
        assert_eq!(Sort::created_ascending().to_string(), "created_date");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContentError::Status(404).to_string(),
            "unexpected status 404"
        );
    }
}
