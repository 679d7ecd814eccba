use chrono::{DateTime, Utc};

/// Typed identifier for a content record.
pub trait RecordId: Sized {
    /// Convert to string representation
    fn as_string(&self) -> String;

    /// Parse from string representation
    fn from_string(s: &str) -> Result<Self, String>;
}

/// A row served by the content accessor.
///
/// Records are read-only on the client: the accessor owns their creation
/// and ordering, pages only derive views from them.
pub trait ContentRecord {
    type Id: RecordId;

    fn id(&self) -> &Self::Id;

    fn title(&self) -> &str;

    fn created_date(&self) -> DateTime<Utc>;

    /// Collection the record is served from, e.g. "projects".
    fn collection_name() -> &'static str;
}
