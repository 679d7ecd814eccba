use crate::domain::common::{ContentRecord, RecordId};
use crate::shared::filter::Filterable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier of a blog post
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlogPostId(pub Uuid);

impl BlogPostId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl RecordId for BlogPostId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(BlogPostId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// An article teaser on the blog page.
///
/// Only `published` posts reach the page; the accessor filters on that flag
/// before the records become filter input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: BlogPostId,
    pub title: String,

    #[serde(default)]
    pub excerpt: Option<String>,

    #[serde(default)]
    pub cover_image: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub published: bool,

    /// Estimated reading time in minutes
    #[serde(default)]
    pub reading_time: Option<u32>,

    pub created_date: DateTime<Utc>,
}

impl ContentRecord for BlogPost {
    type Id = BlogPostId;

    fn id(&self) -> &BlogPostId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    fn collection_name() -> &'static str {
        "blog_posts"
    }
}

impl Filterable for BlogPost {
    fn filter_values(&self) -> Vec<String> {
        self.tags.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_with_optional_fields_missing() {
        let json = r#"{
            "id": "0d7c7e1a-9c2f-4b7e-8a3f-1d2e3c4b5a69",
            "title": "Why Rust on the Frontend",
            "created_date": "2024-06-01T09:30:00Z"
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.title, "Why Rust on the Frontend");
        assert!(!post.published);
        assert!(post.tags.is_empty());
        assert!(post.reading_time.is_none());
    }

    #[test]
    fn test_filter_values_are_tags() {
        let json = r#"{
            "id": "0d7c7e1a-9c2f-4b7e-8a3f-1d2e3c4b5a69",
            "title": "Why Rust on the Frontend",
            "tags": ["rust", "wasm"],
            "published": true,
            "created_date": "2024-06-01T09:30:00Z"
        }"#;
        let post: BlogPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.filter_values(), vec!["rust", "wasm"]);
    }
}
