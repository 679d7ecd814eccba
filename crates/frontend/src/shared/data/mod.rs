//! HTTP content accessor over the static `content/` collections.

use crate::shared::api_utils::content_url;
use contracts::domain::common::ContentRecord;
use contracts::shared::content::{ContentError, Sort};
use serde::de::DeserializeOwned;

/// Read-only accessor for the published content collections.
///
/// Each call fetches the complete collection and returns it ordered; there
/// is no pagination and no caching.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentClient;

impl ContentClient {
    pub fn new() -> Self {
        Self
    }

    /// Fetch a complete collection, ordered by `sort`.
    pub async fn list<T>(&self, sort: Sort) -> Result<Vec<T>, ContentError>
    where
        T: ContentRecord + DeserializeOwned,
    {
        let url = content_url(T::collection_name());
        log::debug!("loading {} ordered by {}", T::collection_name(), sort);

        let response = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ContentError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(ContentError::Status(response.status()));
        }

        let mut records: Vec<T> = response
            .json()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))?;
        sort.apply(&mut records);
        Ok(records)
    }

    /// Fetch a collection and keep only records matching `predicate`.
    pub async fn filter<T, P>(&self, predicate: P, sort: Sort) -> Result<Vec<T>, ContentError>
    where
        T: ContentRecord + DeserializeOwned,
        P: Fn(&T) -> bool,
    {
        let mut records = self.list(sort).await?;
        records.retain(|record| predicate(record));
        Ok(records)
    }
}
