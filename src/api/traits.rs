use crate::api::error::ApiError;
use crate::api::types::SearchParams;
use crate::models::InsertItem;
use async_trait::async_trait;

/// Common trait for search backends.
/// The view fetches through this seam, so tests can script outcomes
/// without a running API server.
#[async_trait]
pub trait SearchApi: Send + Sync {
    /// Run one search with the given parameters.
    async fn search(&self, params: &SearchParams) -> Result<Vec<InsertItem>, ApiError>;
}
