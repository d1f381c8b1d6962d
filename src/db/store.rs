use async_trait::async_trait;

use crate::db::record::MoodRecord;
use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    Ascending,
    Descending,
}

/// Key-based document store for mood records, keyed by `entry_date`.
#[async_trait]
pub trait MoodStore: Send + Sync {
    async fn find_by_date(&self, date_key: &str) -> AppResult<Option<MoodRecord>>;

    /// Fails with `AlreadyExists` when a record for the same date is present.
    async fn insert(&self, record: MoodRecord) -> AppResult<()>;

    /// Overwrite the record stored under `record.entry_date`.
    async fn replace(&self, record: MoodRecord) -> AppResult<MoodRecord>;

    /// Returns `true` when a record was removed.
    async fn delete(&self, date_key: &str) -> AppResult<bool>;

    async fn list(&self, order: DateOrder, limit: Option<usize>) -> AppResult<Vec<MoodRecord>>;

    async fn ping(&self) -> AppResult<()>;

    async fn close(&self);
}
