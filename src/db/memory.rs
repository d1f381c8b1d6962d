use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::record::MoodRecord;
use crate::db::store::{DateOrder, MoodStore};
use crate::error::{AppError, AppResult};

/// In-process store used when no database is configured, and by tests.
/// Records are keyed by their `YYYY-MM-DD` date string, which sorts
/// chronologically.
#[derive(Default)]
pub struct MemoryMoodStore {
    records: RwLock<BTreeMap<String, MoodRecord>>,
}

impl MemoryMoodStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MoodStore for MemoryMoodStore {
    async fn find_by_date(&self, date_key: &str) -> AppResult<Option<MoodRecord>> {
        Ok(self.records.read().await.get(date_key).cloned())
    }

    async fn insert(&self, record: MoodRecord) -> AppResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.entry_date) {
            return Err(AppError::AlreadyExists(
                "Mood entry already exists for this date".into(),
            ));
        }
        records.insert(record.entry_date.clone(), record);
        Ok(())
    }

    async fn replace(&self, record: MoodRecord) -> AppResult<MoodRecord> {
        let mut records = self.records.write().await;
        let slot = records
            .get_mut(&record.entry_date)
            .ok_or(AppError::NotFound("Mood entry not found".into()))?;
        slot.mood_score = record.mood_score;
        slot.emoji = record.emoji;
        slot.notes = record.notes;
        Ok(slot.clone())
    }

    async fn delete(&self, date_key: &str) -> AppResult<bool> {
        Ok(self.records.write().await.remove(date_key).is_some())
    }

    async fn list(&self, order: DateOrder, limit: Option<usize>) -> AppResult<Vec<MoodRecord>> {
        let records = self.records.read().await;
        let limit = limit.unwrap_or(usize::MAX);
        let listed: Vec<MoodRecord> = match order {
            DateOrder::Ascending => records.values().take(limit).cloned().collect(),
            DateOrder::Descending => records.values().rev().take(limit).cloned().collect(),
        };
        Ok(listed)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn close(&self) {}
}
