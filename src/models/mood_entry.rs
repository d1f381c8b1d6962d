use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_LIST_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodEntry {
    pub id: Uuid,
    pub entry_date: NaiveDate,
    pub mood_score: i32,
    pub emoji: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateMoodEntryRequest {
    pub entry_date: NaiveDate,
    #[validate(range(min = 1, max = 5, message = "Mood score must be between 1 and 5"))]
    pub mood_score: i32,
    pub notes: Option<String>,
}

/// Partial update. `notes` tracks presence: a missing field leaves the
/// stored notes alone, an explicit `null` clears them.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateMoodEntryRequest {
    #[validate(range(min = 1, max = 5, message = "Mood score must be between 1 and 5"))]
    pub mood_score: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub notes: Option<Option<String>>,
}

impl UpdateMoodEntryRequest {
    pub fn is_empty(&self) -> bool {
        self.mood_score.is_none() && self.notes.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct MoodListQuery {
    pub limit: Option<usize>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
