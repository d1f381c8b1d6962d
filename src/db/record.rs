//! Storage representation of a mood entry.
//!
//! Records keep `entry_date` as `YYYY-MM-DD` text and `created_at` as RFC 3339
//! text so the persisted layout reads the same in every backend. All
//! conversions between the domain `MoodEntry` and storage go through
//! [`MoodRecord::encode`] and [`MoodRecord::decode`].

use anyhow::{anyhow, Context};
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::mood::mood_for;
use crate::models::mood_entry::MoodEntry;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MoodRecord {
    pub id: String,
    pub entry_date: String,
    pub mood_score: i32,
    pub emoji: String,
    pub notes: Option<String>,
    pub created_at: String,
}

impl MoodRecord {
    pub fn encode(entry: &MoodEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            entry_date: date_key(entry.entry_date),
            mood_score: entry.mood_score,
            emoji: entry.emoji.clone(),
            notes: entry.notes.clone(),
            created_at: entry.created_at.to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    pub fn decode(self) -> AppResult<MoodEntry> {
        let id = Uuid::parse_str(&self.id)
            .with_context(|| format!("corrupt mood record id {:?}", self.id))?;
        let entry_date = parse_date_key(&self.entry_date)
            .with_context(|| format!("corrupt entry_date {:?} on record {}", self.entry_date, id))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .with_context(|| format!("corrupt created_at {:?} on record {}", self.created_at, id))?
            .with_timezone(&Utc);
        if mood_for(self.mood_score).is_none() {
            return Err(anyhow!("corrupt mood_score {} on record {}", self.mood_score, id).into());
        }

        Ok(MoodEntry {
            id,
            entry_date,
            mood_score: self.mood_score,
            emoji: self.emoji,
            notes: self.notes,
            created_at,
        })
    }
}

/// Key under which an entry for `date` is stored.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_date_key(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
}
