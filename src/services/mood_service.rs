//! Mood entry use-cases.
//!
//! # Invariants
//! - At most one entry per `entry_date`. Create checks first and the store
//!   rejects a duplicate insert as well.
//! - `emoji` is always derived from `mood_score` through the score table.
//! - `id`, `entry_date` and `created_at` never change after creation.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::db::record::{date_key, MoodRecord};
use crate::db::store::{DateOrder, MoodStore};
use crate::error::{AppError, AppResult};
use crate::models::mood::{mood_for, MoodOption, MOOD_OPTIONS};
use crate::models::mood_entry::{MoodEntry, UpdateMoodEntryRequest};
use crate::models::stats::{MoodSummary, TrendPoint};

pub const CSV_HEADER: &str = "Date,Mood Score,Emoji,Mood Label,Notes";
const RECENT_TREND_LEN: usize = 7;

#[derive(Clone)]
pub struct MoodEntryService {
    store: Arc<dyn MoodStore>,
}

impl MoodEntryService {
    pub fn new(store: Arc<dyn MoodStore>) -> Self {
        Self { store }
    }

    pub fn score_options(&self) -> &'static [MoodOption] {
        &MOOD_OPTIONS
    }

    pub async fn create(
        &self,
        entry_date: NaiveDate,
        mood_score: i32,
        notes: Option<String>,
    ) -> AppResult<MoodEntry> {
        let mood = validate_score(mood_score)?;
        let key = date_key(entry_date);

        if self.store.find_by_date(&key).await?.is_some() {
            return Err(AppError::AlreadyExists(
                "Mood entry already exists for this date".into(),
            ));
        }

        let entry = MoodEntry {
            id: Uuid::new_v4(),
            entry_date,
            mood_score,
            emoji: mood.emoji.to_string(),
            notes,
            created_at: Utc::now(),
        };
        let record = MoodRecord::encode(&entry);
        self.store.insert(record.clone()).await?;

        tracing::info!(entry_date = %key, mood_score, "Mood entry created");
        // Hand back what was stored so later reads see the same created_at.
        record.decode()
    }

    /// Most recent entries first.
    pub async fn list(&self, limit: usize) -> AppResult<Vec<MoodEntry>> {
        self.store
            .list(DateOrder::Descending, Some(limit))
            .await?
            .into_iter()
            .map(MoodRecord::decode)
            .collect()
    }

    pub async fn get_by_date(&self, entry_date: NaiveDate) -> AppResult<MoodEntry> {
        self.store
            .find_by_date(&date_key(entry_date))
            .await?
            .ok_or(AppError::NotFound("Mood entry not found for this date".into()))?
            .decode()
    }

    pub async fn update(
        &self,
        entry_date: NaiveDate,
        patch: UpdateMoodEntryRequest,
    ) -> AppResult<MoodEntry> {
        let mut entry = self
            .store
            .find_by_date(&date_key(entry_date))
            .await?
            .ok_or(AppError::NotFound("Mood entry not found".into()))?
            .decode()?;

        if patch.is_empty() {
            return Ok(entry);
        }

        if let Some(score) = patch.mood_score {
            let mood = validate_score(score)?;
            entry.mood_score = score;
            entry.emoji = mood.emoji.to_string();
        }
        if let Some(notes) = patch.notes {
            entry.notes = notes;
        }

        let stored = self.store.replace(MoodRecord::encode(&entry)).await?.decode()?;
        tracing::info!(entry_date = %stored.entry_date, mood_score = stored.mood_score, "Mood entry updated");
        Ok(stored)
    }

    pub async fn delete(&self, entry_date: NaiveDate) -> AppResult<()> {
        if !self.store.delete(&date_key(entry_date)).await? {
            return Err(AppError::NotFound("Mood entry not found".into()));
        }
        tracing::info!(entry_date = %entry_date, "Mood entry deleted");
        Ok(())
    }

    pub async fn summary(&self) -> AppResult<MoodSummary> {
        let entries = self.all(DateOrder::Ascending).await?;
        Ok(summarize(&entries))
    }

    pub async fn export_csv(&self) -> AppResult<String> {
        let entries = self.all(DateOrder::Ascending).await?;
        Ok(render_csv(&entries))
    }

    async fn all(&self, order: DateOrder) -> AppResult<Vec<MoodEntry>> {
        self.store
            .list(order, None)
            .await?
            .into_iter()
            .map(MoodRecord::decode)
            .collect()
    }
}

fn validate_score(score: i32) -> AppResult<&'static MoodOption> {
    mood_for(score)
        .ok_or_else(|| AppError::Validation("Mood score must be between 1 and 5".into()))
}

/// Aggregate statistics over `entries`, which may come in any order.
pub fn summarize(entries: &[MoodEntry]) -> MoodSummary {
    if entries.is_empty() {
        return MoodSummary {
            total_entries: 0,
            average_mood: 0.0,
            mood_distribution: BTreeMap::new(),
            recent_trend: Vec::new(),
        };
    }

    let total: i64 = entries.iter().map(|e| i64::from(e.mood_score)).sum();
    let average = total as f64 / entries.len() as f64;

    let mut mood_distribution = BTreeMap::new();
    for entry in entries {
        if let Some(mood) = mood_for(entry.mood_score) {
            *mood_distribution.entry(mood.display()).or_insert(0) += 1;
        }
    }

    // Dates are unique, so sorting by date alone is a total order.
    let mut recent: Vec<&MoodEntry> = entries.iter().collect();
    recent.sort_by(|a, b| b.entry_date.cmp(&a.entry_date));
    recent.truncate(RECENT_TREND_LEN);
    let recent_trend = recent
        .into_iter()
        .rev()
        .map(|e| TrendPoint {
            date: e.entry_date,
            mood_score: e.mood_score,
            emoji: e.emoji.clone(),
        })
        .collect();

    MoodSummary {
        total_entries: entries.len(),
        average_mood: (average * 100.0).round_ties_even() / 100.0,
        mood_distribution,
        recent_trend,
    }
}

/// CSV export of `entries` in the order given. Without entries the output is
/// the header plus a newline; otherwise lines are joined without a trailing
/// newline.
pub fn render_csv(entries: &[MoodEntry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", CSV_HEADER);
    }

    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_HEADER.to_string());
    for entry in entries {
        let label = mood_for(entry.mood_score).map_or("", |m| m.label);
        lines.push(format!(
            "{},{},{},{},{}",
            date_key(entry.entry_date),
            entry.mood_score,
            quote(&entry.emoji),
            quote(label),
            quote(entry.notes.as_deref().unwrap_or("")),
        ));
    }
    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
