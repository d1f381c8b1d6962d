use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::record::MoodRecord;
use crate::db::store::{DateOrder, MoodStore};
use crate::error::{AppError, AppResult};

/// Postgres-backed store. `mood_entries.entry_date` carries a UNIQUE
/// constraint, so concurrent creates for one date cannot both land.
pub struct PgMoodStore {
    pool: PgPool,
}

impl PgMoodStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MoodStore for PgMoodStore {
    async fn find_by_date(&self, date_key: &str) -> AppResult<Option<MoodRecord>> {
        let record = sqlx::query_as::<_, MoodRecord>(
            "SELECT * FROM mood_entries WHERE entry_date = $1",
        )
        .bind(date_key)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    async fn insert(&self, record: MoodRecord) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO mood_entries (id, entry_date, mood_score, emoji, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&record.id)
        .bind(&record.entry_date)
        .bind(record.mood_score)
        .bind(&record.emoji)
        .bind(&record.notes)
        .bind(&record.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Err(
                AppError::AlreadyExists("Mood entry already exists for this date".into()),
            ),
            Err(e) => Err(e.into()),
        }
    }

    async fn replace(&self, record: MoodRecord) -> AppResult<MoodRecord> {
        let updated = sqlx::query_as::<_, MoodRecord>(
            r#"
            UPDATE mood_entries SET
                mood_score = $2,
                emoji = $3,
                notes = $4
            WHERE entry_date = $1
            RETURNING *
            "#,
        )
        .bind(&record.entry_date)
        .bind(record.mood_score)
        .bind(&record.emoji)
        .bind(&record.notes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound("Mood entry not found".into()))?;

        Ok(updated)
    }

    async fn delete(&self, date_key: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM mood_entries WHERE entry_date = $1")
            .bind(date_key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, order: DateOrder, limit: Option<usize>) -> AppResult<Vec<MoodRecord>> {
        let sql = match order {
            DateOrder::Ascending => "SELECT * FROM mood_entries ORDER BY entry_date ASC LIMIT $1",
            DateOrder::Descending => "SELECT * FROM mood_entries ORDER BY entry_date DESC LIMIT $1",
        };
        // LIMIT NULL means no limit in Postgres.
        let limit = limit.map(|n| i64::try_from(n).unwrap_or(i64::MAX));

        let records = sqlx::query_as::<_, MoodRecord>(sql)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
