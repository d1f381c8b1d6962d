use axum::{
    extract::{Path, State},
    Json,
};
use chrono::NaiveDate;
use validator::Validate;

use crate::db::record::parse_date_key;
use crate::dto::{CsvExportResponse, MessageResponse, MoodOptionsResponse};
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::models::mood_entry::{
    CreateMoodEntryRequest, MoodEntry, MoodListQuery, UpdateMoodEntryRequest, DEFAULT_LIST_LIMIT,
};
use crate::models::stats::MoodSummary;
use crate::AppState;

pub async fn api_root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Mood Tracker API".into(),
    })
}

pub async fn get_mood_options(State(state): State<AppState>) -> Json<MoodOptionsResponse> {
    Json(MoodOptionsResponse::from_table(state.moods.score_options()))
}

pub async fn create_mood_entry(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateMoodEntryRequest>,
) -> AppResult<Json<MoodEntry>> {
    body.validate()?;

    let entry = state
        .moods
        .create(body.entry_date, body.mood_score, body.notes)
        .await?;

    Ok(Json(entry))
}

pub async fn list_mood_entries(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MoodListQuery>,
) -> AppResult<Json<Vec<MoodEntry>>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIST_LIMIT);
    let entries = state.moods.list(limit).await?;
    Ok(Json(entries))
}

pub async fn get_mood_by_date(
    State(state): State<AppState>,
    Path(entry_date): Path<String>,
) -> AppResult<Json<MoodEntry>> {
    let entry = state.moods.get_by_date(parse_path_date(&entry_date)?).await?;
    Ok(Json(entry))
}

pub async fn update_mood_entry(
    State(state): State<AppState>,
    Path(entry_date): Path<String>,
    AppJson(body): AppJson<UpdateMoodEntryRequest>,
) -> AppResult<Json<MoodEntry>> {
    let entry_date = parse_path_date(&entry_date)?;
    body.validate()?;

    let entry = state.moods.update(entry_date, body).await?;
    Ok(Json(entry))
}

pub async fn delete_mood_entry(
    State(state): State<AppState>,
    Path(entry_date): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.moods.delete(parse_path_date(&entry_date)?).await?;

    Ok(Json(MessageResponse {
        message: "Mood entry deleted successfully".into(),
    }))
}

pub async fn get_mood_summary(State(state): State<AppState>) -> AppResult<Json<MoodSummary>> {
    Ok(Json(state.moods.summary().await?))
}

pub async fn export_moods_csv(State(state): State<AppState>) -> AppResult<Json<CsvExportResponse>> {
    let csv_data = state.moods.export_csv().await?;
    Ok(Json(CsvExportResponse { csv_data }))
}

fn parse_path_date(raw: &str) -> AppResult<NaiveDate> {
    parse_date_key(raw).map_err(|_| {
        AppError::Validation(format!("Invalid date {:?}, expected YYYY-MM-DD", raw))
    })
}
