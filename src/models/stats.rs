use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodSummary {
    pub total_entries: usize,
    pub average_mood: f64,
    pub mood_distribution: BTreeMap<String, usize>,
    pub recent_trend: Vec<TrendPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mood_score: i32,
    pub emoji: String,
}
