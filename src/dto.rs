//! Response envelopes that wrap service results for the JSON API.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::mood::MoodOption;

/// Standard success message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// GET /api/moods/options, keyed by score
#[derive(Debug, Serialize)]
pub struct MoodOptionsResponse {
    pub moods: BTreeMap<i32, MoodOption>,
}

impl MoodOptionsResponse {
    pub fn from_table(options: &[MoodOption]) -> Self {
        Self {
            moods: options.iter().map(|m| (m.score, *m)).collect(),
        }
    }
}

/// GET /api/moods/export/csv
#[derive(Debug, Serialize)]
pub struct CsvExportResponse {
    pub csv_data: String,
}
