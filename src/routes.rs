use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::handlers::{health, moods};
use crate::AppState;

pub fn router(state: AppState) -> Router {
    let mood_routes = Router::new()
        .route("/api/", get(moods::api_root))
        .route("/api/moods/options", get(moods::get_mood_options))
        .route(
            "/api/moods",
            post(moods::create_mood_entry).get(moods::list_mood_entries),
        )
        .route("/api/moods/stats/summary", get(moods::get_mood_summary))
        .route("/api/moods/export/csv", get(moods::export_moods_csv))
        .route(
            "/api/moods/:entry_date",
            get(moods::get_mood_by_date)
                .put(moods::update_mood_entry)
                .delete(moods::delete_mood_entry),
        );

    Router::new()
        .route("/health", get(health::health_check))
        .route("/readyz", get(health::readyz))
        .merge(mood_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::db::MemoryMoodStore;

    fn app() -> Router {
        router(AppState::new(Arc::new(MemoryMoodStore::new())))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn create(app: &Router, date: &str, score: i32, notes: Option<&str>) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/api/moods",
            Some(json!({ "entry_date": date, "mood_score": score, "notes": notes })),
        )
        .await
    }

    // ── meta ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_health_and_readyz() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = send(&app, Method::GET, "/readyz", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"]["store"], "ok");
    }

    #[tokio::test]
    async fn test_api_root_and_options() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/", None).await;
        assert_eq!(body["message"], "Mood Tracker API");

        let (status, body) = send(&app, Method::GET, "/api/moods/options", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["moods"]["3"], json!({ "emoji": "😐", "label": "Neutral" }));
    }

    // ── create ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_create_returns_full_entry() {
        let app = app();
        let (status, body) = create(&app, "2026-02-10", 4, Some("good day")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["entry_date"], "2026-02-10");
        assert_eq!(body["mood_score"], 4);
        assert_eq!(body["emoji"], "🙂");
        assert_eq!(body["notes"], "good day");
        assert!(body["id"].as_str().is_some());
        assert!(body["created_at"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_create_duplicate_is_bad_request() {
        let app = app();
        create(&app, "2026-02-10", 4, None).await;

        let (status, body) = create(&app, "2026-02-10", 1, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "Mood entry already exists for this date");

        let (_, stored) = send(&app, Method::GET, "/api/moods/2026-02-10", None).await;
        assert_eq!(stored["mood_score"], 4);
    }

    #[tokio::test]
    async fn test_create_invalid_score_is_bad_request() {
        let app = app();
        for score in [0, 6] {
            let (status, body) = create(&app, "2026-02-10", score, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["error"]["code"], 400);
        }
    }

    #[tokio::test]
    async fn test_create_malformed_date_is_bad_request() {
        let app = app();
        let (status, _) = create(&app, "10/02/2026", 3, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // ── read ────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn test_list_honors_limit_and_order() {
        let app = app();
        for date in ["2026-02-01", "2026-02-03", "2026-02-02"] {
            create(&app, date, 3, None).await;
        }

        let (status, body) = send(&app, Method::GET, "/api/moods?limit=2", None).await;
        assert_eq!(status, StatusCode::OK);
        let dates: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["entry_date"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(dates, vec!["2026-02-03", "2026-02-02"]);

        let (_, body) = send(&app, Method::GET, "/api/moods", None).await;
        assert_eq!(body.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_list_negative_limit_is_bad_request() {
        let (status, _) = send(&app(), Method::GET, "/api/moods?limit=-1", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_and_malformed_dates() {
        let app = app();
        let (status, body) = send(&app, Method::GET, "/api/moods/2026-02-10", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], 404);

        let (status, _) = send(&app, Method::GET, "/api/moods/not-a-date", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // ── update / delete ─────────────────────────────────────────────────

    #[tokio::test]
    async fn test_update_partial_fields() {
        let app = app();
        create(&app, "2026-02-10", 2, Some("meh")).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/moods/2026-02-10",
            Some(json!({ "mood_score": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["emoji"], "😄");
        assert_eq!(body["notes"], "meh");

        let (_, body) = send(
            &app,
            Method::PUT,
            "/api/moods/2026-02-10",
            Some(json!({ "notes": "much better" })),
        )
        .await;
        assert_eq!(body["mood_score"], 5);
        assert_eq!(body["notes"], "much better");
    }

    #[tokio::test]
    async fn test_update_unknown_and_invalid() {
        let app = app();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/moods/2026-02-10",
            Some(json!({ "mood_score": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        create(&app, "2026-02-10", 2, None).await;
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/moods/2026-02-10",
            Some(json!({ "mood_score": 9 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let app = app();
        create(&app, "2026-02-10", 2, None).await;

        let (status, body) = send(&app, Method::DELETE, "/api/moods/2026-02-10", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Mood entry deleted successfully");

        let (status, _) = send(&app, Method::GET, "/api/moods/2026-02-10", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) = send(&app, Method::DELETE, "/api/moods/2026-02-10", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    // ── stats / export ──────────────────────────────────────────────────

    #[tokio::test]
    async fn test_summary_route() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/moods/stats/summary", None).await;
        assert_eq!(
            body,
            json!({
                "total_entries": 0,
                "average_mood": 0.0,
                "mood_distribution": {},
                "recent_trend": [],
            })
        );

        create(&app, "2026-02-01", 4, None).await;
        create(&app, "2026-02-02", 2, None).await;
        create(&app, "2026-02-03", 5, None).await;

        let (status, body) = send(&app, Method::GET, "/api/moods/stats/summary", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total_entries"], 3);
        assert_eq!(body["average_mood"], 3.67);
        assert_eq!(
            body["mood_distribution"],
            json!({ "🙂 Happy": 1, "😕 Sad": 1, "😄 Very Happy": 1 })
        );
        assert_eq!(
            body["recent_trend"][0],
            json!({ "date": "2026-02-01", "mood_score": 4, "emoji": "🙂" })
        );
    }

    #[tokio::test]
    async fn test_export_csv_route() {
        let app = app();
        let (_, body) = send(&app, Method::GET, "/api/moods/export/csv", None).await;
        assert_eq!(body["csv_data"], "Date,Mood Score,Emoji,Mood Label,Notes\n");

        create(&app, "2026-02-01", 3, Some(r#"hello "world""#)).await;
        let (status, body) = send(&app, Method::GET, "/api/moods/export/csv", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["csv_data"],
            "Date,Mood Score,Emoji,Mood Label,Notes\n2026-02-01,3,\"😐\",\"Neutral\",\"hello \"\"world\"\"\""
        );
    }
}
