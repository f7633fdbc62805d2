use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

use activity_recommender::{
    routes::{create_router, AppState},
    services::Recommender,
};

fn create_test_server() -> TestServer {
    let app = create_router(AppState::default());
    TestServer::new(app).unwrap()
}

fn sample_activities() -> Value {
    json!([
        { "_id": "1", "title": "Yoga Session", "category": "wellness", "popularity": 8, "duration": 60, "slots": 15 },
        { "_id": "2", "title": "Basketball Game", "category": "sports", "popularity": 12, "duration": 90, "slots": 20 },
        { "_id": "3", "title": "Art Workshop", "category": "art", "popularity": 6, "duration": 120, "slots": 10 },
        { "_id": "4", "title": "Tech Talk", "category": "tech", "popularity": 15, "duration": 45, "slots": 25 }
    ])
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "recommendation-api");
}

#[tokio::test]
async fn test_recommend_ranks_top_three() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({
            "booked_ids": [],
            "all_activities": sample_activities(),
            "activity_history": ["wellness", "sports"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body["recommendations"],
        json!(["Yoga Session", "Basketball Game", "Tech Talk"])
    );
    assert_eq!(body["debug_info"]["total_activities"], 4);
    assert_eq!(body["debug_info"]["unbooked_activities"], 4);
    assert_eq!(body["debug_info"]["favorite_category"], "wellness");
    assert_eq!(body["debug_info"]["top_scores"], json!([90, 70, 70]));
}

#[tokio::test]
async fn test_recommend_perfect_score() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({
            "booked_ids": [],
            "all_activities": [
                { "_id": "1", "title": "Yoga", "category": "fitness", "popularity": 10, "duration": 60, "slots": 8 }
            ],
            "activity_history": ["fitness", "fitness", "art"]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"], json!(["Yoga"]));
    assert_eq!(body["debug_info"]["favorite_category"], "fitness");
    assert_eq!(body["debug_info"]["top_scores"], json!([100]));
}

#[tokio::test]
async fn test_recommend_with_no_activities() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({ "booked_ids": ["1"], "activity_history": [] }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"], json!([]));
    assert_eq!(body["debug_info"]["favorite_category"], Value::Null);
}

#[tokio::test]
async fn test_recommend_excludes_oid_bookings() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({
            "booked_ids": ["abc123"],
            "all_activities": [
                { "_id": { "$oid": "abc123" }, "title": "Booked", "popularity": 20 },
                { "_id": { "$oid": "def456" }, "title": "Open" }
            ]
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"], json!(["Open"]));
    assert_eq!(body["debug_info"]["unbooked_activities"], 1);
}

#[tokio::test]
async fn test_recommend_falls_back_when_everything_is_booked() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({
            "booked_ids": ["1", "2", "3", "4"],
            "all_activities": sample_activities()
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    assert_eq!(body["debug_info"]["unbooked_activities"], 0);
}

#[tokio::test]
async fn test_configured_limit_is_respected() {
    let app = create_router(AppState::new(Recommender::new(1)));
    let server = TestServer::new(app).unwrap();

    let response = server
        .post("/recommend")
        .json(&json!({ "all_activities": sample_activities() }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommendations"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_missing_title_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({
            "all_activities": [
                { "_id": "1", "title": "Yoga" },
                { "_id": "2", "category": "art" }
            ]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Missing field");
    let details = body["details"].as_str().unwrap();
    assert!(details.contains("index 1"));
    assert!(details.contains("title"));
}

#[tokio::test]
async fn test_malformed_popularity_is_rejected() {
    let server = create_test_server();

    let response = server
        .post("/recommend")
        .json(&json!({
            "all_activities": [{ "_id": "1", "title": "Yoga", "popularity": "lots" }]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Malformed activity");
    assert!(body["details"].as_str().unwrap().contains("popularity"));
}

#[tokio::test]
async fn test_each_malformed_field_is_named() {
    let server = create_test_server();

    let cases = [
        (json!({ "_id": "1", "title": 42 }), "title"),
        (json!({ "_id": "1", "title": "Yoga", "category": { "name": "fitness" } }), "category"),
        (json!({ "_id": "1", "title": "Yoga", "popularity": -1 }), "popularity"),
        (json!({ "_id": "1", "title": "Yoga", "duration": "an hour" }), "duration"),
        (json!({ "_id": "1", "title": "Yoga", "slots": 2.5 }), "slots"),
        (json!({ "_id": ["1"], "title": "Yoga" }), "_id"),
        (json!({ "_id": { "id": "1" }, "title": "Yoga" }), "_id"),
    ];

    for (activity, field) in cases {
        let response = server
            .post("/recommend")
            .json(&json!({ "all_activities": [{ "_id": "0", "title": "Chess" }, activity] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Malformed activity", "field {}", field);
        let details = body["details"].as_str().unwrap();
        assert!(details.contains("index 1"), "details: {}", details);
        assert!(details.contains(&format!("`{}`", field)), "details: {}", details);
    }
}

#[tokio::test]
async fn test_empty_body_is_rejected() {
    let server = create_test_server();

    let response = server.post("/recommend").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "No data provided");
}

#[tokio::test]
async fn test_non_object_body_is_rejected() {
    let server = create_test_server();

    let response = server.post("/recommend").json(&json!(["Yoga"])).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid request");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server();
    let id = "3f2b6c1e-8a4d-4f7e-9c2a-1b5d6e7f8a9b";

    let response = server
        .get("/health")
        .add_header(
            axum::http::HeaderName::from_static("x-request-id"),
            axum::http::HeaderValue::from_static(id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), id);
}
