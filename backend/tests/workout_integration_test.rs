//! Integration tests for workout endpoints

mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

fn push_day() -> Value {
    json!({
        "title": "push",
        "description": "Upper body day",
        "duration_minutes": 60,
        "calories_burned": 200,
        "entries": [
            {
                "exercise_name": "Overhead press",
                "sets": 3,
                "reps": 8,
                "weight": 50.5,
                "order_index": 2
            },
            {
                "exercise_name": "Bench press",
                "sets": 3,
                "reps": 10,
                "weight": 130,
                "notes": "do it",
                "order_index": 1
            }
        ]
    })
}

async fn workout_count(app: &common::TestApp, user_id: i64) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workouts WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(&app.pool)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_login_and_workout_lifecycle() {
    let app = common::TestApp::new().await;

    let username = format!("alice_{}", &uuid::Uuid::new_v4().simple().to_string()[..8]);
    let (status, _) = app
        .post(
            "/users",
            None,
            json!({
                "username": username,
                "email": format!("{}@x.com", username),
                "password": "secret123"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let token = app.login(&username, "secret123").await;
    assert!(!token.is_empty());

    let (status, body) = app.get("/workouts/999999999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "workout not found");

    let (status, body) = app
        .post(
            "/workouts",
            Some(&token),
            json!({
                "title": "bad",
                "duration_minutes": 30,
                "entries": [{
                    "exercise_name": "Squats",
                    "sets": 4,
                    "reps": 8,
                    "duration_seconds": 90,
                    "order_index": 1
                }]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("order_index 1"));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_invalid_entry_persists_nothing() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (status, _) = app
        .post(
            "/workouts",
            Some(&user.token),
            json!({
                "title": "full",
                "duration_minutes": 60,
                "entries": [
                    { "exercise_name": "Plank", "sets": 3, "reps": 3, "order_index": 1 },
                    { "exercise_name": "Squats", "sets": 4, "order_index": 2 }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(workout_count(&app, user.id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_out_of_range_entry_values_are_rejected_before_storage() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let bad_entries = [
        json!({ "exercise_name": "Deadlift", "sets": 1, "reps": 1, "weight": 10000, "order_index": 1 }),
        json!({ "exercise_name": "x".repeat(300), "sets": 3, "reps": 5, "order_index": 1 }),
        json!({ "exercise_name": "Squat", "sets": -3, "reps": -5, "order_index": 1 }),
        json!({ "exercise_name": "Plank", "sets": 1, "duration_seconds": 0, "order_index": 1 }),
    ];

    for entry in bad_entries {
        let (status, body) = app
            .post(
                "/workouts",
                Some(&user.token),
                json!({ "title": "limits", "duration_minutes": 30, "entries": [entry] }),
            )
            .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "unexpected body: {}", body);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    assert_eq!(workout_count(&app, user.id).await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_and_read_back_orders_entries() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (status, created) = app.post("/workouts", Some(&user.token), push_day()).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["workout"]["id"].as_i64().unwrap();
    assert_eq!(created["workout"]["user_id"].as_i64(), Some(user.id));

    // Reads are public
    let (status, body) = app.get(&format!("/workouts/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let entries = body["workout"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["exercise_name"], "Bench press");
    assert_eq!(entries[0]["order_index"], 1);
    assert_eq!(entries[0]["weight"], 130.0);
    assert_eq!(entries[0]["notes"], "do it");
    assert_eq!(entries[1]["exercise_name"], "Overhead press");
    assert_eq!(entries[1]["weight"], 50.5);
    assert!(entries[1]["duration_seconds"].is_null());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_workout_without_entries_has_empty_list() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (status, created) = app
        .post(
            "/workouts",
            Some(&user.token),
            json!({ "title": "walk", "duration_minutes": 20 }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let id = created["workout"]["id"].as_i64().unwrap();
    let (_, body) = app.get(&format!("/workouts/{}", id), None).await;
    assert_eq!(body["workout"]["entries"], json!([]));
    assert_eq!(body["workout"]["description"], "");
    assert_eq!(body["workout"]["calories_burned"], 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_partial_update_keeps_other_fields() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (_, created) = app.post("/workouts", Some(&user.token), push_day()).await;
    let id = created["workout"]["id"].as_i64().unwrap();
    let path = format!("/workouts/{}", id);

    let (status, body) = app
        .put(&path, Some(&user.token), json!({ "title": "heavy push" }))
        .await;
    assert_eq!(status, StatusCode::OK);

    let workout = &body["workout"];
    assert_eq!(workout["title"], "heavy push");
    assert_eq!(workout["description"], "Upper body day");
    assert_eq!(workout["duration_minutes"], 60);
    assert_eq!(workout["calories_burned"], 200);
    assert_eq!(workout["entries"], created["workout"]["entries"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_with_entries_replaces_all() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (_, created) = app.post("/workouts", Some(&user.token), push_day()).await;
    let id = created["workout"]["id"].as_i64().unwrap();
    let path = format!("/workouts/{}", id);

    let (status, body) = app
        .put(
            &path,
            Some(&user.token),
            json!({
                "entries": [
                    { "exercise_name": "Plank", "sets": 3, "duration_seconds": 60, "order_index": 5 }
                ]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let entries = body["workout"]["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["exercise_name"], "Plank");
    assert_eq!(entries[0]["order_index"], 5);

    let (status, body) = app.put(&path, Some(&user.token), json!({ "entries": [] })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workout"]["entries"], json!([]));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_invalid_update_leaves_workout_unchanged() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (_, created) = app.post("/workouts", Some(&user.token), push_day()).await;
    let id = created["workout"]["id"].as_i64().unwrap();
    let path = format!("/workouts/{}", id);

    let (status, _) = app
        .put(
            &path,
            Some(&user.token),
            json!({
                "title": "changed",
                "entries": [{ "exercise_name": "Row", "sets": 3, "order_index": 1 }]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get(&path, None).await;
    assert_eq!(body["workout"]["title"], "push");
    assert_eq!(body["workout"]["entries"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_only_owner_may_modify() {
    let app = common::TestApp::new().await;
    let alice = app.create_user().await;
    let bob = app.create_user().await;

    let (_, created) = app.post("/workouts", Some(&alice.token), push_day()).await;
    let id = created["workout"]["id"].as_i64().unwrap();
    let path = format!("/workouts/{}", id);

    let (status, _) = app.put(&path, Some(&bob.token), json!({ "title": "mine" })).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.delete(&path, Some(&bob.token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.put(&path, Some(&alice.token), json!({ "title": "still mine" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete(&path, Some(&alice.token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get(&path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_modify_missing_workout_returns_404() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (status, _) = app.delete("/workouts/999999999", Some(&user.token)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .put("/workouts/999999999", Some(&user.token), json!({ "title": "x" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_cascades_entries() {
    let app = common::TestApp::new().await;
    let user = app.create_user().await;

    let (_, created) = app.post("/workouts", Some(&user.token), push_day()).await;
    let id = created["workout"]["id"].as_i64().unwrap();

    let (status, _) = app.delete(&format!("/workouts/{}", id), Some(&user.token)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM workout_entries WHERE workout_id = $1")
            .bind(id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}
