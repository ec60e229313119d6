//! Practice API tests.
//!
//! These tests run against an in-memory SQLite database.

mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use asma_core::catalog;
use common::fixtures;
use common::TestContext;

fn unlocked_ids(achievements: &[Value]) -> Vec<String> {
    achievements
        .iter()
        .filter(|a| a["unlocked"] == true)
        .map(|a| a["id"].as_str().unwrap().to_string())
        .collect()
}

/// Test an exact first attempt masters the item and unlocks achievements.
#[tokio::test]
async fn test_record_exact_attempt() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/practice/attempts")
        .json(&fixtures::attempt_request(0, fixtures::simple_text(0)))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();

    assert_eq!(body["attempt"]["nameIndex"], 0);
    assert_eq!(body["attempt"]["target"], catalog::get(0).unwrap().canonical_text);
    assert_eq!(body["attempt"]["accuracy"], 100);
    assert_eq!(body["attempt"]["level"], "beginner");
    assert_eq!(body["feedback"], "excellent");
    assert_eq!(body["message"], "Excellent pronunciation!");
    assert_eq!(body["newly_mastered"], true);
    assert_eq!(
        body["unlocked"],
        json!(["first_attempt", "first_master", "perfect_score"])
    );
    assert_eq!(body["progress"]["mastered"], 1);
    assert_eq!(body["progress"]["percentage"], 1);
}

/// Test a poor attempt is recorded without mastery.
#[tokio::test]
async fn test_record_poor_attempt() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/practice/attempts")
        .json(&fixtures::attempt_request(1, "xyz"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["attempt"]["accuracy"], 0);
    assert_eq!(body["feedback"], "needs_practice");
    assert_eq!(body["newly_mastered"], false);
    assert_eq!(body["unlocked"], json!(["first_attempt"]));
    assert_eq!(body["progress"]["mastered"], 0);
}

/// Test an out-of-range index is rejected and nothing is recorded.
#[tokio::test]
async fn test_record_attempt_out_of_range() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/practice/attempts")
        .json(&fixtures::attempt_request(99, "الرحمن"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);

    let stats: Value = server.get("/api/practice/stats").await.json();
    assert_eq!(stats["total_attempts"], 0);
}

/// Test statistics over several attempts.
#[tokio::test]
async fn test_stats() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/practice/stats").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["total_attempts"], 0);
    assert_eq!(body["current_streak"], 0);

    let attempts = [
        (0, fixtures::simple_text(0)),
        (1, "xyz"),
        (2, fixtures::simple_text(2)),
    ];
    for (index, recognized) in attempts {
        server
            .post("/api/practice/attempts")
            .json(&fixtures::attempt_request(index, recognized))
            .await
            .assert_status_ok();
    }

    let body: Value = server.get("/api/practice/stats").await.json();
    assert_eq!(body["total_attempts"], 3);
    assert_eq!(body["best_score"], 100);
    assert_eq!(body["current_streak"], 1);
    // 200 / 3 rounds to 67
    assert_eq!(body["average_accuracy"], 67);
}

/// Test completing the beginner tier.
#[tokio::test]
async fn test_beginner_tier_complete() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    for index in 0..33 {
        server
            .post("/api/practice/attempts")
            .json(&fixtures::attempt_request(index, fixtures::simple_text(index)))
            .await
            .assert_status_ok();
    }

    let progress: Value = server.get("/api/practice/progress").await.json();
    assert_eq!(progress["mastered"], 33);
    assert_eq!(progress["total"], 99);
    assert_eq!(progress["percentage"], 33);
    assert_eq!(progress["tiers"][0]["tier"], "beginner");
    assert_eq!(progress["tiers"][0]["mastered"], 33);
    assert_eq!(progress["tiers"][0]["threshold"], 70);
    assert_eq!(progress["tiers"][1]["mastered"], 0);
    assert_eq!(progress["tiers"][2]["threshold"], 80);

    let achievements: Vec<Value> = server.get("/api/practice/achievements").await.json();
    assert_eq!(achievements.len(), 8);
    assert_eq!(
        unlocked_ids(&achievements),
        vec![
            "first_attempt",
            "first_master",
            "beginner_complete",
            "perfect_score",
            "streak_10",
        ]
    );
}

/// Test the achievement list carries display metadata.
#[tokio::test]
async fn test_achievement_definitions() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/api/practice/achievements").await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(body[0]["id"], "first_attempt");
    assert_eq!(body[0]["title"], "First Steps");
    assert_eq!(body[7]["id"], "all_complete");
    assert_eq!(body[7]["title"], "Grand Master");
    assert!(unlocked_ids(&body).is_empty());
}

/// Test classifying recognition errors.
#[tokio::test]
async fn test_report_recognition_error() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server
        .post("/api/practice/errors")
        .json(&json!({ "error": "no-speech" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["kind"], "no-speech");
    assert_eq!(body["hint"], "No speech detected. Please try again.");

    let body: Value = server
        .post("/api/practice/errors")
        .json(&json!({ "error": "aborted" }))
        .await
        .json();
    assert_eq!(body["kind"], "aborted");
    assert!(body["hint"].as_str().unwrap().contains("aborted"));
}

/// Test reset requires confirmation.
#[tokio::test]
async fn test_reset_requires_confirm() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/api/practice/attempts")
        .json(&fixtures::attempt_request(0, fixtures::simple_text(0)))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/practice/reset")
        .json(&json!({ "confirm": false }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let stats: Value = server.get("/api/practice/stats").await.json();
    assert_eq!(stats["total_attempts"], 1);
}

/// Test reset clears attempts, mastery and achievements.
#[tokio::test]
async fn test_reset_clears_everything() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/api/practice/attempts")
        .json(&fixtures::attempt_request(0, fixtures::simple_text(0)))
        .await
        .assert_status_ok();

    let response = server
        .post("/api/practice/reset")
        .json(&json!({ "confirm": true }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["mastered"], 0);

    let stats: Value = server.get("/api/practice/stats").await.json();
    assert_eq!(stats["total_attempts"], 0);

    let achievements: Vec<Value> = server.get("/api/practice/achievements").await.json();
    assert!(unlocked_ids(&achievements).is_empty());

    // Progress is empty after a restart too.
    let restarted = ctx.restart().await;
    let server = TestServer::new(restarted.router()).unwrap();
    let stats: Value = server.get("/api/practice/stats").await.json();
    assert_eq!(stats["total_attempts"], 0);
}

/// Test progress survives a restart and uses the stored key layout.
#[tokio::test]
async fn test_progress_persists() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/api/practice/attempts")
        .json(&fixtures::attempt_request(4, fixtures::simple_text(4)))
        .await
        .assert_status_ok();

    let mastered = ctx.db.get_value("masteredNames").await.unwrap();
    assert_eq!(mastered.as_deref(), Some("[4]"));
    let attempts = ctx.db.get_value("namesAttempts").await.unwrap().unwrap();
    assert!(attempts.contains("\"nameIndex\":4"));

    let restarted = ctx.restart().await;
    let server = TestServer::new(restarted.router()).unwrap();

    let stats: Value = server.get("/api/practice/stats").await.json();
    assert_eq!(stats["total_attempts"], 1);
    let entry: Value = server.get("/api/names/4").await.json();
    assert_eq!(entry["mastered"], true);
}

/// Test a corrupt stored value loads as empty without affecting other keys.
#[tokio::test]
async fn test_corrupt_state_loads_empty() {
    let ctx = TestContext::new().await;
    let server = TestServer::new(ctx.router()).unwrap();

    server
        .post("/api/practice/attempts")
        .json(&fixtures::attempt_request(4, fixtures::simple_text(4)))
        .await
        .assert_status_ok();

    ctx.db.put_value("masteredNames", "not json").await.unwrap();

    let restarted = ctx.restart().await;
    let server = TestServer::new(restarted.router()).unwrap();

    let progress: Value = server.get("/api/practice/progress").await.json();
    assert_eq!(progress["mastered"], 0);
    let stats: Value = server.get("/api/practice/stats").await.json();
    assert_eq!(stats["total_attempts"], 1);
}
