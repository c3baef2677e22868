//! HTTP-level integration tests for the prompt version endpoints: snapshot
//! creation, history listing, and revert.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use promptlab_store::Store;

async fn create_prompt(store: &Arc<Store>) -> serde_json::Value {
    let app = common::build_test_app(store.clone());
    body_json(
        post_json(
            app,
            "/api/v1/prompts",
            serde_json::json!({"title": "Alpha", "content": "Alpha body text"}),
        )
        .await,
    )
    .await
}

async fn create_version(
    store: &Arc<Store>,
    prompt_id: &str,
    title: &str,
    content: &str,
) -> serde_json::Value {
    let app = common::build_test_app(store.clone());
    body_json(
        post_json(
            app,
            &format!("/api/v1/prompts/{prompt_id}/versions"),
            serde_json::json!({"title": title, "content": content}),
        )
        .await,
    )
    .await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn first_version_gets_number_one() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions"),
        serde_json::json!({"title": "V1", "content": "C1", "description": "first snapshot"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["version_number"], 1);
    assert_eq!(json["prompt_id"], prompt["id"]);
    assert_eq!(json["title"], "V1");
    assert_eq!(json["content"], "C1");
    assert_eq!(json["description"], "first snapshot");
    assert!(json["id"].is_string());
}

#[tokio::test]
async fn version_numbers_increment() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    let v1 = create_version(&store, prompt_id, "V1", "C1").await;
    let v2 = create_version(&store, prompt_id, "V2", "C2").await;

    assert_eq!(v1["version_number"], 1);
    assert_eq!(v2["version_number"], 2);
}

#[tokio::test]
async fn create_version_for_missing_prompt_returns_404() {
    let store = Arc::new(Store::new());
    let app = common::build_test_app(store);

    let response = post_json(
        app,
        "/api/v1/prompts/no-such-prompt/versions",
        serde_json::json!({"title": "V1", "content": "C1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn create_version_with_empty_content_returns_400() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions"),
        serde_json::json!({"title": "V1", "content": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_versions_newest_first() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    create_version(&store, prompt_id, "V1", "C1").await;
    create_version(&store, prompt_id, "V2", "C2").await;

    let app = common::build_test_app(store);
    let response = get(app, &format!("/api/v1/prompts/{prompt_id}/versions")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total"], 2);
    let numbers: Vec<i64> = json["versions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["version_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![2, 1]);
}

#[tokio::test]
async fn list_versions_for_missing_prompt_returns_404() {
    let store = Arc::new(Store::new());
    let app = common::build_test_app(store);

    let response = get(app, "/api/v1/prompts/no-such-prompt/versions").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_version_by_id() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();
    let v1 = create_version(&store, prompt_id, "V1", "C1").await;
    let version_id = v1["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = get(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions/{version_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], v1["id"]);
    assert_eq!(json["content"], "C1");
}

#[tokio::test]
async fn get_version_under_wrong_prompt_returns_404() {
    let store = Arc::new(Store::new());
    let owner = create_prompt(&store).await;
    let other = create_prompt(&store).await;
    let v1 = create_version(&store, owner["id"].as_str().unwrap(), "V1", "C1").await;

    let other_id = other["id"].as_str().unwrap();
    let version_id = v1["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = get(
        app,
        &format!("/api/v1/prompts/{other_id}/versions/{version_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_unknown_version_returns_404() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = get(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions/no-such-version"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Revert
// ---------------------------------------------------------------------------

#[tokio::test]
async fn revert_appends_new_version_copying_target() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    let v1 = create_version(&store, prompt_id, "V1", "C1").await;
    let v2 = create_version(&store, prompt_id, "V2", "C2").await;
    assert_eq!(v1["version_number"], 1);
    assert_eq!(v2["version_number"], 2);
    let v1_id = v1["id"].as_str().unwrap();

    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions/{v1_id}/revert"),
        serde_json::json!({}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["version_number"], 3);
    assert_eq!(json["title"], "V1");
    assert_eq!(json["content"], "C1");
    assert!(json["description"].as_str().unwrap().contains('1'));

    // History now reads newest first: the revert on top, targets below.
    let app = common::build_test_app(store);
    let listed = body_json(get(app, &format!("/api/v1/prompts/{prompt_id}/versions")).await).await;
    let numbers: Vec<i64> = listed["versions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["version_number"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, vec![3, 2, 1]);
}

#[tokio::test]
async fn revert_does_not_modify_live_prompt_or_target() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();
    let v1 = create_version(&store, prompt_id, "V1", "C1").await;
    let v1_id = v1["id"].as_str().unwrap();

    let app = common::build_test_app(store.clone());
    post_json(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions/{v1_id}/revert"),
        serde_json::json!({}),
    )
    .await;

    // The live prompt still has its original fields and timestamps.
    let app = common::build_test_app(store.clone());
    let live = body_json(get(app, &format!("/api/v1/prompts/{prompt_id}")).await).await;
    assert_eq!(live["title"], "Alpha");
    assert_eq!(live["content"], "Alpha body text");
    assert_eq!(live["updated_at"], prompt["updated_at"]);

    // The target version is unchanged.
    let app = common::build_test_app(store);
    let target = body_json(
        get(app, &format!("/api/v1/prompts/{prompt_id}/versions/{v1_id}")).await,
    )
    .await;
    assert_eq!(target["version_number"], 1);
    assert_eq!(target["description"], serde_json::Value::Null);
}

#[tokio::test]
async fn revert_to_unknown_version_returns_404() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions/no-such-version/revert"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn revert_to_foreign_version_returns_404() {
    let store = Arc::new(Store::new());
    let owner = create_prompt(&store).await;
    let other = create_prompt(&store).await;
    let v1 = create_version(&store, owner["id"].as_str().unwrap(), "V1", "C1").await;

    let other_id = other["id"].as_str().unwrap();
    let version_id = v1["id"].as_str().unwrap();

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        &format!("/api/v1/prompts/{other_id}/versions/{version_id}/revert"),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Interaction with prompt deletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn versions_survive_prompt_deletion_but_refuse_new_snapshots() {
    let store = Arc::new(Store::new());
    let prompt = create_prompt(&store).await;
    let prompt_id = prompt["id"].as_str().unwrap();
    let v1 = create_version(&store, prompt_id, "V1", "C1").await;
    let version_id = v1["id"].as_str().unwrap();

    let app = common::build_test_app(store.clone());
    common::delete(app, &format!("/api/v1/prompts/{prompt_id}")).await;

    // The stored snapshot is still individually addressable.
    let app = common::build_test_app(store.clone());
    let response = get(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions/{version_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // But the history listing and new snapshots require a live prompt.
    let app = common::build_test_app(store.clone());
    let response = get(app, &format!("/api/v1/prompts/{prompt_id}/versions")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(store);
    let response = post_json(
        app,
        &format!("/api/v1/prompts/{prompt_id}/versions"),
        serde_json::json!({"title": "V2", "content": "C2"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
