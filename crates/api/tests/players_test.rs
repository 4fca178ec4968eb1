// Chess player and category routes against the in-process router
// Run with: cargo test -p chessplayers-api --test players_test

mod common;

use axum::http::{Method, StatusCode};
use chessplayers_api::storage::seed;
use chessplayers_core::{Category, ChessPlayer};
use common::test_app;
use serde_json::{json, Value};

fn players(body: &Value) -> Vec<ChessPlayer> {
    serde_json::from_value(body["data"].clone()).expect("list response with data")
}

#[tokio::test]
async fn test_seeded_players_newest_first() {
    let app = test_app();
    seed::seed(&app.db, &app.auth.hasher).await.unwrap();

    let (status, body) = app.get("/chessplayers", None).await;
    assert_eq!(status, StatusCode::OK);

    let list = players(&body);
    let names: Vec<&str> = list.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Levon Aronian",
            "Ian Nepomniatchi",
            "Ding Liren",
            "Fabiano Caruana",
            "Magnus Carlsen"
        ]
    );
    assert!(list.iter().all(|p| p.category.as_deref() == Some("grandmaster")));
}

#[tokio::test]
async fn test_get_player_by_id() {
    let app = test_app();
    seed::seed(&app.db, &app.auth.hasher).await.unwrap();

    let (status, body) = app.get("/chessplayers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let player: ChessPlayer = serde_json::from_value(body).unwrap();
    assert_eq!(player.name, "Magnus Carlsen");
    assert_eq!(player.rating, 2847);
    assert!(player.worldchampion);
    assert_eq!(player.image.as_deref(), Some("magnus.jpeg"));
    assert_eq!(player.category.as_deref(), Some("grandmaster"));

    let (status, body) = app.get("/chessplayers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Chess player not found");
}

#[tokio::test]
async fn test_player_crud_flow() {
    let app = test_app();

    let (status, body) = app.post("/categories", json!({ "category": "grandmaster" })).await;
    assert_eq!(status, StatusCode::CREATED);
    let category: Category = serde_json::from_value(body).unwrap();

    // Create
    let (status, body) = app
        .post(
            "/chessplayers",
            json!({
                "name": "Ding Liren",
                "rating": 2791,
                "worldchampion": false,
                "country": "China",
                "image": "ding.jpeg",
                "category_id": category.id
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let created: ChessPlayer = serde_json::from_value(body).unwrap();
    assert_eq!(created.category.as_deref(), Some("grandmaster"));

    // Replace editable fields; image and category are kept
    let (status, body) = app
        .send(
            Method::PUT,
            &format!("/chessplayers/{}", created.id),
            None,
            Some(json!({
                "name": "Ding Liren",
                "rating": 2762,
                "worldchampion": true,
                "country": "China"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let updated: ChessPlayer = serde_json::from_value(body).unwrap();
    assert_eq!(updated.rating, 2762);
    assert!(updated.worldchampion);
    assert_eq!(updated.image.as_deref(), Some("ding.jpeg"));
    assert_eq!(updated.category_id, Some(category.id));

    // Delete returns the removed row
    let uri = format!("/chessplayers/{}", created.id);
    let (status, body) = app.send(Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], created.id);

    let (status, _) = app.get(&uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.send(Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_player_is_not_found() {
    let app = test_app();
    let (status, _) = app
        .send(
            Method::PUT,
            "/chessplayers/42",
            None,
            Some(json!({
                "name": "Nobody",
                "rating": 1500,
                "worldchampion": false,
                "country": "Nowhere"
            })),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_player_input() {
    let app = test_app();

    for body in [
        json!({ "name": "", "rating": 2000, "country": "USA" }),
        json!({ "name": "Hikaru Nakamura", "rating": 5000, "country": "USA" }),
        json!({ "name": "Hikaru Nakamura", "rating": -3, "country": "USA" }),
        json!({ "name": "Hikaru Nakamura", "rating": 2000, "country": "USA", "category_id": 77 }),
        json!({ "name": "Hikaru Nakamura", "country": "USA" }),
        json!({ "name": "x".repeat(3000), "rating": 2000, "country": "USA" }),
    ] {
        let (status, response) = app.post("/chessplayers", body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert!(response["error"].is_string());
    }

    let (_, body) = app.get("/chessplayers", None).await;
    assert!(players(&body).is_empty());
}

#[tokio::test]
async fn test_categories() {
    let app = test_app();

    let (status, _) = app.post("/categories", json!({ "category": " " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    app.post("/categories", json!({ "category": "grandmaster" })).await;
    app.post("/categories", json!({ "category": "international master" })).await;

    let (status, body) = app.get("/categories", None).await;
    assert_eq!(status, StatusCode::OK);
    let categories: Vec<Category> = serde_json::from_value(body["data"].clone()).unwrap();
    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].category, "grandmaster");

    let (status, body) = app.get(&format!("/categories/{}", categories[1].id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], "international master");

    let (status, _) = app.get("/categories/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_resource_routes_need_no_token() {
    let app = test_app();
    let (status, _) = app.get("/chessplayers", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = app.get("/categories", None).await;
    assert_eq!(status, StatusCode::OK);
}
