//! Actor and movie routes against a real PostgreSQL database.
//!
//! `#[sqlx::test]` creates a fresh database per test from `DATABASE_URL` and
//! applies `migrations/` before handing over the pool.
mod common;

use anyhow::Result;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::NaiveDate;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use capstone_api::repos::{actor_repo, movie_repo};

const EXECUTIVE_PRODUCER: &[&str] = &[
    "get:actors",
    "post:actors",
    "patch:actor",
    "delete:actor",
    "get:movies",
    "post:movies",
    "patch:movie",
    "delete:movie",
];

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Result<(StatusCode, Value)> {
    let token = common::token(&common::claims(EXECUTIVE_PRODUCER));
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, common::bearer(&token));
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let res = app.clone().oneshot(builder.body(body)?).await?;
    let status = res.status();
    Ok((status, common::body_json(res).await?))
}

#[sqlx::test]
async fn create_actor_returns_created_envelope(pool: PgPool) -> Result<()> {
    let app = common::app_with_pool(pool.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/actors",
        Some(json!({"name": "  Tom Cruise ", "age": 34, "gender": "Male"})),
    )
    .await?;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert_eq!(body["actor"]["name"], "Tom Cruise");
    assert_eq!(body["actor"]["age"], 34);
    assert!(body["actor"]["id"].is_i64());
    assert_eq!(actor_repo::count(&pool).await?, 1);
    Ok(())
}

#[sqlx::test]
async fn create_actor_rejects_bad_input(pool: PgPool) -> Result<()> {
    let app = common::app_with_pool(pool.clone());

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/actors",
        Some(json!({"name": "Tom Cruise", "age": -1, "gender": "Male"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ACTOR");

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/actors",
        Some(json!({"name": "Tom Cruise", "gender": "Male"})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_BODY");

    assert_eq!(actor_repo::count(&pool).await?, 0);
    Ok(())
}

#[sqlx::test]
async fn list_actors_pages_by_ten(pool: PgPool) -> Result<()> {
    for i in 0..12 {
        actor_repo::create(&pool, &format!("Actor {i:02}"), 20 + i, "Female").await?;
    }
    let app = common::app_with_pool(pool);

    let (status, first) = send(&app, "GET", "/api/v1/actors", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["success"], true);
    assert_eq!(first["total"], 12);
    assert_eq!(first["actors"].as_array().map(Vec::len), Some(10));
    assert_eq!(first["actors"][0]["name"], "Actor 00");

    let (_, second) = send(&app, "GET", "/api/v1/actors?page=2", None).await?;
    assert_eq!(second["total"], 12);
    let names: Vec<&str> = second["actors"]
        .as_array()
        .into_iter()
        .flatten()
        .filter_map(|a| a["name"].as_str())
        .collect();
    assert_eq!(names, ["Actor 10", "Actor 11"]);

    let (_, past_end) = send(&app, "GET", "/api/v1/actors?page=3", None).await?;
    assert_eq!(past_end["actors"], json!([]));

    let (status, body) = send(&app, "GET", "/api/v1/actors?page=0", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_PAGE");
    Ok(())
}

#[sqlx::test]
async fn patch_actor_changes_only_given_fields(pool: PgPool) -> Result<()> {
    let row = actor_repo::create(&pool, "Tom Cruise", 34, "Male").await?;
    let app = common::app_with_pool(pool);

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/v1/actors/{}", row.id),
        Some(json!({"age": 35})),
    )
    .await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["actor"],
        json!({"id": row.id, "name": "Tom Cruise", "age": 35, "gender": "Male"})
    );

    let (status, body) = send(
        &app,
        "PATCH",
        &format!("/api/v1/actors/{}", row.id),
        Some(json!({})),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "INVALID_ACTOR");
    Ok(())
}

#[sqlx::test]
async fn delete_actor_then_it_is_gone(pool: PgPool) -> Result<()> {
    let row = actor_repo::create(&pool, "Tom Cruise", 34, "Male").await?;
    let app = common::app_with_pool(pool.clone());
    let uri = format!("/api/v1/actors/{}", row.id);

    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "deleted": row.id}));
    assert_eq!(actor_repo::count(&pool).await?, 0);

    let (status, body) = send(&app, "DELETE", &uri, None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "not_found");
    Ok(())
}

#[sqlx::test]
async fn missing_actor_is_not_found(pool: PgPool) -> Result<()> {
    let app = common::app_with_pool(pool);

    let (status, body) = send(&app, "PATCH", "/api/v1/actors/4242", Some(json!({"age": 40}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "actor not found.");

    let (status, _) = send(&app, "DELETE", "/api/v1/actors/4242", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[sqlx::test]
async fn movie_lifecycle(pool: PgPool) -> Result<()> {
    let app = common::app_with_pool(pool.clone());

    let (status, created) = send(
        &app,
        "POST",
        "/api/v1/movies",
        Some(json!({"title": "Mission Impossible", "release_date": "2020-05-02", "genre": "Action"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    assert_eq!(created["movie"]["release_date"], "2020-05-02");
    let id = created["movie"]["id"].as_i64().unwrap_or_default();

    let (status, patched) = send(
        &app,
        "PATCH",
        &format!("/api/v1/movies/{id}"),
        Some(json!({"release_date": "2021-07-09"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        patched["movie"],
        json!({"id": id, "title": "Mission Impossible", "release_date": "2021-07-09", "genre": "Action"})
    );

    let (status, listed) = send(&app, "GET", "/api/v1/movies", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["total"], 1);
    assert_eq!(listed["movies"][0]["id"], id);

    let (status, deleted) = send(&app, "DELETE", &format!("/api/v1/movies/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["deleted"], id);
    assert_eq!(movie_repo::count(&pool).await?, 0);
    Ok(())
}

#[sqlx::test]
async fn list_movies_pages_by_ten(pool: PgPool) -> Result<()> {
    let release = NaiveDate::from_ymd_opt(2019, 1, 1).expect("valid date");
    for i in 0..11 {
        movie_repo::create(&pool, &format!("Movie {i:02}"), release, "Drama").await?;
    }
    let app = common::app_with_pool(pool);

    let (_, first) = send(&app, "GET", "/api/v1/movies", None).await?;
    assert_eq!(first["total"], 11);
    assert_eq!(first["movies"].as_array().map(Vec::len), Some(10));

    let (_, second) = send(&app, "GET", "/api/v1/movies?page=2", None).await?;
    assert_eq!(second["movies"][0]["title"], "Movie 10");
    Ok(())
}

#[sqlx::test]
async fn missing_movie_is_not_found(pool: PgPool) -> Result<()> {
    let app = common::app_with_pool(pool);

    let (status, body) =
        send(&app, "PATCH", "/api/v1/movies/4242", Some(json!({"genre": "Thriller"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "movie not found.");

    let (status, _) = send(&app, "DELETE", "/api/v1/movies/4242", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
