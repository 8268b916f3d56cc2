/*
 * Responsibility
 * - /actors handlers
 * - Every route is guarded in routes.rs; AuthClaims is the verified caller
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::{
            actors::{
                ActorEnvelope, ActorListResponse, ActorResponse, CreateActorRequest,
                UpdateActorRequest,
            },
            page::PageQuery,
        },
        extractors::{ApiJson, ApiPath, ApiQuery, AuthClaims},
    },
    error::AppError,
    repos::actor_repo,
    state::AppState,
};

pub async fn list_actors(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> Result<Json<ActorListResponse>, AppError> {
    let (limit, offset) = page
        .limit_offset()
        .map_err(|msg| AppError::bad_request("INVALID_PAGE", msg))?;

    let rows = actor_repo::list(&state.db, limit, offset).await?;
    let total = actor_repo::count(&state.db).await?;

    Ok(Json(ActorListResponse {
        success: true,
        actors: rows.into_iter().map(ActorResponse::from).collect(),
        total,
    }))
}

pub async fn create_actor(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    ApiJson(req): ApiJson<CreateActorRequest>,
) -> Result<(StatusCode, Json<ActorEnvelope>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_ACTOR", msg))?;

    let row = actor_repo::create(&state.db, req.name.trim(), req.age, req.gender.trim()).await?;
    tracing::info!(actor_id = row.id, sub = claims.subject().unwrap_or("-"), "actor created");

    Ok((
        StatusCode::CREATED,
        Json(ActorEnvelope {
            success: true,
            actor: row.into(),
        }),
    ))
}

pub async fn update_actor(
    State(state): State<AppState>,
    ApiPath(actor_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateActorRequest>,
) -> Result<Json<ActorEnvelope>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_ACTOR", msg))?;

    let row = actor_repo::update(
        &state.db,
        actor_id,
        req.name.as_deref().map(str::trim),
        req.age,
        req.gender.as_deref().map(str::trim),
    )
    .await?
    .ok_or(AppError::not_found("actor"))?;

    Ok(Json(ActorEnvelope {
        success: true,
        actor: row.into(),
    }))
}

pub async fn delete_actor(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    ApiPath(actor_id): ApiPath<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = actor_repo::delete(&state.db, actor_id).await?;
    if !deleted {
        return Err(AppError::not_found("actor"));
    }

    tracing::info!(actor_id, sub = claims.subject().unwrap_or("-"), "actor deleted");
    Ok(Json(serde_json::json!({ "success": true, "deleted": actor_id })))
}
