/*
 * Responsibility
 * - /movies handlers
 */
use axum::{
    Json,
    extract::State,
    http::StatusCode,
};

use crate::{
    api::v1::{
        dto::{
            movies::{
                CreateMovieRequest, MovieEnvelope, MovieListResponse, MovieResponse,
                UpdateMovieRequest,
            },
            page::PageQuery,
        },
        extractors::{ApiJson, ApiPath, ApiQuery, AuthClaims},
    },
    error::AppError,
    repos::movie_repo,
    state::AppState,
};

pub async fn list_movies(
    State(state): State<AppState>,
    ApiQuery(page): ApiQuery<PageQuery>,
) -> Result<Json<MovieListResponse>, AppError> {
    let (limit, offset) = page
        .limit_offset()
        .map_err(|msg| AppError::bad_request("INVALID_PAGE", msg))?;

    let rows = movie_repo::list(&state.db, limit, offset).await?;
    let total = movie_repo::count(&state.db).await?;

    Ok(Json(MovieListResponse {
        success: true,
        movies: rows.into_iter().map(MovieResponse::from).collect(),
        total,
    }))
}

pub async fn create_movie(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    ApiJson(req): ApiJson<CreateMovieRequest>,
) -> Result<(StatusCode, Json<MovieEnvelope>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_MOVIE", msg))?;

    let row =
        movie_repo::create(&state.db, req.title.trim(), req.release_date, req.genre.trim()).await?;
    tracing::info!(movie_id = row.id, sub = claims.subject().unwrap_or("-"), "movie created");

    Ok((
        StatusCode::CREATED,
        Json(MovieEnvelope {
            success: true,
            movie: row.into(),
        }),
    ))
}

pub async fn update_movie(
    State(state): State<AppState>,
    ApiPath(movie_id): ApiPath<i64>,
    ApiJson(req): ApiJson<UpdateMovieRequest>,
) -> Result<Json<MovieEnvelope>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_MOVIE", msg))?;

    let row = movie_repo::update(
        &state.db,
        movie_id,
        req.title.as_deref().map(str::trim),
        req.release_date,
        req.genre.as_deref().map(str::trim),
    )
    .await?
    .ok_or(AppError::not_found("movie"))?;

    Ok(Json(MovieEnvelope {
        success: true,
        movie: row.into(),
    }))
}

pub async fn delete_movie(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    ApiPath(movie_id): ApiPath<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let deleted = movie_repo::delete(&state.db, movie_id).await?;
    if !deleted {
        return Err(AppError::not_found("movie"));
    }

    tracing::info!(movie_id, sub = claims.subject().unwrap_or("-"), "movie deleted");
    Ok(Json(serde_json::json!({ "success": true, "deleted": movie_id })))
}
