/*
 * Responsibility
 * - v1 URL layout
 * - One permission per route, applied with middleware::auth::require
 */
use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::api::v1::handlers::{
    actors::{create_actor, delete_actor, list_actors, update_actor},
    health::health,
    movies::{create_movie, delete_movie, list_movies, update_movie},
};
use crate::middleware::auth::require;
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/actors", require(get(list_actors), state, "get:actors"))
        .route("/actors", require(post(create_actor), state, "post:actors"))
        .route(
            "/actors/{actor_id}",
            require(patch(update_actor), state, "patch:actor"),
        )
        .route(
            "/actors/{actor_id}",
            require(delete(delete_actor), state, "delete:actor"),
        )
        .route("/movies", require(get(list_movies), state, "get:movies"))
        .route("/movies", require(post(create_movie), state, "post:movies"))
        .route(
            "/movies/{movie_id}",
            require(patch(update_movie), state, "patch:movie"),
        )
        .route(
            "/movies/{movie_id}",
            require(delete(delete_movie), state, "delete:movie"),
        )
}
