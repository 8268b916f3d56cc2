//! Per-route permission guard.
//!
//! Runs the bearer-token check before the handler:
//! extract token -> verify against the signing key set -> check permission.
//! On success the verified `Claims` are stored in request extensions for the
//! `AuthClaims` extractor. Any failure short-circuits with the auth error
//! response and the handler never runs.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};

use crate::error::AppError;
use crate::services::auth::AuthGuard;
use crate::state::AppState;

#[derive(Clone)]
struct RequiredPermission {
    guard: Arc<AuthGuard>,
    permission: &'static str,
}

/// Guard `route` with `permission`.
///
/// ```ignore
/// .route("/actors", auth::require(get(list_actors), &state, "get:actors"))
/// ```
pub fn require(
    route: MethodRouter<AppState>,
    state: &AppState,
    permission: &'static str,
) -> MethodRouter<AppState> {
    require_with(route, state.auth.clone(), permission)
}

/// Same as `require`, for routers that do not carry `AppState`.
pub fn require_with<S>(
    route: MethodRouter<S>,
    guard: Arc<AuthGuard>,
    permission: &'static str,
) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    let required = RequiredPermission { guard, permission };
    route.route_layer(middleware::from_fn_with_state(required, authorize))
}

async fn authorize(
    State(required): State<RequiredPermission>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let claims = match required
        .guard
        .authorize(req.headers(), required.permission)
        .await
    {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(
                code = err.code(),
                permission = required.permission,
                error = %err,
                "authorization failed"
            );
            return Err(err.into());
        }
    };

    tracing::debug!(
        sub = claims.subject().unwrap_or("-"),
        permission = required.permission,
        "authorized"
    );

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
