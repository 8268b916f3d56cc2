/*
 * Responsibility
 * - Shared context bound to the Router (AppState)
 *   - db: PgPool, auth: AuthGuard
 * - Cheap to clone (Arc / pool handles inside)
 */
use std::sync::Arc;

use crate::services::auth::AuthGuard;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: sqlx::PgPool,
    pub auth: Arc<AuthGuard>,
}

impl AppState {
    pub fn new(db: sqlx::PgPool, auth: Arc<AuthGuard>) -> Self {
        Self { db, auth }
    }
}
