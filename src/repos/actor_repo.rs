/*
 * Responsibility
 * - SQLx operations on the actors table
 * - Takes a PgPool and returns RepoError on failure
 */
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct ActorRow {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<ActorRow>, RepoError> {
    let rows = sqlx::query_as::<_, ActorRow>(
        r#"
        SELECT id, name, age, gender
        FROM actors
        ORDER BY id
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn count(db: &PgPool) -> Result<i64, RepoError> {
    let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM actors"#)
        .fetch_one(db)
        .await?;

    Ok(total)
}

pub async fn create(
    db: &PgPool,
    name: &str,
    age: i32,
    gender: &str,
) -> Result<ActorRow, RepoError> {
    let row = sqlx::query_as::<_, ActorRow>(
        r#"
        INSERT INTO actors (name, age, gender)
        VALUES ($1, $2, $3)
        RETURNING id, name, age, gender
        "#,
    )
    .bind(name)
    .bind(age)
    .bind(gender)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    actor_id: i64,
    name: Option<&str>,
    age: Option<i32>,
    gender: Option<&str>,
) -> Result<Option<ActorRow>, RepoError> {
    // None leaves the column untouched
    let row = sqlx::query_as::<_, ActorRow>(
        r#"
        UPDATE actors
        SET
            name = COALESCE($2, name),
            age = COALESCE($3, age),
            gender = COALESCE($4, gender)
        WHERE id = $1
        RETURNING id, name, age, gender
        "#,
    )
    .bind(actor_id)
    .bind(name)
    .bind(age)
    .bind(gender)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, actor_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM actors
        WHERE id = $1
        "#,
    )
    .bind(actor_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
