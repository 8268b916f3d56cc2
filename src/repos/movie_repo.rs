/*
 * Responsibility
 * - movies CRUD
 */
use chrono::NaiveDate;
use sqlx::{FromRow, PgPool};

use crate::repos::error::RepoError;

#[derive(Debug, Clone, FromRow)]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
}

pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<MovieRow>, RepoError> {
    let rows = sqlx::query_as::<_, MovieRow>(
        r#"
        SELECT id, title, release_date, genre
        FROM movies
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
    let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM movies"#)
        .fetch_one(db)
        .await?;

    Ok(total)
}

pub async fn create(
    db: &PgPool,
    title: &str,
    release_date: NaiveDate,
    genre: &str,
) -> Result<MovieRow, RepoError> {
    let row = sqlx::query_as::<_, MovieRow>(
        r#"
        INSERT INTO movies (title, release_date, genre)
        VALUES ($1, $2, $3)
        RETURNING id, title, release_date, genre
        "#,
    )
    .bind(title)
    .bind(release_date)
    .bind(genre)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    movie_id: i64,
    title: Option<&str>,
    release_date: Option<NaiveDate>,
    genre: Option<&str>,
) -> Result<Option<MovieRow>, RepoError> {
    let row = sqlx::query_as::<_, MovieRow>(
        r#"
        UPDATE movies
        SET
            title = COALESCE($2, title),
            release_date = COALESCE($3, release_date),
            genre = COALESCE($4, genre)
        WHERE id = $1
        RETURNING id, title, release_date, genre
        "#,
    )
    .bind(movie_id)
    .bind(title)
    .bind(release_date)
    .bind(genre)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, movie_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM movies
        WHERE id = $1
        "#,
    )
    .bind(movie_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
