/*
 * Responsibility
 * - Movie request/response DTOs
 * - release_date is an ISO date (YYYY-MM-DD)
 */
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::repos::movie_repo::MovieRow;

#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
}

impl CreateMovieRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        if self.genre.trim().is_empty() {
            return Err("genre is required");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateMovieRequest {
    pub title: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub genre: Option<String>,
}

impl UpdateMovieRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.is_none() && self.release_date.is_none() && self.genre.is_none() {
            return Err("at least one of title, release_date, genre is required");
        }
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err("title cannot be empty");
        }
        if let Some(genre) = &self.genre
            && genre.trim().is_empty()
        {
            return Err("genre cannot be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub release_date: NaiveDate,
    pub genre: String,
}

impl From<MovieRow> for MovieResponse {
    fn from(row: MovieRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            release_date: row.release_date,
            genre: row.genre,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MovieListResponse {
    pub success: bool,
    pub movies: Vec<MovieResponse>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct MovieEnvelope {
    pub success: bool,
    pub movie: MovieResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_parses_iso_dates() {
        let req: CreateMovieRequest = serde_json::from_str(
            r#"{"title":"Mission Impossible","release_date":"2020-05-02","genre":"Action"}"#,
        )
        .unwrap();
        assert_eq!(req.release_date, NaiveDate::from_ymd_opt(2020, 5, 2).unwrap());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn update_rejects_blank_title() {
        let req = UpdateMovieRequest {
            title: Some("".into()),
            release_date: None,
            genre: None,
        };
        assert_eq!(req.validate(), Err("title cannot be empty"));
    }
}
