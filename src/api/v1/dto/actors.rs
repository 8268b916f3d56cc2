/*
 * Responsibility
 * - Actor request/response DTOs
 * - validate() does shape checks only; existence is the repo's job
 */
use serde::{Deserialize, Serialize};

use crate::repos::actor_repo::ActorRow;

#[derive(Debug, Deserialize)]
pub struct CreateActorRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

impl CreateActorRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if self.age < 0 {
            return Err("age must be >= 0");
        }
        if self.gender.trim().is_empty() {
            return Err("gender is required");
        }
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateActorRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
}

impl UpdateActorRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.is_none() && self.age.is_none() && self.gender.is_none() {
            return Err("at least one of name, age, gender is required");
        }
        if let Some(name) = &self.name
            && name.trim().is_empty()
        {
            return Err("name cannot be empty");
        }
        if let Some(age) = self.age
            && age < 0
        {
            return Err("age must be >= 0");
        }
        if let Some(gender) = &self.gender
            && gender.trim().is_empty()
        {
            return Err("gender cannot be empty");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct ActorResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
}

impl From<ActorRow> for ActorResponse {
    fn from(row: ActorRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            age: row.age,
            gender: row.gender,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ActorListResponse {
    pub success: bool,
    pub actors: Vec<ActorResponse>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct ActorEnvelope {
    pub success: bool,
    pub actor: ActorResponse,
}
