//! Client helpers for `/jobs`. Listing and reading are public; writes carry
//! the recruiter's bearer credential when one is stored.

use crate::app_lib::{delete_with_bearer, get_json, patch_json, post_json};
use hireboard::AppError;
use hireboard::jobs::{Job, JobForm};
use hireboard::session::SessionCredential;

/// Fetches every open posting.
pub async fn list_jobs() -> Result<Vec<Job>, AppError> {
    get_json("/jobs").await
}

/// Fetches one posting after basic input validation.
pub async fn get_job(id: &str) -> Result<Job, AppError> {
    let id = require_id(id)?;
    get_json(&format!("/jobs/{id}")).await
}

pub async fn create_job(
    form: &JobForm,
    credential: Option<&SessionCredential>,
) -> Result<(), AppError> {
    post_json("/jobs", form, credential).await
}

pub async fn update_job(
    id: &str,
    form: &JobForm,
    credential: Option<&SessionCredential>,
) -> Result<(), AppError> {
    let id = require_id(id)?;
    patch_json(&format!("/jobs/{id}"), form, credential).await
}

pub async fn delete_job(id: &str, credential: &SessionCredential) -> Result<(), AppError> {
    let id = require_id(id)?;
    delete_with_bearer(&format!("/jobs/{id}"), credential).await
}

fn require_id(id: &str) -> Result<&str, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        Err(AppError::Validation("Job id is required.".to_string()))
    } else {
        Ok(trimmed)
    }
}
