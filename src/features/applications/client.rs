//! Client helpers for `/applications`. Submissions are multipart because they
//! carry the resume file.

use crate::app_lib::{get_json, patch_json, post_form};
use hireboard::AppError;
use hireboard::jobs::{
    Application, ApplicationForm, ApplicationStatus, StatusUpdate, validate_resume_name,
};
use hireboard::session::SessionCredential;
use web_sys::{File, FormData};

/// Lists every application received for a posting.
pub async fn list_for_job(job_id: &str) -> Result<Vec<Application>, AppError> {
    let job_id = job_id.trim();
    if job_id.is_empty() {
        return Err(AppError::Validation("Job id is required.".to_string()));
    }
    get_json(&format!("/applications?jobId={job_id}")).await
}

/// Moves an application to a new review state.
pub async fn update_status(
    id: &str,
    status: ApplicationStatus,
    credential: Option<&SessionCredential>,
) -> Result<(), AppError> {
    patch_json(
        &format!("/applications/{}", id.trim()),
        &StatusUpdate { status },
        credential,
    )
    .await
}

/// Submits an application with its resume.
pub async fn submit(form: &ApplicationForm, job_id: &str, resume: &File) -> Result<(), AppError> {
    let fields = form.multipart_fields(job_id)?;
    let file_name = resume.name();
    validate_resume_name(Some(&file_name))?;

    let data = FormData::new().map_err(|_| form_error())?;
    for (name, value) in fields {
        data.append_with_str(name, &value).map_err(|_| form_error())?;
    }
    data.append_with_blob_and_filename("resume", resume, &file_name)
        .map_err(|_| form_error())?;

    post_form("/applications", &data).await
}

fn form_error() -> AppError {
    AppError::Serialization("Failed to prepare the application form.".to_string())
}
