//! Client-side route paths shared by the router and the session guard.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const DASHBOARD: &str = "/dashboard";
pub const CREATE_JOB: &str = "/create-job";
pub const HEALTH: &str = "/health";

pub fn job_detail(id: &str) -> String {
    format!("/jobs/{id}")
}

pub fn edit_job(id: &str) -> String {
    format!("/edit-job/{id}")
}

pub fn job_applications(id: &str) -> String {
    format!("/applications/{id}")
}
