//! Job-board domain types and the view logic that does not need a browser:
//! form editing and validation, application status tabs, and display
//! formatting. Routes keep only markup and API calls.

mod display;
mod form;
mod tabs;
mod types;

pub use display::{display_date, format_amount};
pub use form::{ApplicationForm, JobField, JobForm, validate_resume_name};
pub use tabs::{StatusTab, apply_status, filter_by_tab, revert_status};
pub use types::{Application, ApplicationStatus, Job, StatusUpdate};
