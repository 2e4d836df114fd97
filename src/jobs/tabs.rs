//! Recruiter triage tabs over a job's applications.

use super::types::{Application, ApplicationStatus};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    Pending,
    Shortlisted,
    Rejected,
}

impl StatusTab {
    pub const ALL: [StatusTab; 3] = [
        StatusTab::Pending,
        StatusTab::Shortlisted,
        StatusTab::Rejected,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StatusTab::Pending => "Pending",
            StatusTab::Shortlisted => "Shortlisted",
            StatusTab::Rejected => "Rejected",
        }
    }

    /// Applications with a status outside the three tabs show up nowhere.
    pub fn matches(self, status: &ApplicationStatus) -> bool {
        matches!(
            (self, status),
            (StatusTab::Pending, ApplicationStatus::Pending)
                | (StatusTab::Shortlisted, ApplicationStatus::Shortlisted)
                | (StatusTab::Rejected, ApplicationStatus::Rejected)
        )
    }

    pub fn empty_message(self) -> String {
        format!(
            "No {} applications found.",
            self.label().to_ascii_lowercase()
        )
    }
}

pub fn filter_by_tab(applications: &[Application], tab: StatusTab) -> Vec<Application> {
    applications
        .iter()
        .filter(|application| tab.matches(&application.status))
        .cloned()
        .collect()
}

/// Optimistically sets an application's status and returns the previous one
/// so a failed update can be reverted.
pub fn apply_status(
    applications: &mut [Application],
    id: &str,
    status: ApplicationStatus,
) -> Option<ApplicationStatus> {
    applications
        .iter_mut()
        .find(|application| application.id == id)
        .map(|application| std::mem::replace(&mut application.status, status))
}

/// Undoes a failed optimistic update, but only while the application still
/// shows the status that update applied. Returns whether it was reverted.
pub fn revert_status(
    applications: &mut [Application],
    id: &str,
    applied: &ApplicationStatus,
    previous: ApplicationStatus,
) -> bool {
    match applications
        .iter_mut()
        .find(|application| application.id == id && application.status == *applied)
    {
        Some(application) => {
            application.status = previous;
            true
        }
        None => false,
    }
}
