//! Shared UI components exported for routes and features.

mod application_form;
mod job_editor;
pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use application_form::ApplicationFormPanel;
pub(crate) use job_editor::JobEditor;
pub(crate) use layout::AppShell;
pub(crate) use ui::{Alert, AlertKind, Button, ButtonVariant, Spinner};
