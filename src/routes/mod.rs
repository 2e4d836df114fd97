mod applications;
mod create_job;
mod dashboard;
mod edit_job;
mod health;
mod job_detail;
mod jobs;
mod login;
mod not_found;

pub(crate) use applications::ApplicationsPage;
pub(crate) use create_job::CreateJobPage;
pub(crate) use dashboard::DashboardPage;
pub(crate) use edit_job::EditJobPage;
pub(crate) use health::HealthPage;
pub(crate) use job_detail::JobDetailPage;
pub(crate) use jobs::JobsPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::params::Params;
use leptos_router::path;

/// The `:id` segment shared by detail, edit, and applications routes.
#[derive(Params, PartialEq, Clone)]
pub(crate) struct IdParams {
    pub id: Option<String>,
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=JobsPage />
            <Route path=path!("/jobs/:id") view=JobDetailPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/dashboard") view=DashboardPage />
            <Route path=path!("/create-job") view=CreateJobPage />
            <Route path=path!("/edit-job/:id") view=EditJobPage />
            <Route path=path!("/applications/:id") view=ApplicationsPage />
            <Route path=path!("/health") view=HealthPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
