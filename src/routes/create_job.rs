use crate::components::{AppShell, JobEditor};
use crate::features::auth::{RequireSession, state::use_session, use_navigator};
use crate::features::jobs::client;
use hireboard::jobs::JobForm;
use hireboard::paths;
use leptos::prelude::*;

#[component]
pub fn CreateJobPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <CreateJob />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn CreateJob() -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();

    let create_action = Action::new_local(move |form: &JobForm| {
        let form = form.clone();
        let credential = session.credential();
        async move { client::create_job(&form, credential.as_ref()).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(())) = create_action.value().get() {
            navigator(paths::DASHBOARD);
        }
    });

    view! {
        <JobEditor
            initial=JobForm::default()
            heading="Create Job Opening"
            submit_label="Create Job"
            action=create_action
        />
    }
}
