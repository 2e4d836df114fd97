use super::IdParams;
use crate::components::{Alert, AlertKind, AppShell, JobEditor, Spinner};
use crate::features::auth::{RequireSession, state::use_session, use_navigator};
use crate::features::jobs::client;
use hireboard::jobs::JobForm;
use hireboard::paths;
use leptos::prelude::*;
use leptos_router::hooks::use_params;

#[component]
pub fn EditJobPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <EditJob />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn EditJob() -> impl IntoView {
    let params = use_params::<IdParams>();
    let job_id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    };
    let session = use_session();
    let navigator = use_navigator();

    let job = LocalResource::new(move || {
        let id = job_id();
        async move { client::get_job(&id).await }
    });

    let update_action = Action::new_local(move |form: &JobForm| {
        let form = form.clone();
        let id = params
            .get_untracked()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        let credential = session.credential();
        async move { client::update_job(&id, &form, credential.as_ref()).await }
    });

    Effect::new(move |_| {
        if let Some(Ok(())) = update_action.value().get() {
            navigator(paths::DASHBOARD);
        }
    });

    view! {
        <Suspense fallback=move || view! { <Spinner /> }>
            {move || match job.get() {
                Some(Ok(job)) => {
                    view! {
                        <JobEditor
                            initial=JobForm::from_job(&job)
                            heading="Edit Job Opening"
                            submit_label="Update Job"
                            action=update_action
                        />
                    }
                        .into_any()
                }
                Some(Err(err)) => {
                    view! { <Alert kind=AlertKind::Error message=err.to_string() /> }.into_any()
                }
                None => view! { <Spinner /> }.into_any(),
            }}
        </Suspense>
    }
}
