//! Public job detail with the application form underneath.

use super::IdParams;
use crate::components::{Alert, AlertKind, AppShell, ApplicationFormPanel, Spinner};
use crate::features::jobs::client;
use hireboard::jobs::Job;
use leptos::prelude::*;
use leptos_router::hooks::use_params;

#[component]
pub fn JobDetailPage() -> impl IntoView {
    let params = use_params::<IdParams>();
    let job_id = move || {
        params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default()
    };
    let job = LocalResource::new(move || {
        let id = job_id();
        async move { client::get_job(&id).await }
    });

    view! {
        <AppShell>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match job.get() {
                    Some(Ok(job)) => view! { <JobDetail job=job /> }.into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </AppShell>
    }
}

#[component]
fn JobDetail(job: Job) -> impl IntoView {
    let responsibilities = job
        .responsibilities
        .iter()
        .map(|item| view! { <li>{item.clone()}</li> })
        .collect_view();

    view! {
        <div class="grid gap-8 lg:grid-cols-3">
            <article class="lg:col-span-2 space-y-4 rounded-lg border border-gray-200 bg-white p-6">
                <header class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900">{job.title.clone()}</h1>
                    <p class="text-gray-600">{job.company.clone()}</p>
                </header>
                <dl class="grid grid-cols-1 sm:grid-cols-3 gap-4 text-sm">
                    <div>
                        <dt class="font-medium text-gray-500">"Location"</dt>
                        <dd class="text-gray-900">{job.location.clone()}</dd>
                    </div>
                    <div>
                        <dt class="font-medium text-gray-500">"Experience"</dt>
                        <dd class="text-gray-900">{job.experience.clone()}</dd>
                    </div>
                    <div>
                        <dt class="font-medium text-gray-500">"Salary"</dt>
                        <dd class="text-gray-900">{job.salary.clone()}</dd>
                    </div>
                </dl>
                <p class="text-gray-700 whitespace-pre-line">{job.description.clone()}</p>
                <div>
                    <h2 class="font-semibold text-gray-900">"Responsibilities"</h2>
                    <ul class="mt-2 list-disc pl-5 text-gray-700 space-y-1">{responsibilities}</ul>
                </div>
            </article>
            <aside class="rounded-lg border border-gray-200 bg-white p-6">
                <ApplicationFormPanel job_id=job.id />
            </aside>
        </div>
    }
}
