//! Public job listing.

use crate::components::{Alert, AlertKind, AppShell, Spinner};
use crate::features::jobs::client;
use hireboard::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn JobsPage() -> impl IntoView {
    let jobs = LocalResource::new(move || async move { client::list_jobs().await });

    view! {
        <AppShell>
            <div class="space-y-6">
                <div class="space-y-1">
                    <h1 class="text-2xl font-semibold text-gray-900">"Open positions"</h1>
                    <p class="text-sm text-gray-500">"Find your next role and apply in minutes."</p>
                </div>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match jobs.get() {
                        Some(Ok(list)) if list.is_empty() => {
                            view! { <p class="text-sm text-gray-500">"No jobs posted yet."</p> }
                                .into_any()
                        }
                        Some(Ok(list)) => {
                            view! {
                                <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                                    <For
                                        each=move || list.clone()
                                        key=|job| job.id.clone()
                                        children=|job| {
                                            view! {
                                                <A
                                                    href=paths::job_detail(&job.id)
                                                    {..}
                                                    class="block rounded-lg border border-gray-200 bg-white p-5 shadow-sm hover:shadow-md transition"
                                                >
                                                    <h2 class="text-lg font-semibold text-gray-900">
                                                        {job.title}
                                                    </h2>
                                                    <p class="text-sm text-gray-600">{job.company}</p>
                                                    <div class="mt-3 flex flex-wrap gap-2 text-xs text-gray-500">
                                                        <span>{job.location}</span>
                                                        <span>{job.salary}</span>
                                                    </div>
                                                </A>
                                            }
                                        }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                        Some(Err(err)) => {
                            view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                                .into_any()
                        }
                        None => view! { <Spinner /> }.into_any(),
                    }}
                </Suspense>
            </div>
        </AppShell>
    }
}
