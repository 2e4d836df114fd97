//! Recruiter dashboard. The stored token is re-verified against the backend
//! before any listing is shown; a failed check clears it and returns to login.

use crate::components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner};
use crate::features::auth::{
    RequireSession, client::HttpIdentityProvider, state::use_session, use_navigator,
};
use crate::features::jobs::client;
use hireboard::jobs::Job;
use hireboard::paths;
use hireboard::session::{Verification, verify_session};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

type Notice = (AlertKind, &'static str);

const DELETE_FAILED: Notice = (AlertKind::Error, "Failed to delete job.");

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <DashboardContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();

    let verification = LocalResource::new(move || {
        let session = session.clone();
        let navigator = navigator.clone();
        async move {
            let outcome = verify_session(
                session.store(),
                &HttpIdentityProvider,
                &navigator,
                paths::LOGIN,
            )
            .await;
            session.refresh();
            outcome
        }
    });

    view! {
        <Suspense fallback=move || view! { <Spinner label="Verifying session..." /> }>
            {move || match verification.get() {
                Some(Verification::Authenticated(identity)) => {
                    view! { <Overview username=identity.username role=identity.role /> }
                        .into_any()
                }
                Some(Verification::Unauthenticated(_)) | None => {
                    view! { <Spinner label="Verifying session..." /> }.into_any()
                }
            }}
        </Suspense>
    }
}

#[component]
fn Overview(username: String, role: Option<String>) -> impl IntoView {
    let jobs = LocalResource::new(move || async move { client::list_jobs().await });
    let removed = RwSignal::new(Vec::<String>::new());
    let notice = RwSignal::new(None::<Notice>);

    view! {
        <div class="space-y-8">
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4">
                <div class="space-y-1">
                    <p class="text-sm text-gray-500">
                        {format!("Welcome, {username}")}
                        {role
                            .map(|role| {
                                view! {
                                    <span class="ml-2 rounded-full bg-blue-100 px-2 py-0.5 text-xs font-medium text-blue-800">
                                        {role}
                                    </span>
                                }
                            })}
                    </p>
                    <h1 class="text-3xl font-extrabold text-gray-900">"Welcome to Your Dashboard"</h1>
                </div>
                <A
                    href=paths::CREATE_JOB
                    {..}
                    class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-green-500 rounded-lg hover:bg-green-600"
                >
                    "Create Job Opening"
                </A>
            </div>
            {move || {
                notice
                    .get()
                    .map(|(kind, message)| view! { <Alert kind=kind message=message /> })
            }}
            <section class="space-y-4">
                <h2 class="text-2xl font-bold text-gray-700">"Your Job Listings"</h2>
                <Suspense fallback=move || view! { <Spinner /> }>
                    {move || match jobs.get() {
                        Some(Ok(list)) => {
                            let visible = move || {
                                let hidden = removed.get();
                                list.iter()
                                    .filter(|job| !hidden.contains(&job.id))
                                    .cloned()
                                    .collect::<Vec<_>>()
                            };
                            view! {
                                <Show
                                    when={
                                        let visible = visible.clone();
                                        move || !visible().is_empty()
                                    }
                                    fallback=|| view! { <p class="text-gray-500">"No jobs posted yet."</p> }
                                >
                                    <div class="grid gap-4 md:grid-cols-2">
                                        <For
                                            each=visible.clone()
                                            key=|job| job.id.clone()
                                            children=move |job| {
                                                view! { <JobRow job=job removed=removed notice=notice /> }
                                            }
                                        />
                                    </div>
                                </Show>
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
            </section>
        </div>
    }
}

#[component]
fn JobRow(
    job: Job,
    removed: RwSignal<Vec<String>>,
    notice: RwSignal<Option<Notice>>,
) -> impl IntoView {
    let session = use_session();
    let job_id = job.id.clone();

    let on_delete = Callback::new(move |()| {
        if !confirm_delete() {
            return;
        }
        let Some(credential) = session.credential() else {
            notice.set(Some(DELETE_FAILED));
            return;
        };
        let id = job_id.clone();
        spawn_local(async move {
            match client::delete_job(&id, &credential).await {
                Ok(()) => {
                    removed.update(|ids| ids.push(id));
                    notice.set(Some((AlertKind::Success, "Job deleted successfully.")));
                }
                Err(err) => {
                    log::warn!("job delete failed: {err}");
                    notice.set(Some(DELETE_FAILED));
                }
            }
        });
    });

    view! {
        <div class="rounded-lg border border-gray-200 bg-white p-5 shadow-sm space-y-3">
            <div>
                <h3 class="text-lg font-semibold text-gray-900">{job.title}</h3>
                <p class="text-sm text-gray-600">{job.company}</p>
            </div>
            <div class="flex flex-wrap gap-4 text-sm text-gray-500">
                <span>{job.location}</span>
                <span>{job.experience}</span>
                <span>{job.salary}</span>
                <span>{format!("Applications: {}", job.applications)}</span>
            </div>
            <div class="flex flex-wrap gap-3">
                <A
                    href=paths::edit_job(&job.id)
                    {..}
                    class="px-4 py-2 text-sm font-medium text-gray-900 bg-white border border-gray-200 rounded-lg hover:bg-gray-100"
                >
                    "Edit"
                </A>
                <Button variant=ButtonVariant::Danger on_click=on_delete>
                    "Delete"
                </Button>
                <A
                    href=paths::job_applications(&job.id)
                    {..}
                    class="px-4 py-2 text-sm font-medium text-white bg-blue-600 rounded-lg hover:bg-blue-700"
                >
                    "View Applications"
                </A>
            </div>
        </div>
    }
}

fn confirm_delete() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message("Are you sure you want to delete this job?")
                .ok()
        })
        .unwrap_or(false)
}
