//! Applications received for one posting, split into review tabs. Status
//! changes are applied optimistically and reverted if the backend refuses.

use super::IdParams;
use crate::components::{Alert, AlertKind, AppShell, Button, ButtonVariant, Spinner};
use crate::features::applications::client;
use crate::features::auth::{RequireSession, state::use_session};
use hireboard::config::AppConfig;
use hireboard::jobs::{
    Application, ApplicationStatus, StatusTab, apply_status, display_date, filter_by_tab,
    format_amount, revert_status,
};
use hireboard::paths;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params;

const UPDATE_FAILED: &str = "Failed to update application status. Please try again.";

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    view! {
        <AppShell>
            <RequireSession>
                <ApplicationsContent />
            </RequireSession>
        </AppShell>
    }
}

#[component]
fn ApplicationsContent() -> impl IntoView {
    let params = use_params::<IdParams>();
    let applications = LocalResource::new(move || {
        let job_id = params
            .get()
            .ok()
            .and_then(|params| params.id)
            .unwrap_or_default();
        async move { client::list_for_job(&job_id).await }
    });

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-semibold text-gray-900">"Job Applications"</h1>
                <A
                    href=paths::DASHBOARD
                    {..}
                    class="text-sm font-medium text-blue-600 hover:text-blue-800"
                >
                    "Back to Dashboard"
                </A>
            </div>
            <Suspense fallback=move || view! { <Spinner /> }>
                {move || match applications.get() {
                    Some(Ok(list)) => view! { <ApplicationBoard initial=list /> }.into_any(),
                    Some(Err(err)) => {
                        view! { <Alert kind=AlertKind::Error message=err.to_string() /> }
                            .into_any()
                    }
                    None => view! { <Spinner /> }.into_any(),
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ApplicationBoard(initial: Vec<Application>) -> impl IntoView {
    let session = use_session();
    let applications = RwSignal::new(initial);
    let tab = RwSignal::new(StatusTab::default());
    let error = RwSignal::new(None::<&'static str>);

    let on_status = Callback::new(move |(id, status): (String, ApplicationStatus)| {
        error.set(None);
        let mut previous = None;
        applications.update(|list| previous = apply_status(list, &id, status.clone()));
        let Some(previous) = previous else {
            return;
        };

        let credential = session.credential();
        spawn_local(async move {
            if let Err(err) = client::update_status(&id, status.clone(), credential.as_ref()).await
            {
                log::warn!("application status update failed: {err}");
                applications.update(|list| {
                    revert_status(list, &id, &status, previous);
                });
                error.set(Some(UPDATE_FAILED));
            }
        });
    });

    let visible = move || applications.with(|list| filter_by_tab(list, tab.get()));

    view! {
        <div class="space-y-4">
            <div class="flex gap-2 border-b border-gray-200">
                {StatusTab::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                class="px-4 py-2 text-sm font-medium border-b-2 -mb-px"
                                class:border-blue-600=move || tab.get() == option
                                class:text-blue-600=move || tab.get() == option
                                class:border-transparent=move || tab.get() != option
                                class:text-gray-500=move || tab.get() != option
                                on:click=move |_| tab.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                error
                    .get()
                    .map(|message| view! { <Alert kind=AlertKind::Error message=message /> })
            }}
            <Show
                when=move || !visible().is_empty()
                fallback=move || {
                    view! { <p class="text-gray-500">{move || tab.get().empty_message()}</p> }
                }
            >
                <ul class="space-y-4">
                    <For
                        each=visible
                        key=|application| {
                            (application.id.clone(), application.status.as_str().to_string())
                        }
                        children=move |application| {
                            view! { <ApplicationCard application=application on_status=on_status /> }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn ApplicationCard(
    application: Application,
    on_status: Callback<(String, ApplicationStatus)>,
) -> impl IntoView {
    let resume_url = AppConfig::load().api_url(&application.resume);
    let badge = match application.status {
        ApplicationStatus::Shortlisted => "bg-green-100 text-green-800",
        ApplicationStatus::Rejected => "bg-red-100 text-red-800",
        ApplicationStatus::Pending | ApplicationStatus::Other(_) => {
            "bg-yellow-100 text-yellow-800"
        }
    };
    let reject_id = application.id.clone();
    let shortlist_id = application.id.clone();

    view! {
        <li class="p-6 text-sm bg-white border border-gray-200 rounded-lg shadow-sm space-y-1">
            <div class="flex justify-between items-center mb-2">
                <h3 class="text-xl font-semibold text-gray-900">{application.name}</h3>
                <span class=format!("px-3 py-1 text-sm font-medium rounded-full {badge}")>
                    {application.status.to_string()}
                </span>
            </div>
            <p class="text-gray-700">
                <strong>"Email: "</strong>
                {application.email}
            </p>
            <p class="text-gray-700">
                <strong>"Current CTC: "</strong>
                {format_amount(application.current_ctc)}
            </p>
            <p class="text-gray-700">
                <strong>"Expected CTC: "</strong>
                {format_amount(application.expected_ctc)}
            </p>
            {application
                .application_date
                .map(|date| {
                    view! {
                        <p class="text-gray-700">
                            <strong>"Applied Date: "</strong>
                            {display_date(&date)}
                        </p>
                    }
                })}
            {application
                .other_details
                .map(|details| {
                    view! {
                        <p class="text-gray-700">
                            <strong>"Additional Details: "</strong>
                            {details}
                        </p>
                    }
                })}
            {application
                .cover_letter
                .map(|letter| {
                    view! {
                        <p class="text-gray-700">
                            <strong>"Cover Letter: "</strong>
                            {letter}
                        </p>
                    }
                })}
            <div class="mt-4 flex justify-between items-center">
                <a
                    href=resume_url
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-600 font-semibold hover:underline"
                >
                    "View Resume"
                </a>
                <div class="flex gap-2">
                    <Button
                        variant=ButtonVariant::Danger
                        on_click=move |()| {
                            on_status.run((reject_id.clone(), ApplicationStatus::Rejected));
                        }
                    >
                        "Reject"
                    </Button>
                    <Button
                        variant=ButtonVariant::Success
                        on_click=move |()| {
                            on_status.run((shortlist_id.clone(), ApplicationStatus::Shortlisted));
                        }
                    >
                        "Shortlist"
                    </Button>
                </div>
            </div>
        </li>
    }
}
