use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::auth::{CheckingSession, client, state::use_session, use_navigator};
use hireboard::AppError;
use hireboard::paths;
use hireboard::session::{GuardState, LoginRequest, login_failure_message, redirect_if_signed_in};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);
    let state = RwSignal::new(GuardState::Unknown);

    {
        let session = session.clone();
        let navigator = navigator.clone();
        Effect::new(move |_| {
            // The form stays hidden for visitors who already hold a session.
            if redirect_if_signed_in(session.store(), &navigator, paths::DASHBOARD) {
                state.set(GuardState::Authenticated);
            } else {
                state.set(GuardState::Unauthenticated);
            }
        });
    }

    let login_action = Action::new_local(|request: &LoginRequest| {
        let request = request.clone();
        async move { client::login(&request).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result.and_then(|token| session.establish(&token)) {
                Ok(_) => navigator(paths::DASHBOARD),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        match LoginRequest::from_input(&username.get_untracked(), &password.get_untracked()) {
            Ok(request) => {
                login_action.dispatch(request);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    view! {
        <AppShell>
            <Show
                when=move || state.get() == GuardState::Unauthenticated
                fallback=|| view! { <CheckingSession /> }
            >
                <form class="max-w-sm mx-auto space-y-5" on:submit=on_submit>
                    <h1 class="text-2xl font-semibold text-gray-900">"Recruiter sign in"</h1>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900" for="username">
                            "Username"
                        </label>
                        <input
                            id="username"
                            type="text"
                            class=INPUT_CLASS
                            autocomplete="username"
                            required
                            on:input=move |event| set_username.set(event_target_value(&event))
                        />
                    </div>
                    <div>
                        <label class="block mb-2 text-sm font-medium text-gray-900" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class=INPUT_CLASS
                            autocomplete="current-password"
                            required
                            on:input=move |event| set_password.set(event_target_value(&event))
                        />
                    </div>
                    <Button button_type="submit" disabled=login_action.pending()>
                        "Sign in"
                    </Button>
                    {move || {
                        login_action
                            .pending()
                            .get()
                            .then_some(view! { <div class="mt-4"><Spinner /></div> })
                    }}
                    {move || {
                        error
                            .get()
                            .map(|err| {
                                view! {
                                    <div class="mt-4">
                                        <Alert kind=AlertKind::Error message=login_failure_message(&err) />
                                    </div>
                                }
                            })
                    }}
                </form>
            </Show>
        </AppShell>
    }
}
