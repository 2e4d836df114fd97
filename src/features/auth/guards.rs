use crate::components::Spinner;
use crate::features::auth::state::use_session;
use hireboard::paths;
use hireboard::session::{GuardState, check_session};
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Router navigation as a plain `Fn(&str)`, usable wherever the session
/// helpers expect a navigator.
pub fn use_navigator() -> impl Fn(&str) + Clone + 'static {
    let navigate = use_navigate();
    move |path: &str| navigate(path, NavigateOptions::default())
}

/// Renders `children` only once a session credential has been found.
///
/// Children are not constructed until then, so their resources do not start
/// fetching for anonymous visitors.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();
    let state = RwSignal::new(GuardState::Unknown);

    Effect::new(move |_| {
        // UX-only guard; real access control must live on the API.
        let resolved = check_session(session.store(), &navigator, paths::LOGIN);
        session.refresh();
        state.set(resolved);
    });

    view! {
        <Show
            when=move || state.get() == GuardState::Authenticated
            fallback=|| view! { <CheckingSession /> }
        >
            {children()}
        </Show>
    }
}

/// Placeholder shown while the stored credential is being looked at.
#[component]
pub fn CheckingSession() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 min-h-[50vh]">
            <Spinner />
            <p class="text-sm text-gray-500">"Checking authentication..."</p>
        </div>
    }
}
