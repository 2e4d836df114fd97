//! Shared layout wrapper with navigation and content container. Navigation is
//! client-side only; the API must enforce access control on its own.

use crate::features::auth::{state::use_session, use_navigator};
use hireboard::paths;
use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

const NAV_LINK: &str = "block py-2 px-3 text-gray-900 rounded hover:bg-gray-100 md:hover:bg-transparent md:border-0 md:hover:text-blue-700 md:p-0";

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };
    let signed_in = use_session().signed_in;
    let location = use_location();
    let on_login = move || location.pathname.get() == paths::LOGIN;

    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4">
                    <A
                        href=paths::HOME
                        {..}
                        class="flex items-center space-x-2"
                        on:click=move |_| set_menu_open.set(false)
                    >
                        <span class="text-xl font-bold text-blue-600">"Hireboard"</span>
                    </A>
                    <button
                        type="button"
                        class="inline-flex items-center p-2 w-10 h-10 justify-center text-sm text-gray-500 rounded-lg md:hidden hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-200"
                        aria-controls="navbar-default"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=toggle_menu
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="w-5 h-5"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                    <div
                        id="navbar-default"
                        class="w-full md:block md:w-auto"
                        class:hidden=move || !menu_open.get()
                    >
                        <ul class="font-medium flex flex-col p-4 md:p-0 mt-4 border border-gray-100 rounded-lg bg-gray-50 md:flex-row md:space-x-8 md:mt-0 md:border-0 md:bg-white">
                            <li>
                                <A
                                    href=paths::HOME
                                    {..}
                                    class=NAV_LINK
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Jobs"
                                </A>
                            </li>
                            <Show
                                when=move || signed_in.get()
                                fallback=move || {
                                    view! {
                                        <Show when=move || !on_login()>
                                            <li>
                                                <A
                                                    href=paths::LOGIN
                                                    {..}
                                                    class=NAV_LINK
                                                    on:click=move |_| set_menu_open.set(false)
                                                >
                                                    "Sign In"
                                                </A>
                                            </li>
                                        </Show>
                                    }
                                }
                            >
                                <li>
                                    <A
                                        href=paths::DASHBOARD
                                        {..}
                                        class=NAV_LINK
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        "Dashboard"
                                    </A>
                                </li>
                                <li>
                                    <SignOutButton on_done=move |()| set_menu_open.set(false) />
                                </li>
                            </Show>
                        </ul>
                    </div>
                </div>
            </header>
            <main class="flex-1">
                <div class="container mx-auto p-4 mt-6">{children()}</div>
            </main>
        </div>
    }
}

#[component]
fn SignOutButton(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let session = use_session();
    let navigator = use_navigator();

    view! {
        <button
            type="button"
            class=NAV_LINK
            on:click=move |_| {
                session.end(&navigator);
                on_done.run(());
            }
        >
            "Sign Out"
        </button>
    }
}
