use crate::app_lib::GIT_COMMIT_HASH;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="block max-w-[38rem] rounded-lg border border-gray-200 bg-white">
                    <div class="border-b border-gray-200 px-6 py-3 text-gray-600 font-semibold">
                        "Build Version"
                    </div>
                    <div class="p-6">
                        <pre class="text-center text-base text-black">{GIT_COMMIT_HASH}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
