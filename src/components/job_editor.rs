//! Create/edit form for job postings. The page owns the submit action; this
//! component only validates and dispatches.

use crate::components::{Alert, AlertKind, Button, ButtonVariant};
use hireboard::AppError;
use hireboard::jobs::{JobField, JobForm};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5";

#[component]
pub fn JobEditor(
    initial: JobForm,
    #[prop(into)] heading: String,
    submit_label: &'static str,
    action: Action<JobForm, Result<(), AppError>>,
) -> impl IntoView {
    let form = RwSignal::new(initial);
    let (error, set_error) = signal::<Option<AppError>>(None);
    let responsibility_count = Memo::new(move |_| form.with(|f| f.responsibilities.len()));

    Effect::new(move |_| {
        if let Some(Err(err)) = action.value().get() {
            set_error.set(Some(err));
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        match form.with_untracked(JobForm::validate) {
            Ok(valid) => {
                action.dispatch(valid);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    let fields = JobField::ALL
        .into_iter()
        .map(|field| {
            let value = move || form.with(|f| f.field(field).to_string());
            let on_input = move |event| {
                let text = event_target_value(&event);
                form.update(|f| f.set_field(field, text));
            };
            if field.is_multiline() {
                view! {
                    <textarea
                        class=INPUT_CLASS
                        rows="4"
                        placeholder=field.placeholder()
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        type="text"
                        class=INPUT_CLASS
                        placeholder=field.placeholder()
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any()
            }
        })
        .collect_view();

    view! {
        <form class="max-w-2xl mx-auto space-y-4" on:submit=on_submit>
            <h1 class="text-2xl font-semibold text-gray-900">{heading}</h1>
            {fields}
            <div class="space-y-2">
                <span class="block text-sm font-medium text-gray-700">"Responsibilities"</span>
                {move || {
                    (0..responsibility_count.get())
                        .map(|index| {
                            view! {
                                <div class="flex gap-2">
                                    <input
                                        type="text"
                                        class=INPUT_CLASS
                                        placeholder=format!("Responsibility {}", index + 1)
                                        prop:value=move || {
                                            form.with(|f| {
                                                f.responsibilities
                                                    .get(index)
                                                    .cloned()
                                                    .unwrap_or_default()
                                            })
                                        }
                                        on:input=move |event| {
                                            let text = event_target_value(&event);
                                            form.update(|f| f.set_responsibility(index, text));
                                        }
                                    />
                                    {(index > 0)
                                        .then(|| {
                                            view! {
                                                <button
                                                    type="button"
                                                    class="px-3 text-sm text-red-600 hover:text-red-800"
                                                    on:click=move |_| {
                                                        form.update(|f| f.remove_responsibility(index));
                                                    }
                                                >
                                                    "Remove"
                                                </button>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect_view()
                }}
                <button
                    type="button"
                    class="text-sm font-medium text-blue-600 hover:text-blue-800"
                    on:click=move |_| form.update(JobForm::add_responsibility)
                >
                    "+ Add responsibility"
                </button>
            </div>
            <Button button_type="submit" variant=ButtonVariant::Primary disabled=action.pending()>
                {submit_label}
            </Button>
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
        </form>
    }
}
