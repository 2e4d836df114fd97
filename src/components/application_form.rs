//! Candidate-facing application form shown under a job posting.

use crate::components::{Alert, AlertKind, Button, ButtonVariant, Spinner};
use crate::features::applications::client;
use hireboard::AppError;
use hireboard::jobs::{ApplicationForm, validate_resume_name};
use leptos::ev::SubmitEvent;
use leptos::html::Input;
use leptos::prelude::*;

const INPUT_CLASS: &str = "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5";

type FieldSlot = fn(&mut ApplicationForm) -> &mut String;
type FieldValue = fn(&ApplicationForm) -> &str;

const FIELDS: [(&str, &str, FieldValue, FieldSlot); 5] = [
    ("Full name", "text", |form| form.name.as_str(), |form| &mut form.name),
    ("Email address", "email", |form| form.email.as_str(), |form| &mut form.email),
    (
        "Years of experience",
        "number",
        |form| form.experience.as_str(),
        |form| &mut form.experience,
    ),
    (
        "Current CTC",
        "number",
        |form| form.current_ctc.as_str(),
        |form| &mut form.current_ctc,
    ),
    (
        "Expected CTC",
        "number",
        |form| form.expected_ctc.as_str(),
        |form| &mut form.expected_ctc,
    ),
];

/// Collects candidate details and a resume and posts them as multipart.
#[component]
pub fn ApplicationFormPanel(#[prop(into)] job_id: String) -> impl IntoView {
    let form = RwSignal::new(ApplicationForm::default());
    let resume_ref = NodeRef::<Input>::new();
    let (error, set_error) = signal::<Option<AppError>>(None);
    let (submitted, set_submitted) = signal(false);
    let job_id = StoredValue::new(job_id);

    let submit_action = Action::new_local(move |input: &ApplicationForm| {
        let input = input.clone();
        async move {
            let resume = selected_resume(resume_ref)
                .ok_or_else(|| AppError::Validation("Please upload your resume.".to_string()))?;
            client::submit(&input, &job_id.get_value(), &resume).await
        }
    });

    Effect::new(move |_| match submit_action.value().get() {
        Some(Ok(())) => {
            form.set(ApplicationForm::default());
            if let Some(input) = resume_ref.get_untracked() {
                input.set_value("");
            }
            set_submitted.set(true);
        }
        Some(Err(err)) => set_error.set(Some(err)),
        None => {}
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);
        set_submitted.set(false);

        let current = form.get_untracked();
        let resume_name = selected_resume(resume_ref).map(|file| file.name());
        let checked = current
            .multipart_fields(&job_id.get_value())
            .and_then(|_| validate_resume_name(resume_name.as_deref()));
        match checked {
            Ok(()) => {
                submit_action.dispatch(current);
            }
            Err(err) => set_error.set(Some(err)),
        }
    };

    let inputs = FIELDS
        .into_iter()
        .map(|(label, kind, value, slot)| {
            view! {
                <label class="block">
                    <span class="block mb-1 text-sm font-medium text-gray-700">{label}</span>
                    <input
                        type=kind
                        class=INPUT_CLASS
                        prop:value=move || form.with(|f| value(f).to_string())
                        on:input=move |event| {
                            let text = event_target_value(&event);
                            form.update(|f| *slot(f) = text);
                        }
                    />
                </label>
            }
        })
        .collect_view();

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <h2 class="text-xl font-semibold text-gray-900">"Apply for this job"</h2>
            {inputs}
            <label class="block">
                <span class="block mb-1 text-sm font-medium text-gray-700">"Other details"</span>
                <textarea
                    class=INPUT_CLASS
                    rows="3"
                    prop:value=move || form.with(|f| f.other_details.clone())
                    on:input=move |event| {
                        let text = event_target_value(&event);
                        form.update(|f| f.other_details = text);
                    }
                ></textarea>
            </label>
            <label class="block">
                <span class="block mb-1 text-sm font-medium text-gray-700">
                    "Resume (.pdf, .doc, .docx)"
                </span>
                <input
                    type="file"
                    accept=".pdf,.doc,.docx"
                    class="block w-full text-sm text-gray-900"
                    node_ref=resume_ref
                />
            </label>
            <Button
                button_type="submit"
                variant=ButtonVariant::Success
                disabled=submit_action.pending()
            >
                "Submit application"
            </Button>
            {move || submit_action.pending().get().then_some(view! { <Spinner /> })}
            {move || {
                submitted
                    .get()
                    .then_some(
                        view! {
                            <Alert
                                kind=AlertKind::Success
                                message="Application submitted successfully."
                            />
                        },
                    )
            }}
            {move || {
                error
                    .get()
                    .map(|err| view! { <Alert kind=AlertKind::Error message=err.to_string() /> })
            }}
        </form>
    }
}

fn selected_resume(resume_ref: NodeRef<Input>) -> Option<web_sys::File> {
    resume_ref.get_untracked()?.files()?.get(0)
}
