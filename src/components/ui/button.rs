use leptos::prelude::*;

#[derive(Clone, Copy, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Success,
    Danger,
    Secondary,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "text-white bg-blue-600 hover:bg-blue-700 focus:ring-blue-300"
            }
            ButtonVariant::Success => {
                "text-white bg-green-500 hover:bg-green-600 focus:ring-green-300"
            }
            ButtonVariant::Danger => "text-white bg-red-500 hover:bg-red-600 focus:ring-red-300",
            ButtonVariant::Secondary => {
                "text-gray-900 bg-white border border-gray-200 hover:bg-gray-100 focus:ring-gray-200"
            }
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let class = format!(
        "{} focus:ring-4 focus:outline-none font-medium rounded-lg text-sm px-4 py-2 text-center transition",
        variant.class()
    );

    view! {
        <button
            type=button_type
            class=class
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |_| {
                if let Some(callback) = on_click {
                    callback.run(());
                }
            }
        >
            {children()}
        </button>
    }
}
