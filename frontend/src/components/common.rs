use leptos::{ev::MouseEvent, *};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 hover:bg-blue-700",
            ButtonVariant::Secondary => "bg-gray-600 hover:bg-gray-700",
            ButtonVariant::Success => "bg-green-600 hover:bg-green-700",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional, into)] variant: MaybeSignal<ButtonVariant>,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || {
                format!(
                    "inline-flex items-center justify-center px-4 py-2 rounded-md text-white font-semibold transition-colors disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.get().classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.call(ev);
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}
