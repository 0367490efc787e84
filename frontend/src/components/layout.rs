use leptos::*;

#[component]
pub fn SectionHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
) -> impl IntoView {
    view! {
        <div class="mb-6">
            <h2 class="text-2xl font-bold text-gray-800">{title}</h2>
            {subtitle.map(|subtitle| view! { <p class="text-gray-500 text-sm mt-1">{subtitle}</p> })}
        </div>
    }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="bg-white p-4 rounded-lg border">{children()}</div> }
}

#[component]
pub fn LoadingIndicator(#[prop(into)] visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <span class="text-xs text-gray-500">{"Loading..."}</span>
        </Show>
    }
}
