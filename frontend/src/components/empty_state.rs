use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="py-2">
            <p class="text-sm text-gray-500">{title}</p>
            {description.map(|desc| view! { <p class="mt-1 text-xs text-gray-400">{desc}</p> })}
        </div>
    }
}
