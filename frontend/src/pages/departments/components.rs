use crate::api::Department;
use crate::components::empty_state::EmptyState;
use leptos::*;

#[component]
pub fn DepartmentList(
    #[prop(into)] items: Signal<Vec<Department>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <ul class="divide-y">
            <For
                each=move || items.get()
                key=|department| department.id.clone()
                children=move |department| {
                    let description = department
                        .description
                        .filter(|text| !text.trim().is_empty());
                    view! {
                        <li class="py-2">
                            <p class="font-medium text-gray-800">{department.name}</p>
                            {description.map(|text| view! { <p class="text-sm text-gray-500">{text}</p> })}
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || items.with(Vec::is_empty) && !loading.get()>
            <EmptyState title="No departments yet." />
        </Show>
    }
}
