use crate::api::{Employee, LeaveRequest};
use crate::components::empty_state::EmptyState;
use crate::pages::leaves::utils::{resolve_employee_name, status_badge_classes};
use leptos::*;

#[component]
pub fn StatusBadge(leave: LeaveRequest) -> impl IntoView {
    let classes = format!(
        "px-2 py-0.5 rounded-full text-xs font-semibold {}",
        status_badge_classes(leave.status_kind())
    );
    view! { <span class=classes>{leave.status_label()}</span> }
}

#[component]
pub fn LeaveList(
    #[prop(into)] items: Signal<Vec<LeaveRequest>>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <ul class="divide-y">
            <For
                each=move || items.get()
                key=|leave| leave.id.clone()
                children=move |leave| {
                    let employee_id = leave.employee_id.clone();
                    let period = leave.period();
                    let reason = leave
                        .reason
                        .clone()
                        .filter(|text| !text.trim().is_empty())
                        .map(|text| view! { <p class="text-sm text-gray-600">{text}</p> });
                    view! {
                        <li class="py-2 flex items-start justify-between">
                            <div>
                                <p class="font-medium text-gray-800">
                                    {move || employees.with(|all| resolve_employee_name(all, &employee_id))}
                                </p>
                                <p class="text-sm text-gray-500">{period}</p>
                                {reason}
                            </div>
                            <StatusBadge leave=leave />
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || items.with(Vec::is_empty) && !loading.get()>
            <EmptyState title="No leave requests yet." />
        </Show>
    }
}
