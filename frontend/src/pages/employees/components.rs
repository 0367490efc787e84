use crate::api::{Department, Employee};
use crate::components::empty_state::EmptyState;
use crate::pages::employees::utils::resolve_department_name;
use leptos::*;

fn headline(employee: &Employee) -> String {
    match employee.role.as_deref().filter(|role| !role.trim().is_empty()) {
        Some(role) => format!("{} · {}", employee.full_name(), role),
        None => employee.full_name(),
    }
}

fn contact_line(employee: &Employee) -> String {
    match employee.phone.as_deref().filter(|phone| !phone.trim().is_empty()) {
        Some(phone) => format!("{} · {}", employee.email, phone),
        None => employee.email.clone(),
    }
}

#[component]
pub fn EmployeeRoster(
    #[prop(into)] items: Signal<Vec<Employee>>,
    #[prop(into)] departments: Signal<Vec<Department>>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <ul class="divide-y">
            <For
                each=move || items.get()
                key=|employee| employee.id.clone()
                children=move |employee| {
                    let department_line = employee.department_id.clone().map(|id| {
                        view! {
                            <p class="text-xs text-gray-500">
                                "Dept: "
                                {move || departments.with(|all| resolve_department_name(all, &id))}
                            </p>
                        }
                    });
                    view! {
                        <li class="py-2">
                            <p class="font-medium text-gray-800">{headline(&employee)}</p>
                            <p class="text-sm text-gray-600">{contact_line(&employee)}</p>
                            {department_line}
                        </li>
                    }
                }
            />
        </ul>
        <Show when=move || items.with(Vec::is_empty) && !loading.get()>
            <EmptyState title="No employees yet." />
        </Show>
    }
}
