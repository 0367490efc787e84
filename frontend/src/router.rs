use leptos::*;
use leptos_meta::*;

use crate::{
    api::ApiClient,
    components::common::{Button, ButtonVariant},
    config,
    pages::{departments::DepartmentsPanel, employees::EmployeesPanel, leaves::LeavesPanel},
};

pub const BACKEND_CHECK_PATH: &str = "/test";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Employees,
    Departments,
    Leaves,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Employees, Tab::Departments, Tab::Leaves];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Employees => "Employees",
            Tab::Departments => "Departments",
            Tab::Leaves => "Leaves",
        }
    }
}

/// Builds a fresh panel for `tab`. Each call owns its own state and starts its own load.
pub fn panel_for(tab: Tab) -> View {
    match tab {
        Tab::Employees => view! { <EmployeesPanel /> }.into_view(),
        Tab::Departments => view! { <DepartmentsPanel /> }.into_view(),
        Tab::Leaves => view! { <LeavesPanel /> }.into_view(),
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    view! { <App /> }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let tab = create_rw_signal(Tab::default());

    view! {
        <Title text="HRMS" />
        <div class="min-h-screen bg-gray-50">
            <header class="bg-white shadow">
                <div class="max-w-6xl mx-auto px-4 py-4 flex flex-wrap items-center justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold text-gray-900">"HRMS"</h1>
                        <p class="text-xs text-gray-500">"Backend: " {config::backend_url()}</p>
                    </div>
                    <nav class="flex items-center gap-2">
                        {Tab::ALL
                            .into_iter()
                            .map(|item| {
                                let variant = Signal::derive(move || {
                                    if tab.get() == item {
                                        ButtonVariant::Primary
                                    } else {
                                        ButtonVariant::Secondary
                                    }
                                });
                                view! {
                                    <Button variant=variant on_click=Callback::new(move |_| tab.set(item))>
                                        {item.label()}
                                    </Button>
                                }
                            })
                            .collect_view()}
                        <a
                            href=BACKEND_CHECK_PATH
                            class="px-4 py-2 rounded-md border border-gray-300 text-gray-700 hover:bg-gray-100"
                        >
                            "Check Backend"
                        </a>
                    </nav>
                </div>
            </header>
            <main class="max-w-6xl mx-auto px-4 py-6">{move || panel_for(tab.get())}</main>
            <footer class="text-center text-xs text-gray-400 py-4">"Simple HR Management • Demo"</footer>
        </div>
    }
}
