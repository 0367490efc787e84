use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::{TextArea, TextInput},
    layout::{Card, LoadingIndicator, SectionHeader},
};
use crate::pages::departments::{components::DepartmentList, view_model::DepartmentsViewModel};
use leptos::*;

#[component]
pub fn DepartmentsPanel() -> impl IntoView {
    let vm = DepartmentsViewModel::new();
    let form = vm.form;
    let loading = vm.panel.loading;

    view! {
        <div>
            <SectionHeader title="Departments" subtitle="Create and manage departments" />
            <InlineErrorMessage error=vm.panel.error />
            <div class="grid md:grid-cols-2 gap-6">
                <Card>
                    <TextInput label="Name" value=form.name_signal() placeholder="e.g. Engineering" />
                    <TextArea label="Description" value=form.description_signal() rows=3 placeholder="Optional" />
                    <Button loading=vm.panel.submitting on_click=Callback::new(move |_| vm.create())>
                        "Add Department"
                    </Button>
                </Card>
                <Card>
                    <div class="flex items-center justify-between mb-3">
                        <h3 class="font-semibold text-gray-700">"All Departments"</h3>
                        <LoadingIndicator visible=loading />
                    </div>
                    <DepartmentList items=vm.departments() loading=loading />
                </Card>
            </div>
        </div>
    }
}
