use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::{SelectInput, TextInput},
    layout::{Card, LoadingIndicator, SectionHeader},
};
use crate::pages::employees::{components::EmployeeRoster, view_model::EmployeesViewModel};
use leptos::*;

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = EmployeesViewModel::new();
    let form = vm.form;
    let loading = vm.panel.loading;

    view! {
        <div>
            <SectionHeader title="Employees" subtitle="Add team members and view roster" />
            <InlineErrorMessage error=vm.panel.error />
            <div class="grid md:grid-cols-2 gap-6">
                <Card>
                    <div class="grid grid-cols-2 gap-x-4">
                        <TextInput label="First name" value=form.first_name_signal() />
                        <TextInput label="Last name" value=form.last_name_signal() />
                    </div>
                    <TextInput label="Email" value=form.email_signal() input_type="email" />
                    <TextInput label="Phone" value=form.phone_signal() />
                    <TextInput label="Role" value=form.role_signal() />
                    <SelectInput
                        label="Department"
                        value=form.department_id_signal()
                        options=vm.department_options()
                        placeholder="Unassigned"
                    />
                    <Button loading=vm.panel.submitting on_click=Callback::new(move |_| vm.create())>
                        "Add Employee"
                    </Button>
                </Card>
                <Card>
                    <div class="flex items-center justify-between mb-3">
                        <h3 class="font-semibold text-gray-700">"Roster"</h3>
                        <LoadingIndicator visible=loading />
                    </div>
                    <EmployeeRoster items=vm.employees() departments=vm.departments() loading=loading />
                </Card>
            </div>
        </div>
    }
}
