use crate::components::{
    common::Button,
    error::InlineErrorMessage,
    forms::{DateInput, SelectInput, TextArea},
    layout::{Card, LoadingIndicator, SectionHeader},
};
use crate::pages::leaves::{components::LeaveList, view_model::LeavesViewModel};
use leptos::*;

#[component]
pub fn LeavesPanel() -> impl IntoView {
    let vm = LeavesViewModel::new();
    let form = vm.form;
    let loading = vm.panel.loading;

    view! {
        <div>
            <SectionHeader title="Leave Requests" subtitle="Submit and track time off" />
            <InlineErrorMessage error=vm.panel.error />
            <div class="grid md:grid-cols-2 gap-6">
                <Card>
                    <SelectInput
                        label="Employee"
                        value=form.employee_id_signal()
                        options=vm.employee_options()
                        placeholder="Select employee"
                    />
                    <div class="grid grid-cols-2 gap-x-4">
                        <DateInput label="Start date" value=form.start_date_signal() />
                        <DateInput label="End date" value=form.end_date_signal() />
                    </div>
                    <TextArea label="Reason" value=form.reason_signal() rows=3 placeholder="Optional" />
                    <Button loading=vm.panel.submitting on_click=Callback::new(move |_| vm.create())>
                        "Submit Leave"
                    </Button>
                </Card>
                <Card>
                    <div class="flex items-center justify-between mb-3">
                        <h3 class="font-semibold text-gray-700">"All Requests"</h3>
                        <LoadingIndicator visible=loading />
                    </div>
                    <LeaveList items=vm.leaves() employees=vm.employees() loading=loading />
                </Card>
            </div>
        </div>
    }
}
