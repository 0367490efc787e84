use crate::api::{ApiClient, Employee, LeaveRequest};
use crate::components::forms::SelectOption;
use crate::pages::leaves::{repository::LeavesRepository, utils::LeaveFormState};
use crate::state::panel::PanelState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeavesViewModel {
    pub form: LeaveFormState,
    pub panel: PanelState<LeavesRepository>,
}

impl LeavesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            form: LeaveFormState::default(),
            panel: PanelState::new(LeavesRepository::new(api)),
        };
        vm.load();
        vm
    }

    pub fn load(&self) {
        self.panel.load();
    }

    pub fn create(&self) {
        let employees = self.panel.snapshot.with_untracked(|s| s.employees.clone());
        match self.form.to_payload(&employees) {
            Ok(payload) => {
                let form = self.form;
                self.panel.submit(payload, move || form.reset());
            }
            Err(err) => log::debug!("leave request not submitted: {}", err),
        }
    }

    pub fn leaves(&self) -> Signal<Vec<LeaveRequest>> {
        let snapshot = self.panel.snapshot;
        Signal::derive(move || snapshot.with(|s| s.leaves.clone()))
    }

    pub fn employees(&self) -> Signal<Vec<Employee>> {
        let snapshot = self.panel.snapshot;
        Signal::derive(move || snapshot.with(|s| s.employees.clone()))
    }

    pub fn employee_options(&self) -> Signal<Vec<SelectOption>> {
        let employees = self.employees();
        Signal::derive(move || {
            employees
                .get()
                .into_iter()
                .map(|employee| SelectOption::new(employee.id.to_string(), employee.full_name()))
                .collect()
        })
    }
}
