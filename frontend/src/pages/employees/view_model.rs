use crate::api::{ApiClient, Department, Employee};
use crate::components::forms::SelectOption;
use crate::pages::employees::{repository::EmployeesRepository, utils::EmployeeFormState};
use crate::state::panel::PanelState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub form: EmployeeFormState,
    pub panel: PanelState<EmployeesRepository>,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            form: EmployeeFormState::default(),
            panel: PanelState::new(EmployeesRepository::new(api)),
        };
        vm.load();
        vm
    }

    pub fn load(&self) {
        self.panel.load();
    }

    pub fn create(&self) {
        let departments = self.panel.snapshot.with_untracked(|s| s.departments.clone());
        match self.form.to_payload(&departments) {
            Ok(payload) => {
                let form = self.form;
                self.panel.submit(payload, move || form.reset());
            }
            Err(err) => log::debug!("employee not submitted: {}", err),
        }
    }

    pub fn employees(&self) -> Signal<Vec<Employee>> {
        let snapshot = self.panel.snapshot;
        Signal::derive(move || snapshot.with(|s| s.employees.clone()))
    }

    pub fn departments(&self) -> Signal<Vec<Department>> {
        let snapshot = self.panel.snapshot;
        Signal::derive(move || snapshot.with(|s| s.departments.clone()))
    }

    pub fn department_options(&self) -> Signal<Vec<SelectOption>> {
        let departments = self.departments();
        Signal::derive(move || {
            departments
                .get()
                .into_iter()
                .map(|department| SelectOption::new(department.id.to_string(), department.name))
                .collect()
        })
    }
}
