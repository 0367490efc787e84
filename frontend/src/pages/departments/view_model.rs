use crate::api::{ApiClient, Department};
use crate::pages::departments::{repository::DepartmentsRepository, utils::DepartmentFormState};
use crate::state::panel::PanelState;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DepartmentsViewModel {
    pub form: DepartmentFormState,
    pub panel: PanelState<DepartmentsRepository>,
}

impl DepartmentsViewModel {
    /// Builds the panel state and starts the initial load.
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let vm = Self {
            form: DepartmentFormState::default(),
            panel: PanelState::new(DepartmentsRepository::new(api)),
        };
        vm.load();
        vm
    }

    pub fn load(&self) {
        self.panel.load();
    }

    pub fn create(&self) {
        match self.form.to_payload() {
            Ok(payload) => {
                let form = self.form;
                self.panel.submit(payload, move || form.reset());
            }
            Err(err) => log::debug!("department not submitted: {}", err),
        }
    }

    pub fn departments(&self) -> Signal<Vec<Department>> {
        let snapshot = self.panel.snapshot;
        Signal::derive(move || snapshot.get())
    }
}
