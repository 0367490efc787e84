use crate::api::{ApiError, CreateDepartment};
use crate::utils::text::is_blank;
use leptos::*;

#[derive(Clone, Copy)]
pub struct DepartmentFormState {
    name: RwSignal<String>,
    description: RwSignal<String>,
}

impl Default for DepartmentFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl DepartmentFormState {
    pub fn name_signal(&self) -> RwSignal<String> {
        self.name
    }

    pub fn description_signal(&self) -> RwSignal<String> {
        self.description
    }

    pub fn reset(&self) {
        self.name.set(String::new());
        self.description.set(String::new());
    }

    /// The description goes out exactly as typed, including "".
    pub fn to_payload(&self) -> Result<CreateDepartment, ApiError> {
        let name = self.name.get_untracked();
        if is_blank(&name) {
            return Err(ApiError::validation("Department name is required"));
        }
        Ok(CreateDepartment {
            name,
            description: self.description.get_untracked(),
        })
    }
}
