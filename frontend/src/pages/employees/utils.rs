use crate::api::{ApiError, CreateEmployee, Department, EntityId};
use crate::utils::text::{is_blank, optional_string};
use leptos::*;

#[derive(Clone, Copy)]
pub struct EmployeeFormState {
    first_name: RwSignal<String>,
    last_name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    role: RwSignal<String>,
    department_id: RwSignal<String>,
}

impl Default for EmployeeFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            phone: create_rw_signal(String::new()),
            role: create_rw_signal(String::new()),
            department_id: create_rw_signal(String::new()),
        }
    }
}

impl EmployeeFormState {
    pub fn first_name_signal(&self) -> RwSignal<String> {
        self.first_name
    }

    pub fn last_name_signal(&self) -> RwSignal<String> {
        self.last_name
    }

    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn phone_signal(&self) -> RwSignal<String> {
        self.phone
    }

    pub fn role_signal(&self) -> RwSignal<String> {
        self.role
    }

    pub fn department_id_signal(&self) -> RwSignal<String> {
        self.department_id
    }

    pub fn reset(&self) {
        for field in [
            self.first_name,
            self.last_name,
            self.email,
            self.phone,
            self.role,
            self.department_id,
        ] {
            field.set(String::new());
        }
    }

    /// Required fields go out as typed; blank optionals are left off the payload.
    /// The selected department is sent back as the id value it was loaded with.
    pub fn to_payload(&self, departments: &[Department]) -> Result<CreateEmployee, ApiError> {
        let first_name = self.first_name.get_untracked();
        let last_name = self.last_name.get_untracked();
        let email = self.email.get_untracked();
        if is_blank(&first_name) || is_blank(&last_name) || is_blank(&email) {
            return Err(ApiError::validation(
                "First name, last name and email are required",
            ));
        }
        Ok(CreateEmployee {
            first_name,
            last_name,
            email,
            phone: optional_string(self.phone.get_untracked()),
            department_id: optional_string(self.department_id.get_untracked()).map(|raw| {
                EntityId::from_select(&raw, departments.iter().map(|department| &department.id))
            }),
            role: optional_string(self.role.get_untracked()),
        })
    }
}

/// Department name for `id`, or the id itself when no loaded department matches.
pub fn resolve_department_name(departments: &[Department], id: &EntityId) -> String {
    departments
        .iter()
        .find(|department| department.id == *id)
        .map(|department| department.name.clone())
        .unwrap_or_else(|| id.to_string())
}
