use super::{
    client::ApiClient,
    types::{ApiError, CreateEmployee, Employee},
};

pub const EMPLOYEES_PATH: &str = "/api/employees";

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.get(EMPLOYEES_PATH).await
    }

    pub async fn create_employee(&self, payload: &CreateEmployee) -> Result<Employee, ApiError> {
        self.post(EMPLOYEES_PATH, payload).await
    }
}
