use super::{
    client::ApiClient,
    types::{ApiError, CreateDepartment, Department},
};

pub const DEPARTMENTS_PATH: &str = "/api/departments";

impl ApiClient {
    pub async fn list_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get(DEPARTMENTS_PATH).await
    }

    pub async fn create_department(
        &self,
        payload: &CreateDepartment,
    ) -> Result<Department, ApiError> {
        self.post(DEPARTMENTS_PATH, payload).await
    }
}
