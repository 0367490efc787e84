use crate::api::{ApiClient, ApiError, CreateDepartment, Department};
use crate::state::panel::PanelRepository;
use std::rc::Rc;

#[derive(Clone)]
pub struct DepartmentsRepository {
    client: Rc<ApiClient>,
}

impl DepartmentsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }
}

impl PanelRepository for DepartmentsRepository {
    type Snapshot = Vec<Department>;
    type Payload = CreateDepartment;

    async fn load(&self) -> Result<Vec<Department>, ApiError> {
        self.client.list_departments().await
    }

    async fn create(&self, payload: CreateDepartment) -> Result<(), ApiError> {
        self.client.create_department(&payload).await.map(|_| ())
    }
}
