use crate::api::{ApiClient, ApiError, CreateEmployee, Department, Employee};
use crate::state::panel::PanelRepository;
use std::rc::Rc;

/// Everything the employees panel renders: the roster plus the departments used
/// for the select and for resolving names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployeesSnapshot {
    pub employees: Vec<Employee>,
    pub departments: Vec<Department>,
}

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }
}

impl PanelRepository for EmployeesRepository {
    type Snapshot = EmployeesSnapshot;
    type Payload = CreateEmployee;

    async fn load(&self) -> Result<EmployeesSnapshot, ApiError> {
        let (employees, departments) =
            futures::try_join!(self.client.list_employees(), self.client.list_departments())?;
        Ok(EmployeesSnapshot {
            employees,
            departments,
        })
    }

    async fn create(&self, payload: CreateEmployee) -> Result<(), ApiError> {
        self.client.create_employee(&payload).await.map(|_| ())
    }
}
