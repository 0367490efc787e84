use crate::api::{ApiClient, ApiError, CreateLeaveRequest, Employee, LeaveRequest};
use crate::state::panel::PanelRepository;
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeavesSnapshot {
    pub leaves: Vec<LeaveRequest>,
    pub employees: Vec<Employee>,
}

#[derive(Clone)]
pub struct LeavesRepository {
    client: Rc<ApiClient>,
}

impl LeavesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }
}

impl PanelRepository for LeavesRepository {
    type Snapshot = LeavesSnapshot;
    type Payload = CreateLeaveRequest;

    async fn load(&self) -> Result<LeavesSnapshot, ApiError> {
        let (leaves, employees) =
            futures::try_join!(self.client.list_leaves(), self.client.list_employees())?;
        Ok(LeavesSnapshot { leaves, employees })
    }

    async fn create(&self, payload: CreateLeaveRequest) -> Result<(), ApiError> {
        self.client.create_leave(&payload).await.map(|_| ())
    }
}
