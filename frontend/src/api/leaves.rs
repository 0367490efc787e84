use super::{
    client::ApiClient,
    types::{ApiError, CreateLeaveRequest, LeaveRequest},
};

pub const LEAVES_PATH: &str = "/api/leaves";

impl ApiClient {
    pub async fn list_leaves(&self) -> Result<Vec<LeaveRequest>, ApiError> {
        self.get(LEAVES_PATH).await
    }

    pub async fn create_leave(
        &self,
        payload: &CreateLeaveRequest,
    ) -> Result<LeaveRequest, ApiError> {
        self.post(LEAVES_PATH, payload).await
    }
}
