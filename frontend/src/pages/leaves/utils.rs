use crate::api::{ApiError, CreateLeaveRequest, Employee, EntityId, LeaveStatus};
use crate::utils::text::{is_blank, optional_string};
use chrono::NaiveDate;
use leptos::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    employee_id: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            employee_id: create_rw_signal(String::new()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

fn parse_date(label: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ApiError::validation(format!("{} must be a YYYY-MM-DD date", label)))
}

impl LeaveFormState {
    pub fn employee_id_signal(&self) -> RwSignal<String> {
        self.employee_id
    }

    pub fn start_date_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_date_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        for field in [self.employee_id, self.start_date, self.end_date, self.reason] {
            field.set(String::new());
        }
    }

    /// Date ordering is left to the backend. The employee goes out as the id
    /// value it was loaded with.
    pub fn to_payload(&self, employees: &[Employee]) -> Result<CreateLeaveRequest, ApiError> {
        let employee_id = self.employee_id.get_untracked();
        let start_date = self.start_date.get_untracked();
        let end_date = self.end_date.get_untracked();
        if is_blank(&employee_id) || is_blank(&start_date) || is_blank(&end_date) {
            return Err(ApiError::validation(
                "Employee, start date and end date are required",
            ));
        }
        Ok(CreateLeaveRequest {
            employee_id: EntityId::from_select(
                &employee_id,
                employees.iter().map(|employee| &employee.id),
            ),
            start_date: parse_date("Start date", &start_date)?,
            end_date: parse_date("End date", &end_date)?,
            reason: optional_string(self.reason.get_untracked()),
        })
    }
}

pub fn resolve_employee_name(employees: &[Employee], id: &EntityId) -> String {
    employees
        .iter()
        .find(|employee| employee.id == *id)
        .map(Employee::full_name)
        .unwrap_or_else(|| id.to_string())
}

pub fn status_badge_classes(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "bg-green-100 text-green-700",
        LeaveStatus::Rejected => "bg-red-100 text-red-700",
        LeaveStatus::Pending => "bg-yellow-100 text-yellow-700",
    }
}
