use chrono::NaiveDate;
use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Backend-owned record key. Kept in whichever JSON form the backend used so it
/// round-trips unchanged into create payloads.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl EntityId {
    /// Maps a select value back to the loaded id it was rendered from, or keeps
    /// it as text when nothing matches.
    pub fn from_select<'a>(raw: &str, known: impl IntoIterator<Item = &'a EntityId>) -> Self {
        known
            .into_iter()
            .find(|id| **id == *raw)
            .cloned()
            .unwrap_or_else(|| EntityId::Text(raw.to_string()))
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityId::Number(value) => write!(f, "{}", value),
            EntityId::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for EntityId {
    fn from(value: &str) -> Self {
        EntityId::Text(value.to_string())
    }
}

impl From<String> for EntityId {
    fn from(value: String) -> Self {
        EntityId::Text(value)
    }
}

impl From<i64> for EntityId {
    fn from(value: i64) -> Self {
        EntityId::Number(value)
    }
}

impl PartialEq<str> for EntityId {
    fn eq(&self, other: &str) -> bool {
        match self {
            EntityId::Text(value) => value == other,
            EntityId::Number(value) => other.parse::<i64>().is_ok_and(|parsed| parsed == *value),
        }
    }
}

impl PartialEq<&str> for EntityId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub department_id: Option<EntityId>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Listed leave. Dates stay as the backend wrote them; one odd row must not
/// reject the whole list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: EntityId,
    pub employee_id: EntityId,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Anything the backend does not mark as approved or rejected is shown as pending.
    pub fn from_raw(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("approved") => LeaveStatus::Approved,
            Some("rejected") => LeaveStatus::Rejected,
            _ => LeaveStatus::Pending,
        }
    }
}

impl LeaveRequest {
    pub fn status_kind(&self) -> LeaveStatus {
        LeaveStatus::from_raw(self.status.as_deref())
    }

    pub fn status_label(&self) -> String {
        match self.status.as_deref().map(str::trim) {
            Some(status) if !status.is_empty() => status.to_string(),
            _ => "pending".to_string(),
        }
    }

    pub fn period(&self) -> String {
        format!(
            "{} → {}",
            self.start_date.as_deref().unwrap_or_default(),
            self.end_date.as_deref().unwrap_or_default()
        )
    }
}

/// `description` is sent as typed, empty string included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDepartment {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLeaveRequest {
    pub employee_id: EntityId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Request,
    Network,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    pub const VALIDATION: &'static str = "VALIDATION_ERROR";
    pub const REQUEST: &'static str = "REQUEST_ERROR";
    pub const NETWORK: &'static str = "NETWORK_ERROR";
    pub const UNKNOWN: &'static str = "UNKNOWN";

    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::VALIDATION)
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::UNKNOWN)
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::with_code(msg, Self::NETWORK)
    }

    /// Non-success response; the message carries the response body text.
    pub fn request(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let error = if body.trim().is_empty() {
            format!("Request failed with status {}", status)
        } else {
            body
        };
        Self {
            error,
            code: Self::REQUEST.to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.code.as_str() {
            Self::VALIDATION => ErrorKind::Validation,
            Self::REQUEST => ErrorKind::Request,
            Self::NETWORK => ErrorKind::Network,
            _ => ErrorKind::Unknown,
        }
    }

    pub fn status(&self) -> Option<u16> {
        self.details
            .as_ref()
            .and_then(|details| details.get("status"))
            .and_then(Value::as_u64)
            .and_then(|status| u16::try_from(status).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_helpers_set_codes() {
        let validation = ApiError::validation("name is required");
        assert_eq!(validation.code, "VALIDATION_ERROR");
        assert_eq!(validation.kind(), ErrorKind::Validation);
        assert!(validation.details.is_none());

        assert_eq!(ApiError::network("offline").kind(), ErrorKind::Network);
        assert_eq!(ApiError::unknown("boom").kind(), ErrorKind::Unknown);
    }

    #[test]
    fn request_error_keeps_body_text_and_status() {
        let err = ApiError::request(422, "name already taken");
        assert_eq!(err.kind(), ErrorKind::Request);
        assert_eq!(err.error, "name already taken");
        assert_eq!(err.status(), Some(422));

        let empty = ApiError::request(502, "  ");
        assert_eq!(empty.error, "Request failed with status 502");
    }

    #[test]
    fn api_error_display_and_string_conversion_match_error_text() {
        let error = ApiError::unknown("boom");
        assert_eq!(format!("{}", error), "boom");

        let raw: String = ApiError::validation("bad input").into();
        assert_eq!(raw, "bad input");
    }

    #[test]
    fn employee_payload_omits_blank_optionals() {
        let payload = CreateEmployee {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            department_id: Some("d1".into()),
            role: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "department_id": "d1"
            })
        );
    }

    #[test]
    fn department_payload_keeps_empty_description() {
        let payload = CreateDepartment {
            name: "Engineering".into(),
            description: String::new(),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({ "name": "Engineering", "description": "" })
        );
    }

    #[test]
    fn leave_payload_serializes_calendar_dates() {
        let payload = CreateLeaveRequest {
            employee_id: "e1".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 7).unwrap(),
            reason: None,
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "employee_id": "e1",
                "start_date": "2025-03-03",
                "end_date": "2025-03-07"
            })
        );
    }

    #[test]
    fn leave_request_defaults_missing_optionals() {
        let leave: LeaveRequest = serde_json::from_value(json!({
            "id": "l1",
            "employee_id": "e1",
            "start_date": "2025-03-03",
            "end_date": "2025-03-07"
        }))
        .unwrap();
        assert!(leave.reason.is_none());
        assert_eq!(leave.status_kind(), LeaveStatus::Pending);
        assert_eq!(leave.status_label(), "pending");
    }

    #[test]
    fn numeric_ids_deserialize_and_round_trip_as_numbers() {
        let departments: Vec<Department> = serde_json::from_value(json!([
            { "id": 1, "name": "Engineering", "description": null }
        ]))
        .unwrap();
        assert_eq!(departments[0].id, EntityId::Number(1));
        assert_eq!(departments[0].id.to_string(), "1");

        let employee: Employee = serde_json::from_value(json!({
            "id": 7,
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "department_id": 1
        }))
        .unwrap();
        assert_eq!(employee.department_id, Some(EntityId::Number(1)));
        assert_eq!(serde_json::to_value(&employee.id).unwrap(), json!(7));
        assert_eq!(serde_json::to_value(EntityId::from("d1")).unwrap(), json!("d1"));
    }

    #[test]
    fn select_values_map_back_to_loaded_ids() {
        let known = [EntityId::Number(1), EntityId::from("d2")];
        assert_eq!(EntityId::from_select("1", &known), EntityId::Number(1));
        assert_eq!(EntityId::from_select("d2", &known), EntityId::from("d2"));
        assert_eq!(EntityId::from_select("d9", &known), EntityId::from("d9"));
        assert_eq!(EntityId::from("42"), EntityId::from_select("42", []));
    }

    #[test]
    fn leave_list_tolerates_datetimes_and_missing_dates() {
        let leaves: Vec<LeaveRequest> = serde_json::from_value(json!([
            { "id": 1, "employee_id": 7, "start_date": "2025-03-03T00:00:00Z", "end_date": null },
            { "id": 2, "employee_id": 7, "start_date": "2025-03-03", "end_date": "2025-03-07" }
        ]))
        .unwrap();
        assert_eq!(leaves[0].period(), "2025-03-03T00:00:00Z → ");
        assert_eq!(leaves[1].period(), "2025-03-03 → 2025-03-07");
    }

    #[test]
    fn leave_status_maps_known_values() {
        assert_eq!(LeaveStatus::from_raw(None), LeaveStatus::Pending);
        assert_eq!(LeaveStatus::from_raw(Some("pending")), LeaveStatus::Pending);
        assert_eq!(LeaveStatus::from_raw(Some("approved")), LeaveStatus::Approved);
        assert_eq!(LeaveStatus::from_raw(Some("rejected")), LeaveStatus::Rejected);
        assert_eq!(LeaveStatus::from_raw(Some("escalated")), LeaveStatus::Pending);
    }

    #[test]
    fn employee_full_name_joins_parts() {
        let employee: Employee = serde_json::from_value(json!({
            "id": "e1",
            "first_name": "Grace",
            "last_name": "Hopper",
            "email": "grace@example.com"
        }))
        .unwrap();
        assert_eq!(employee.full_name(), "Grace Hopper");
        assert!(employee.department_id.is_none());
    }
}
