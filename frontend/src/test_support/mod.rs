#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod helpers {
    use crate::api::test_support::mock::{MockServer, GET};
    use crate::api::ApiClient;
    use leptos::*;
    use serde_json::{json, Value};

    pub fn department_json(id: &str, name: &str) -> Value {
        json!({ "id": id, "name": name, "description": null })
    }

    pub fn employee_json(id: &str, first: &str, last: &str, department_id: Option<&str>) -> Value {
        json!({
            "id": id,
            "first_name": first,
            "last_name": last,
            "email": format!("{}@example.com", first.to_lowercase()),
            "phone": null,
            "role": null,
            "department_id": department_id
        })
    }

    pub fn leave_json(id: &str, employee_id: &str, status: Option<&str>) -> Value {
        json!({
            "id": id,
            "employee_id": employee_id,
            "start_date": "2025-03-03",
            "end_date": "2025-03-07",
            "reason": null,
            "status": status
        })
    }

    /// Mock backend whose list endpoints all answer with empty arrays.
    pub fn empty_backend() -> MockServer {
        let server = MockServer::start();
        for path in ["/api/departments", "/api/employees", "/api/leaves"] {
            server.mock(|when, then| {
                when.method(GET).path(path);
                then.status(200).json_body(json!([]));
            });
        }
        server
    }

    pub fn provide_client(server: &MockServer) {
        provide_context(ApiClient::new_with_base_url(server.url("")));
    }
}
