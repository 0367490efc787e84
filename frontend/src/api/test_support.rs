#[cfg(test)]
pub mod mock {
    use crate::api::client::{register_mock, MockResponse, TestResponder};
    use crate::api::ApiError;
    use reqwest::Method;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    pub const GET: Method = Method::GET;
    pub const POST: Method = Method::POST;

    #[derive(Clone)]
    pub struct MockServer {
        inner: Arc<Mutex<Inner>>,
        base: String,
    }

    struct Inner {
        routes: Vec<Route>,
        received: Vec<RecordedRequest>,
    }

    #[derive(Clone)]
    struct Route {
        method: Method,
        path: String,
        reply: Reply,
    }

    #[derive(Clone)]
    enum Reply {
        Respond(MockResponse),
        Unreachable,
    }

    #[derive(Clone, Debug)]
    pub struct RecordedRequest {
        pub method: Method,
        pub path: String,
        pub content_type: Option<String>,
        pub body: Option<Value>,
    }

    impl MockServer {
        pub async fn start_async() -> Self {
            Self::start()
        }

        pub fn start() -> Self {
            static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
            let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
            Self {
                inner: Arc::new(Mutex::new(Inner {
                    routes: Vec::new(),
                    received: Vec::new(),
                })),
                base: format!("http://mock-{}", id),
            }
        }

        pub fn url(&self, path: &str) -> String {
            register_mock(self.base.clone(), Arc::new(self.clone()));
            format!("{}{}", self.base, path)
        }

        pub fn mock<F>(&self, f: F)
        where
            F: FnOnce(&mut When, &mut Then),
        {
            let mut when = When::default();
            let mut then = Then::default();
            f(&mut when, &mut then);

            let method = when.method.clone().expect("mock requires method");
            let path = when.path.clone().expect("mock requires path");
            let reply = if then.unreachable {
                Reply::Unreachable
            } else if let Some(text) = then.text {
                Reply::Respond(MockResponse::text(then.status.unwrap_or(200), text))
            } else {
                Reply::Respond(MockResponse::json(
                    then.status.unwrap_or(200),
                    then.body.unwrap_or_else(|| serde_json::json!({})),
                ))
            };

            let mut inner = self.inner.lock().expect("mock lock");
            inner.routes.push(Route {
                method,
                path,
                reply,
            });
        }

        pub fn received(&self) -> Vec<RecordedRequest> {
            self.inner.lock().expect("mock lock").received.clone()
        }

        pub fn hits(&self, method: Method, path: &str) -> usize {
            self.received()
                .iter()
                .filter(|req| req.method == method && req.path == path)
                .count()
        }

        pub fn bodies(&self, method: Method, path: &str) -> Vec<Value> {
            self.received()
                .into_iter()
                .filter(|req| req.method == method && req.path == path)
                .filter_map(|req| req.body)
                .collect()
        }
    }

    impl TestResponder for MockServer {
        fn respond(&self, request: &reqwest::Request) -> Result<MockResponse, ApiError> {
            let method = request.method();
            let path = request.url().path();
            let mut inner = self
                .inner
                .lock()
                .map_err(|_| ApiError::unknown("mock lock"))?;

            inner.received.push(RecordedRequest {
                method: method.clone(),
                path: path.to_string(),
                content_type: request
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string),
                body: request
                    .body()
                    .and_then(|body| body.as_bytes())
                    .and_then(|bytes| serde_json::from_slice(bytes).ok()),
            });

            let route = inner
                .routes
                .iter()
                .rev()
                .find(|route| route.method == *method && route.path == path)
                .cloned();

            match route.map(|route| route.reply) {
                Some(Reply::Respond(response)) => Ok(response),
                Some(Reply::Unreachable) => Err(ApiError::network(format!(
                    "Request failed: connection refused ({} {})",
                    method, path
                ))),
                None => Err(ApiError::unknown(format!("No mock for {} {}", method, path))),
            }
        }
    }

    #[derive(Default)]
    pub struct When {
        method: Option<Method>,
        path: Option<String>,
    }

    impl When {
        pub fn method(&mut self, method: Method) -> &mut Self {
            self.method = Some(method);
            self
        }

        pub fn path(&mut self, path: &str) -> &mut Self {
            self.path = Some(path.to_string());
            self
        }
    }

    #[derive(Default)]
    pub struct Then {
        status: Option<u16>,
        body: Option<Value>,
        text: Option<String>,
        unreachable: bool,
    }

    impl Then {
        pub fn status(&mut self, status: u16) -> &mut Self {
            self.status = Some(status);
            self
        }

        pub fn json_body(&mut self, body: Value) -> &mut Self {
            self.body = Some(body);
            self
        }

        pub fn body(&mut self, text: &str) -> &mut Self {
            self.text = Some(text.to_string());
            self
        }

        /// Simulates a transport failure instead of an HTTP response.
        pub fn unreachable(&mut self) -> &mut Self {
            self.unreachable = true;
            self
        }
    }
}
