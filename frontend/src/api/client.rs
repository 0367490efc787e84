use reqwest::{header::CONTENT_TYPE, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

use crate::{api::types::ApiError, config};

/// Thin JSON wrapper over the backend: one attempt per call, no retry, no timeout.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url).unwrap_or(base_url)),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_backend_url().await
        }
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.client.get(format!("{}{}", base_url, path)))
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.client
                    .post(format!("{}{}", base_url, path))
                    .header(CONTENT_TYPE, "application/json")
                    .json(body),
            )
            .await?;
        Self::map_json_response(response).await
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(Self::map_transport_error)
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = request.build().map_err(Self::map_transport_error)?;
        if let Some(responder) = mock_transport::responder_for(request.url().as_str()) {
            return responder.respond(&request)?.into_response();
        }
        self.client
            .execute(request)
            .await
            .map_err(Self::map_transport_error)
    }

    fn map_transport_error(err: reqwest::Error) -> ApiError {
        if err.is_builder() {
            ApiError::unknown(format!("Failed to build request: {}", err))
        } else {
            ApiError::network(format!("Request failed: {}", err))
        }
    }

    async fn map_json_response<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            let body = response.text().await.unwrap_or_default();
            log::warn!("backend responded with {}: {}", status, body);
            Err(ApiError::request(status.as_u16(), body))
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_transport::{register_mock, MockResponse, TestResponder};
