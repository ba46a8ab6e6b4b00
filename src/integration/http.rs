//! Shared HTTP plumbing for the adapters.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::{error::integration::IntegrationError, integration::Service};

/// Header used by the *arr services and Overseerr for API key authentication.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Builds a client whose every request is bounded by `timeout`.
pub fn build_client(service: Service, timeout: Duration) -> Result<Client, IntegrationError> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .build()
        .map_err(|e| IntegrationError::from_reqwest(service, "build client", e))
}

/// Sends a request and turns non-success statuses into [`IntegrationError::Status`].
pub async fn send(
    service: Service,
    operation: &'static str,
    request: RequestBuilder,
) -> Result<Response, IntegrationError> {
    let response = request
        .send()
        .await
        .map_err(|e| IntegrationError::from_reqwest(service, operation, e))?;

    ensure_success(service, operation, response).await
}

pub async fn ensure_success(
    service: Service,
    operation: &'static str,
    response: Response,
) -> Result<Response, IntegrationError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(IntegrationError::Status {
        service,
        operation,
        status: status.as_u16(),
        body,
    })
}

pub async fn json<T: DeserializeOwned>(
    service: Service,
    operation: &'static str,
    response: Response,
) -> Result<T, IntegrationError> {
    response
        .json::<T>()
        .await
        .map_err(|e| IntegrationError::from_reqwest(service, operation, e))
}
