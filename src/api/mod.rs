//! REST API Client
//!
//! Frontend bindings to the remote foods API, organized by resource.

mod foods;

use gloo_net::http::Response;
use serde::de::DeserializeOwned;

use food_dashboard_core::{ApiError, ApiResult};

use crate::config::AppConfig;

/// HTTP client for the foods API (stateless, no business logic)
#[derive(Clone, Debug)]
pub struct HttpFoodApi {
    config: AppConfig,
}

impl HttpFoodApi {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Reject non-2xx responses
fn ensure_ok(response: Response) -> ApiResult<Response> {
    check_status(response.status(), &response.status_text())?;
    Ok(response)
}

fn check_status(status: u16, status_text: &str) -> ApiResult<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status {
            status,
            message: status_text.to_string(),
        })
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let body = response.text().await.map_err(network_error)?;
    decode_body(&body)
}

fn decode_body<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
