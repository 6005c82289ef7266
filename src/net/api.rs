//! JSON request/response helper for the admin endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` (`GlooTransport`).
//! Tests and headless callers plug in their own [`Transport`].
//!
//! ERROR HANDLING
//! ==============
//! [`ApiClient::request`] returns a typed [`ApiError`] so callers can tell a
//! dead network from a rejected action. [`ApiClient::call`] is the
//! page-script flavor: any failure is logged, surfaced as one generic danger
//! banner, and reported as `None`. A non-2xx reply whose body is still JSON
//! counts as an answer there, since the endpoints put `{"success": false}`
//! in their 403s.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use super::types::Method;
use super::types::ActionAck;
use crate::state::notify::Notifier;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Serialized JSON body, if any.
    pub body: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    #[must_use]
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded {status}")]
    Status { status: u16, body: Option<Value> },
    #[error("response is not valid JSON: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Encode(_) => "encode",
            Self::Network(_) => "network",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
        }
    }
}

/// Sends one request and returns the raw reply.
///
/// Implementations only fail with [`ApiError::Network`]; status and body
/// interpretation happen in [`ApiClient`].
pub trait Transport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiResponse, ApiError>>;
}

/// `fetch` through `gloo-net`, always with a JSON content type.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTransport;

#[cfg(feature = "hydrate")]
impl Transport for GlooTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        use gloo_net::http::{Method as HttpMethod, RequestBuilder};

        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Put => HttpMethod::PUT,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        };
        let builder = RequestBuilder::new(&request.url)
            .method(method)
            .header("Content-Type", JSON_CONTENT_TYPE);
        let built = match request.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        };
        let resp = built
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[must_use]
pub fn cancel_booking_endpoint(booking_id: u64) -> String {
    format!("/customer/cancel-booking/{booking_id}")
}

#[must_use]
pub fn start_trip_endpoint(booking_id: u64) -> String {
    format!("/driver/start-trip/{booking_id}")
}

#[must_use]
pub fn complete_trip_endpoint(booking_id: u64) -> String {
    format!("/driver/complete-trip/{booking_id}")
}

/// Interpret a raw reply: 2xx bodies decode into `R`, anything else becomes
/// [`ApiError::Status`] carrying the body when it is JSON.
pub fn decode_response<R: DeserializeOwned>(response: &ApiResponse) -> Result<R, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status,
            body: serde_json::from_str(&response.body).ok(),
        });
    }
    serde_json::from_str(&response.body).map_err(ApiError::Decode)
}

pub struct ApiClient<T> {
    transport: T,
    notifier: Notifier,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, notifier: Notifier) -> Self {
        Self { transport, notifier }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send `payload` (if any) as JSON and decode the JSON reply.
    ///
    /// # Errors
    ///
    /// See [`ApiError`]; nothing is shown to the user.
    pub async fn request<R, P>(&self, method: Method, url: &str, payload: Option<&P>) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = payload
            .map(|p| serde_json::to_string(p))
            .transpose()
            .map_err(ApiError::Encode)?;
        let request = ApiRequest { method, url: url.to_owned(), body };
        log::debug!("{} {}", method.as_str(), request.url);
        let response = self.transport.send(request).await?;
        decode_response(&response)
    }

    pub async fn get<R: DeserializeOwned>(&self, url: &str) -> Result<R, ApiError> {
        self.request::<R, ()>(Method::Get, url, None).await
    }

    pub async fn post<R, P>(&self, url: &str, payload: &P) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::Post, url, Some(payload)).await
    }

    /// Page-script call: `None` plus one danger banner on failure.
    pub async fn call(&self, url: &str, method: Method, payload: Option<&Value>) -> Option<Value> {
        match self.request::<Value, Value>(method, url, payload).await {
            Ok(value) => Some(value),
            Err(ApiError::Status { status, body: Some(body) }) => {
                log::warn!("{} {url} answered {status}", method.as_str());
                Some(body)
            }
            Err(err) => {
                log::error!("API Error: {err}");
                self.notifier.danger(GENERIC_FAILURE_MESSAGE);
                None
            }
        }
    }

    /// `POST /customer/cancel-booking/{id}`
    ///
    /// # Errors
    ///
    /// A booking that is not the caller's comes back as a 403 `Status`.
    pub async fn cancel_booking(&self, booking_id: u64) -> Result<ActionAck, ApiError> {
        self.post_action(&cancel_booking_endpoint(booking_id)).await
    }

    /// `POST /driver/start-trip/{id}`
    ///
    /// # Errors
    ///
    /// A trip assigned to another driver comes back as a 403 `Status`.
    pub async fn start_trip(&self, booking_id: u64) -> Result<ActionAck, ApiError> {
        self.post_action(&start_trip_endpoint(booking_id)).await
    }

    /// `POST /driver/complete-trip/{id}`; the ack carries the final fare.
    ///
    /// # Errors
    ///
    /// A trip assigned to another driver comes back as a 403 `Status`.
    pub async fn complete_trip(&self, booking_id: u64) -> Result<ActionAck, ApiError> {
        self.post_action(&complete_trip_endpoint(booking_id)).await
    }

    async fn post_action(&self, url: &str) -> Result<ActionAck, ApiError> {
        self.request::<ActionAck, ()>(Method::Post, url, None).await
    }
}
