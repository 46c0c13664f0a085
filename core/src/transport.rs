//! The transport seam between `BookingClient` and the network.
//!
//! # Design
//! `BookingTransport` is the narrow capability the client depends on: one
//! blocking call per resource action, each answering with a status code and,
//! where the action has one, an optionally present decoded body. A non-2xx
//! status is data, not an error; `Err` is reserved for exchanges that could
//! not complete. `HttpTransport` is the production implementation, executing
//! `BookingApi` requests with a `ureq` agent.

use std::time::Duration;

use tracing::debug;

use crate::api::BookingApi;
use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{BookingDetail, BookingFilter, BookingId, BookingRecord};

/// Status code plus the decoded body, if the server sent a decodable one.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse<T> {
    pub status: u16,
    pub body: Option<T>,
}

impl<T> TransportResponse<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn absent(status: u16) -> Self {
        Self { status, body: None }
    }
}

pub trait BookingTransport: Send + Sync {
    fn list_ids(&self, filter: &BookingFilter) -> Result<TransportResponse<Vec<BookingId>>, ApiError>;

    fn get(&self, id: BookingId) -> Result<TransportResponse<BookingDetail>, ApiError>;

    fn create(&self, detail: &BookingDetail) -> Result<TransportResponse<BookingRecord>, ApiError>;

    fn update(&self, id: BookingId, detail: &BookingDetail) -> Result<TransportResponse<BookingDetail>, ApiError>;

    fn delete(&self, id: BookingId) -> Result<u16, ApiError>;

    /// Status of a `get` for `id`. Implementations that can skip decoding
    /// the body should override this.
    fn get_status(&self, id: BookingId) -> Result<u16, ApiError> {
        self.get(id).map(|response| response.status)
    }
}

impl<T: BookingTransport + ?Sized> BookingTransport for &T {
    fn list_ids(&self, filter: &BookingFilter) -> Result<TransportResponse<Vec<BookingId>>, ApiError> {
        (**self).list_ids(filter)
    }

    fn get(&self, id: BookingId) -> Result<TransportResponse<BookingDetail>, ApiError> {
        (**self).get(id)
    }

    fn create(&self, detail: &BookingDetail) -> Result<TransportResponse<BookingRecord>, ApiError> {
        (**self).create(detail)
    }

    fn update(&self, id: BookingId, detail: &BookingDetail) -> Result<TransportResponse<BookingDetail>, ApiError> {
        (**self).update(id, detail)
    }

    fn delete(&self, id: BookingId) -> Result<u16, ApiError> {
        (**self).delete(id)
    }

    fn get_status(&self, id: BookingId) -> Result<u16, ApiError> {
        (**self).get_status(id)
    }
}

/// `BookingTransport` over blocking HTTP.
///
/// The agent is configured with `http_status_as_error(false)` so 4xx/5xx
/// responses come back as data for the client to classify.
#[derive(Clone)]
pub struct HttpTransport {
    api: BookingApi,
    agent: ureq::Agent,
}

impl HttpTransport {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, None)
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_timeout(&config.base_url, config.timeout_ms.map(Duration::from_millis))
    }

    fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(timeout)
            .build()
            .new_agent();
        Self {
            api: BookingApi::new(base_url),
            agent,
        }
    }

    pub fn api(&self) -> &BookingApi {
        &self.api
    }

    /// Execute `req` and read the full response body.
    pub fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = req.method.as_str(), path = %req.path, "sending booking request");

        let mut response = match (req.method, req.body) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(&req.path), &req.headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(&req.path), &req.headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(&req.path), &req.headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(&req.path), &req.headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(&req.path), &req.headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(&req.path), &req.headers).send_empty(),
        }?;

        let status = response.status().as_u16();
        // Non-ASCII header bytes are kept as replacement characters.
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.body_mut().read_to_string()?;

        debug!(status, "booking response received");
        Ok(HttpResponse { status, headers, body })
    }
}

fn with_headers<B>(mut builder: ureq::RequestBuilder<B>, headers: &[(String, String)]) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}

impl BookingTransport for HttpTransport {
    fn list_ids(&self, filter: &BookingFilter) -> Result<TransportResponse<Vec<BookingId>>, ApiError> {
        let req = self.api.build_list_ids(filter)?;
        self.api.parse_list_ids(self.execute(req)?)
    }

    fn get(&self, id: BookingId) -> Result<TransportResponse<BookingDetail>, ApiError> {
        let req = self.api.build_get(id);
        self.api.parse_get(self.execute(req)?)
    }

    fn create(&self, detail: &BookingDetail) -> Result<TransportResponse<BookingRecord>, ApiError> {
        let req = self.api.build_create(detail)?;
        self.api.parse_create(self.execute(req)?)
    }

    fn update(&self, id: BookingId, detail: &BookingDetail) -> Result<TransportResponse<BookingDetail>, ApiError> {
        let req = self.api.build_update(id, detail)?;
        self.api.parse_update(self.execute(req)?)
    }

    fn delete(&self, id: BookingId) -> Result<u16, ApiError> {
        let req = self.api.build_delete(id);
        Ok(self.api.parse_delete(self.execute(req)?))
    }

    fn get_status(&self, id: BookingId) -> Result<u16, ApiError> {
        let req = self.api.build_get(id);
        Ok(self.execute(req)?.status)
    }
}
