//! Stateless HTTP request builder and response parser for the booking API.
//!
//! # Design
//! `BookingApi` holds only a `base_url`. Each resource action is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`. Parsing never fails on a non-2xx status: the
//! status is kept and the body is reported absent, leaving the verdict to the
//! caller.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::TransportResponse;
use crate::types::{BookingDetail, BookingFilter, BookingId, BookingRecord};

const ACCEPT_JSON: (&str, &str) = ("accept", "application/json");
const CONTENT_TYPE_JSON: (&str, &str) = ("content-type", "application/json");

#[derive(Debug, Clone)]
pub struct BookingApi {
    base_url: String,
}

impl BookingApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_ids(&self, filter: &BookingFilter) -> Result<HttpRequest, ApiError> {
        let query = serde_urlencoded::to_string(filter).map_err(|e| ApiError::InvalidQuery(e.to_string()))?;
        let path = if query.is_empty() {
            format!("{}/booking", self.base_url)
        } else {
            format!("{}/booking?{query}", self.base_url)
        };
        Ok(HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: headers(&[ACCEPT_JSON]),
            body: None,
        })
    }

    pub fn build_get(&self, id: BookingId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/booking/{id}", self.base_url),
            headers: headers(&[ACCEPT_JSON]),
            body: None,
        }
    }

    pub fn build_create(&self, detail: &BookingDetail) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/booking", self.base_url),
            headers: headers(&[CONTENT_TYPE_JSON, ACCEPT_JSON]),
            body: Some(encode(detail)?),
        })
    }

    pub fn build_update(&self, id: BookingId, detail: &BookingDetail) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            path: format!("{}/booking/{id}", self.base_url),
            headers: headers(&[CONTENT_TYPE_JSON, ACCEPT_JSON]),
            body: Some(encode(detail)?),
        })
    }

    pub fn build_delete(&self, id: BookingId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/booking/{id}", self.base_url),
            headers: headers(&[ACCEPT_JSON]),
            body: None,
        }
    }

    pub fn parse_list_ids(&self, response: HttpResponse) -> Result<TransportResponse<Vec<BookingId>>, ApiError> {
        decode(response)
    }

    pub fn parse_get(&self, response: HttpResponse) -> Result<TransportResponse<BookingDetail>, ApiError> {
        decode(response)
    }

    pub fn parse_create(&self, response: HttpResponse) -> Result<TransportResponse<BookingRecord>, ApiError> {
        decode(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<TransportResponse<BookingDetail>, ApiError> {
        decode(response)
    }

    /// Delete responses are plain text (`Created`); only the status matters.
    pub fn parse_delete(&self, response: HttpResponse) -> u16 {
        response.status
    }
}

fn headers(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn encode<T: Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::SerializationError(e.to_string()))
}

/// Decode the body of a 2xx response. Non-2xx and empty bodies are absent.
fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<TransportResponse<T>, ApiError> {
    if !response.is_success() || response.body.trim().is_empty() {
        return Ok(TransportResponse::absent(response.status));
    }
    let body = serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))?;
    Ok(TransportResponse::new(response.status, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BookingDates;

    fn api() -> BookingApi {
        BookingApi::new("http://localhost:3000")
    }

    fn detail() -> BookingDetail {
        BookingDetail {
            firstname: "Jim".to_string(),
            lastname: "Brown".to_string(),
            totalprice: 111.0,
            depositpaid: true,
            bookingdates: BookingDates::new("2018-01-01", "2019-01-01"),
            additionalneeds: Some("Breakfast".to_string()),
        }
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    #[test]
    fn build_list_ids_without_filters_has_no_query() {
        let req = api().build_list_ids(&BookingFilter::default()).unwrap();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/booking");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_list_ids_includes_only_present_filters() {
        let filter = BookingFilter::default().lastname("Smith").checkout("2024-01-31");
        let req = api().build_list_ids(&filter).unwrap();
        assert_eq!(req.path, "http://localhost:3000/booking?lastname=Smith&checkout=2024-01-31");
    }

    #[test]
    fn build_list_ids_with_every_filter() {
        let filter = BookingFilter::default()
            .firstname("Sally")
            .lastname("Smith")
            .checkin("2024-01-01")
            .checkout("2024-01-31");
        let req = api().build_list_ids(&filter).unwrap();
        assert_eq!(
            req.path,
            "http://localhost:3000/booking?firstname=Sally&lastname=Smith&checkin=2024-01-01&checkout=2024-01-31"
        );
    }

    #[test]
    fn build_list_ids_encodes_filter_values() {
        let filter = BookingFilter::default().firstname("Mary Ann");
        let req = api().build_list_ids(&filter).unwrap();
        assert_eq!(req.path, "http://localhost:3000/booking?firstname=Mary+Ann");
    }

    #[test]
    fn build_get_produces_correct_request() {
        let req = api().build_get(BookingId::new(42));
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/booking/42");
        assert_eq!(req.headers, vec![("accept".to_string(), "application/json".to_string())]);
    }

    #[test]
    fn build_create_produces_json_body() {
        let req = api().build_create(&detail()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/booking");
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["firstname"], "Jim");
        assert_eq!(body["additionalneeds"], "Breakfast");
    }

    #[test]
    fn build_update_targets_booking_path() {
        let req = api().build_update(BookingId::new(3), &detail()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/booking/3");
        assert!(req.body.is_some());
    }

    #[test]
    fn build_delete_has_no_body() {
        let req = api().build_delete(BookingId::new(3));
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/booking/3");
        assert!(req.body.is_none());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let api = BookingApi::new("http://localhost:3000/");
        assert_eq!(api.build_get(BookingId::new(1)).path, "http://localhost:3000/booking/1");
    }

    #[test]
    fn parse_list_ids_success() {
        let parsed = api()
            .parse_list_ids(response(200, r#"[{"bookingid":1},{"bookingid":5}]"#))
            .unwrap();
        assert_eq!(parsed.status, 200);
        assert_eq!(parsed.body, Some(vec![BookingId::new(1), BookingId::new(5)]));
    }

    #[test]
    fn parse_get_not_found_is_absent_not_error() {
        let parsed = api().parse_get(response(404, "Not Found")).unwrap();
        assert_eq!(parsed.status, 404);
        assert!(parsed.body.is_none());
    }

    #[test]
    fn parse_get_empty_success_body_is_absent() {
        let parsed = api().parse_get(response(200, "")).unwrap();
        assert!(parsed.body.is_none());
    }

    #[test]
    fn parse_create_success() {
        let body = serde_json::json!({ "bookingid": 9, "booking": detail() }).to_string();
        let parsed = api().parse_create(response(200, &body)).unwrap();
        let record = parsed.body.unwrap();
        assert_eq!(record.bookingid, 9);
        assert_eq!(record.booking, detail());
    }

    #[test]
    fn parse_update_bad_json_is_a_fault() {
        let err = api().parse_update(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_delete_keeps_raw_status() {
        assert_eq!(api().parse_delete(response(201, "Created")), 201);
        assert_eq!(api().parse_delete(response(405, "Method Not Allowed")), 405);
    }
}
