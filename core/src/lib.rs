//! Synchronous typed client for a remote booking resource.
//!
//! # Overview
//! `BookingClient` exposes list/get/create/update/delete of bookings as plain
//! method calls. It sits on a `BookingTransport`, whose production
//! implementation `HttpTransport` executes requests built by `BookingApi`.
//!
//! # Design
//! - `BookingApi` is stateless: `build_*` produces an `HttpRequest`,
//!   `parse_*` consumes an `HttpResponse`; neither touches the network.
//! - A non-2xx status is data. Only failed exchanges surface as `ApiError`.
//! - The client reports intent and classified outcomes to an `OutcomeSink`
//!   instead of logging inline; `TracingSink` is the default.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod outcome;
pub mod transport;
pub mod types;

pub use api::BookingApi;
pub use client::BookingClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::{classify, Classification, ClientEvent, Operation, Outcome, OutcomeSink, RecordingSink, TracingSink};
pub use transport::{BookingTransport, HttpTransport, TransportResponse};
pub use types::{BookingDates, BookingDetail, BookingFilter, BookingId, BookingRecord};
