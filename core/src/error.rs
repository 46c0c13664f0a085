//! Error types for the booking API client.
//!
//! # Design
//! Every variant is a transport fault: the exchange could not be completed
//! or its result could not be decoded. A non-2xx status from the server is
//! not an error here; it travels back as a status code with an absent body.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("transport failure: {0}")]
    Transport(#[from] ureq::Error),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// A success response carried a body that is not the expected JSON.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// List filters could not be encoded into a query string.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}
