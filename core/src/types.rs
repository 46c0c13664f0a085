//! Domain DTOs for the booking API.
//!
//! # Design
//! Field names follow the remote service's JSON schema (`firstname`,
//! `bookingdates`, `bookingid`, ...). The mock-server crate defines its own
//! copies of these shapes; the integration tests catch drift between them.
//! Dates stay ISO `YYYY-MM-DD` strings and are never parsed here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stay dates of a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

impl BookingDates {
    pub fn new(checkin: impl Into<String>, checkout: impl Into<String>) -> Self {
        Self {
            checkin: checkin.into(),
            checkout: checkout.into(),
        }
    }
}

/// Full attributes of one booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDetail {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: f64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

/// Identifier of a booking, as allocated by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId {
    pub bookingid: u32,
}

impl BookingId {
    pub fn new(bookingid: u32) -> Self {
        Self { bookingid }
    }

    pub fn value(&self) -> u32 {
        self.bookingid
    }
}

impl From<u32> for BookingId {
    fn from(bookingid: u32) -> Self {
        Self::new(bookingid)
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bookingid)
    }
}

/// A booking id paired with its detail. Returned by create, consumed by
/// update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub bookingid: u32,
    pub booking: BookingDetail,
}

impl BookingRecord {
    pub fn id(&self) -> BookingId {
        BookingId::new(self.bookingid)
    }
}

/// Optional filters for listing booking ids. Absent filters are left out of
/// the query string entirely; an empty filter lists every booking.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout: Option<String>,
}

impl BookingFilter {
    pub fn firstname(mut self, firstname: impl Into<String>) -> Self {
        self.firstname = Some(firstname.into());
        self
    }

    pub fn lastname(mut self, lastname: impl Into<String>) -> Self {
        self.lastname = Some(lastname.into());
        self
    }

    pub fn checkin(mut self, checkin: impl Into<String>) -> Self {
        self.checkin = Some(checkin.into());
        self
    }

    pub fn checkout(mut self, checkout: impl Into<String>) -> Self {
        self.checkout = Some(checkout.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.firstname.is_none()
            && self.lastname.is_none()
            && self.checkin.is_none()
            && self.checkout.is_none()
    }
}
