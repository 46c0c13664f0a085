//! Domain-shaped façade over a `BookingTransport`.
//!
//! # Design
//! `BookingClient` holds a transport handle and an `OutcomeSink` and nothing
//! else, so calls are independent and the client can be shared between
//! threads whenever its transport can. Every call reports its intent and its
//! classified status to the sink, then returns the transport's body as is:
//! a rejected request yields `Ok(None)`, never `Err`. `Err` means the
//! exchange itself failed and is passed through untouched.

use crate::error::ApiError;
use crate::outcome::{ClientEvent, Operation, Outcome, OutcomeSink, TracingSink};
use crate::transport::{BookingTransport, TransportResponse};
use crate::types::{BookingDetail, BookingFilter, BookingId, BookingRecord};

/// The status `delete_booking` treats as success.
///
/// The booking service answers a successful DELETE with `201 Created`. This
/// is kept as observed; 200 and 204 are reported as failed deletions.
pub const DELETE_SUCCESS_STATUS: u16 = 201;

/// The status that confirms a created booking.
pub const CREATE_CONFIRMED_STATUS: u16 = 200;

pub struct BookingClient<T, S = TracingSink> {
    transport: T,
    sink: S,
}

impl<T: BookingTransport> BookingClient<T> {
    pub fn new(transport: T) -> Self {
        Self::with_sink(transport, TracingSink)
    }
}

impl<T: BookingTransport, S: OutcomeSink> BookingClient<T, S> {
    pub fn with_sink(transport: T, sink: S) -> Self {
        Self { transport, sink }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Every booking id known to the service.
    pub fn list_booking_ids(&self) -> Result<Option<Vec<BookingId>>, ApiError> {
        self.list_booking_ids_filtered(&BookingFilter::default())
    }

    /// Booking ids matching `filter`. Only the filters that are set are sent.
    pub fn list_booking_ids_filtered(&self, filter: &BookingFilter) -> Result<Option<Vec<BookingId>>, ApiError> {
        self.sink.record(&ClientEvent::ListingIds);
        let response = self.transport.list_ids(filter)?;
        Ok(self.complete(Operation::ListIds, response))
    }

    pub fn get_booking_detail(&self, booking_id: u32) -> Result<Option<BookingDetail>, ApiError> {
        self.get_booking_detail_by_id(BookingId::new(booking_id))
    }

    /// Detail of one booking; `None` when the service sent no body, as it
    /// does for an unknown id.
    pub fn get_booking_detail_by_id(&self, id: BookingId) -> Result<Option<BookingDetail>, ApiError> {
        self.sink.record(&ClientEvent::FetchingDetail { id });
        let response = self.transport.get(id)?;
        Ok(self.complete(Operation::Get, response))
    }

    /// Create a booking. The returned record carries the id the service
    /// allocated.
    pub fn create_booking(&self, detail: &BookingDetail) -> Result<Option<BookingRecord>, ApiError> {
        self.sink.record(&ClientEvent::Creating {
            firstname: detail.firstname.clone(),
            lastname: detail.lastname.clone(),
        });
        let response = self.transport.create(detail)?;
        let confirmed = response.status == CREATE_CONFIRMED_STATUS;
        let record = self.complete(Operation::Create, response);
        if confirmed {
            self.sink.record(&ClientEvent::BookingCreated);
        }
        Ok(record)
    }

    /// Replace the detail of `record`'s booking with `record.booking` and
    /// return the state the service reports afterwards.
    pub fn update_booking(&self, record: &BookingRecord) -> Result<Option<BookingDetail>, ApiError> {
        let id = record.id();
        self.sink.record(&ClientEvent::Updating { id });
        let response = self.transport.update(id, &record.booking)?;
        Ok(self.complete(Operation::Update, response))
    }

    /// True exactly when the service answers with `DELETE_SUCCESS_STATUS`.
    pub fn delete_booking(&self, booking_id: u32) -> Result<bool, ApiError> {
        let id = BookingId::new(booking_id);
        self.sink.record(&ClientEvent::Deleting { id });
        let status = self.transport.delete(id)?;
        Ok(status == DELETE_SUCCESS_STATUS)
    }

    /// Raw status code of a detail request, body ignored.
    pub fn get_response_code_of_booking_get_request(&self, booking_id: u32) -> Result<u16, ApiError> {
        self.transport.get_status(BookingId::new(booking_id))
    }

    fn complete<B>(&self, operation: Operation, response: TransportResponse<B>) -> Option<B> {
        self.sink
            .record(&ClientEvent::Completed(Outcome::new(operation, response.status)));
        response.body
    }
}
