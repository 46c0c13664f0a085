//! Status classification and the events `BookingClient` reports.
//!
//! # Design
//! The client never calls the logger itself. It describes what happened as
//! `ClientEvent` values and hands them to an `OutcomeSink`. `TracingSink`
//! turns them into `tracing` events; `RecordingSink` keeps them in memory so
//! callers and tests can assert on the classification directly.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{error, info};

use crate::types::BookingId;

/// SUCCESS/FAILURE label of a response code. Only logging depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Success,
    Failure,
}

/// 200 and 201 are success; every other code, other 2xx included, is failure.
pub fn classify(status: u16) -> Classification {
    match status {
        200 | 201 => Classification::Success,
        _ => Classification::Failure,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListIds,
    Get,
    Create,
    Update,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::ListIds => "list_ids",
            Operation::Get => "get",
            Operation::Create => "create",
            Operation::Update => "update",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status code of one completed call and its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub operation: Operation,
    pub status: u16,
    pub classification: Classification,
}

impl Outcome {
    pub fn new(operation: Operation, status: u16) -> Self {
        Self {
            operation,
            status,
            classification: classify(status),
        }
    }

    pub fn is_success(&self) -> bool {
        self.classification == Classification::Success
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    ListingIds,
    FetchingDetail { id: BookingId },
    Creating { firstname: String, lastname: String },
    Updating { id: BookingId },
    Deleting { id: BookingId },
    Completed(Outcome),
    /// Create answered with exactly 200.
    BookingCreated,
}

pub trait OutcomeSink: Send + Sync {
    fn record(&self, event: &ClientEvent);
}

impl<S: OutcomeSink + ?Sized> OutcomeSink for &S {
    fn record(&self, event: &ClientEvent) {
        (**self).record(event)
    }
}

/// Emits every event through `tracing`: failures at error level, the rest
/// at info.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl OutcomeSink for TracingSink {
    fn record(&self, event: &ClientEvent) {
        match event {
            ClientEvent::ListingIds => info!("Getting available booking list from service"),
            ClientEvent::FetchingDetail { id } => {
                info!(booking_id = id.value(), "Getting booking detail for booking {id}")
            }
            ClientEvent::Creating { firstname, lastname } => {
                info!(%firstname, %lastname, "Setting a booking for {firstname} {lastname}")
            }
            ClientEvent::Updating { id } => info!(booking_id = id.value(), "Updating booking {id}"),
            ClientEvent::Deleting { id } => info!(booking_id = id.value(), "Removing booking {id}"),
            ClientEvent::Completed(outcome) => match outcome.classification {
                Classification::Success => info!(
                    operation = %outcome.operation,
                    status = outcome.status,
                    "Request succeeded with HTTP {}",
                    outcome.status
                ),
                Classification::Failure => error!(
                    operation = %outcome.operation,
                    status = outcome.status,
                    "Request failed with HTTP {}",
                    outcome.status
                ),
            },
            ClientEvent::BookingCreated => info!("Booking has been created"),
        }
    }
}

/// Keeps every recorded event in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<ClientEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ClientEvent> {
        self.lock().clone()
    }

    /// Outcomes of completed calls, in call order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                ClientEvent::Completed(outcome) => Some(*outcome),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    // A panic while pushing cannot leave the Vec half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<ClientEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl OutcomeSink for RecordingSink {
    fn record(&self, event: &ClientEvent) {
        self.lock().push(event.clone());
    }
}
