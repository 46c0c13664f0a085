//! In-memory stand-in for a restful-booker style `/booking` service.
//!
//! Ids are allocated from 1 and never reused. Create answers `200` with the
//! stored record, delete answers `201 Created`, and unknown ids are `404`.

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: String,
    pub checkout: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: f64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingId {
    pub bookingid: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreatedBooking {
    pub bookingid: u32,
    pub booking: Booking,
}

/// Query filters for `GET /booking`. Names match exactly; dates select
/// bookings on or after the given day.
#[derive(Debug, Default, Deserialize)]
pub struct ListFilter {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub checkin: Option<String>,
    pub checkout: Option<String>,
}

impl ListFilter {
    // ISO dates order correctly as strings.
    fn matches(&self, booking: &Booking) -> bool {
        self.firstname.as_ref().map_or(true, |v| *v == booking.firstname)
            && self.lastname.as_ref().map_or(true, |v| *v == booking.lastname)
            && self.checkin.as_ref().map_or(true, |v| booking.bookingdates.checkin >= *v)
            && self.checkout.as_ref().map_or(true, |v| booking.bookingdates.checkout >= *v)
    }
}

#[derive(Debug)]
pub struct Store {
    next_id: u32,
    bookings: BTreeMap<u32, Booking>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            bookings: BTreeMap::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/ping", get(ping))
        .route("/booking", get(list_bookings).post(create_booking))
        .route(
            "/booking/{id}",
            get(get_booking).put(update_booking).delete(delete_booking),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn ping() -> (StatusCode, &'static str) {
    (StatusCode::CREATED, "Created")
}

async fn list_bookings(State(db): State<Db>, Query(filter): Query<ListFilter>) -> Json<Vec<BookingId>> {
    let store = db.read().await;
    Json(
        store
            .bookings
            .iter()
            .filter(|(_, booking)| filter.matches(booking))
            .map(|(id, _)| BookingId { bookingid: *id })
            .collect(),
    )
}

async fn create_booking(State(db): State<Db>, Json(booking): Json<Booking>) -> Json<CreatedBooking> {
    let mut store = db.write().await;
    let bookingid = store.next_id;
    store.next_id += 1;
    store.bookings.insert(bookingid, booking.clone());
    tracing::debug!(bookingid, "booking created");
    Json(CreatedBooking { bookingid, booking })
}

async fn get_booking(State(db): State<Db>, Path(id): Path<u32>) -> Result<Json<Booking>, StatusCode> {
    let store = db.read().await;
    store.bookings.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_booking(
    State(db): State<Db>,
    Path(id): Path<u32>,
    Json(input): Json<Booking>,
) -> Result<Json<Booking>, StatusCode> {
    let mut store = db.write().await;
    let booking = store.bookings.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    *booking = input;
    Ok(Json(booking.clone()))
}

async fn delete_booking(
    State(db): State<Db>,
    Path(id): Path<u32>,
) -> Result<(StatusCode, &'static str), StatusCode> {
    let mut store = db.write().await;
    store
        .bookings
        .remove(&id)
        .map(|_| (StatusCode::CREATED, "Created"))
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking(firstname: &str, lastname: &str, checkin: &str, checkout: &str) -> Booking {
        Booking {
            firstname: firstname.to_string(),
            lastname: lastname.to_string(),
            totalprice: 100.0,
            depositpaid: false,
            bookingdates: BookingDates {
                checkin: checkin.to_string(),
                checkout: checkout.to_string(),
            },
            additionalneeds: None,
        }
    }

    #[test]
    fn booking_rejects_missing_dates() {
        let result: Result<Booking, _> = serde_json::from_str(
            r#"{"firstname":"Jim","lastname":"Brown","totalprice":1,"depositpaid":true}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn created_booking_serializes_with_wire_names() {
        let created = CreatedBooking {
            bookingid: 4,
            booking: booking("Jim", "Brown", "2024-01-01", "2024-01-05"),
        };
        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["bookingid"], 4);
        assert_eq!(json["booking"]["bookingdates"]["checkout"], "2024-01-05");
        assert!(json["booking"].get("additionalneeds").is_none());
    }

    #[test]
    fn empty_filter_matches_everything() {
        let filter = ListFilter::default();
        assert!(filter.matches(&booking("Jim", "Brown", "2024-01-01", "2024-01-05")));
    }

    #[test]
    fn name_filters_match_exactly() {
        let filter = ListFilter {
            lastname: Some("Smith".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&booking("Sally", "Smith", "2024-01-01", "2024-01-05")));
        assert!(!filter.matches(&booking("Sally", "Smithers", "2024-01-01", "2024-01-05")));
    }

    #[test]
    fn date_filters_select_on_or_after() {
        let filter = ListFilter {
            checkin: Some("2024-02-01".to_string()),
            checkout: Some("2024-02-10".to_string()),
            ..Default::default()
        };
        assert!(filter.matches(&booking("A", "B", "2024-02-01", "2024-02-10")));
        assert!(filter.matches(&booking("A", "B", "2024-03-01", "2024-03-05")));
        assert!(!filter.matches(&booking("A", "B", "2024-01-31", "2024-02-12")));
        assert!(!filter.matches(&booking("A", "B", "2024-02-02", "2024-02-09")));
    }
}
