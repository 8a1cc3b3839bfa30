//! Booking API facade

use crate::{ApiResult, HttpClient};
use shared::models::{Booking, BookingCreate, BookingUpdate};

/// CRUD operations over `/bookings`, plus the check-in/check-out
/// state transitions.
///
/// The transitions are backend-owned: the client does not verify that
/// a booking is in a transitionable state before issuing the request.
#[derive(Debug, Clone)]
pub struct BookingsApi {
    http: HttpClient,
}

impl BookingsApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// GET /bookings - list all bookings
    pub async fn list(&self) -> ApiResult<Vec<Booking>> {
        self.http.get("/bookings").await
    }

    /// GET /bookings/{id} - fetch a single booking
    pub async fn get(&self, id: i64) -> ApiResult<Booking> {
        self.http.get(&format!("/bookings/{id}")).await
    }

    /// POST /bookings - create a booking
    ///
    /// The backend assigns `id`, the booking code and `createdAt`.
    pub async fn create(&self, booking: &BookingCreate) -> ApiResult<Booking> {
        self.http.post("/bookings", booking).await
    }

    /// PUT /bookings/{id} - partially update a booking
    pub async fn update(&self, id: i64, patch: &BookingUpdate) -> ApiResult<Booking> {
        self.http.put(&format!("/bookings/{id}"), patch).await
    }

    /// DELETE /bookings/{id} - delete a booking
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.http.delete(&format!("/bookings/{id}")).await
    }

    /// POST /bookings/{id}/check-in - check the booking in
    ///
    /// Empty body; returns the updated booking.
    pub async fn check_in(&self, id: i64) -> ApiResult<Booking> {
        self.http.post_empty(&format!("/bookings/{id}/check-in")).await
    }

    /// POST /bookings/{id}/check-out - check the booking out
    ///
    /// Empty body; returns the updated booking.
    pub async fn check_out(&self, id: i64) -> ApiResult<Booking> {
        self.http.post_empty(&format!("/bookings/{id}/check-out")).await
    }
}
