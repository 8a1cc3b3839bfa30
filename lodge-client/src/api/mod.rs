//! Resource facades for the hotel management API
//!
//! One facade per backend resource, each a fixed set of CRUD
//! operations mapped 1:1 onto REST conventions. Bookings additionally
//! expose the backend-owned check-in/check-out transitions.
//!
//! Facades hold no state beyond the shared [`HttpClient`]; every call
//! is an independent request and callers refresh their own views after
//! a successful mutation.

mod bookings;
mod guests;
mod payments;
mod rooms;
mod staff;

pub use bookings::BookingsApi;
pub use guests::GuestsApi;
pub use payments::PaymentsApi;
pub use rooms::RoomsApi;
pub use staff::StaffApi;

use crate::{ClientConfig, HttpClient};

/// Entry point bundling all resource facades over one transport
#[derive(Debug, Clone)]
pub struct LodgeClient {
    http: HttpClient,
}

impl LodgeClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: HttpClient::new(config),
        }
    }

    /// Create a client with the base URL resolved from the environment
    pub fn from_env() -> Self {
        Self::new(&ClientConfig::from_env())
    }

    /// Room facade
    pub fn rooms(&self) -> RoomsApi {
        RoomsApi::new(self.http.clone())
    }

    /// Booking facade
    pub fn bookings(&self) -> BookingsApi {
        BookingsApi::new(self.http.clone())
    }

    /// Guest facade
    pub fn guests(&self) -> GuestsApi {
        GuestsApi::new(self.http.clone())
    }

    /// Payment facade
    pub fn payments(&self) -> PaymentsApi {
        PaymentsApi::new(self.http.clone())
    }

    /// Staff facade
    pub fn staff(&self) -> StaffApi {
        StaffApi::new(self.http.clone())
    }

    /// Underlying transport
    pub fn http(&self) -> &HttpClient {
        &self.http
    }
}
