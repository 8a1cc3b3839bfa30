//! Lodge Client - typed HTTP client for the hotel management API
//!
//! Provides a generic request executor, one CRUD facade per backend
//! resource (rooms, bookings, guests, payments, staff) and the
//! surrounding capabilities of the dashboard: authentication provider,
//! persisted session state, export and upload helpers.

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod http;
pub mod session;
pub mod upload;

pub use api::{BookingsApi, GuestsApi, LodgeClient, PaymentsApi, RoomsApi, StaffApi};
pub use auth::{AuthProvider, MockAuthProvider, has_required_role};
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult};
pub use http::HttpClient;
pub use session::{AppSession, FileSessionStorage, MemorySessionStorage, SessionData, SessionStorage};
pub use upload::{SimulatedUploader, Uploader};

// Re-export shared types for convenience
pub use shared::client::{User, UserRole};
pub use shared::models;
