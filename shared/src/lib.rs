//! Shared types for the Lodge hotel management system
//!
//! Entity models and auth types used in API communication.
//! These types are shared between the backend and lodge-client.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use client::{User, UserRole};
