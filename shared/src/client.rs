//! Client-related types shared between server and client
//!
//! User and role types used in API communication and dashboard routing.

use serde::{Deserialize, Serialize};

/// Dashboard user role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Receptionist,
    Accountant,
    Guest,
}

impl UserRole {
    /// Landing dashboard path for this role
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserRole::Admin => "/dashboard",
            UserRole::Receptionist => "/dashboard/bookings",
            UserRole::Accountant => "/dashboard/finance",
            UserRole::Guest => "/dashboard/my-bookings",
        }
    }
}

/// Authenticated user information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}
