//! Authentication provider interface
//!
//! Authentication is a collaborator capability: the client defines the
//! seam and ships only a demo implementation. A real deployment plugs
//! in a provider backed by an actual credential store; no hashing or
//! token model is pretended here.

use async_trait::async_trait;
use shared::client::{User, UserRole};

/// Credential-checking seam
///
/// Returns the authenticated user on success, `None` on any
/// email/password mismatch.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn authenticate(&self, email: &str, password: &str) -> Option<User>;
}

/// Check whether a user holds one of the required roles
pub fn has_required_role(user: Option<&User>, required: &[UserRole]) -> bool {
    match user {
        Some(user) => required.contains(&user.role),
        None => false,
    }
}

struct MockUser {
    user: User,
    password: &'static str,
}

/// Demo authentication provider with a fixed user table
///
/// Stand-in for a real credential store; passwords are plain text and
/// exist only so the dashboard can be exercised without a backend.
pub struct MockAuthProvider {
    users: Vec<MockUser>,
}

impl MockAuthProvider {
    pub fn new() -> Self {
        let demo = |id: &str, name: &str, email: &str, role: UserRole, password: &'static str| {
            MockUser {
                user: User {
                    id: id.to_string(),
                    name: name.to_string(),
                    email: email.to_string(),
                    role,
                    avatar: None,
                },
                password,
            }
        };

        Self {
            users: vec![
                demo("1", "Admin User", "admin@paddysview.com", UserRole::Admin, "admin123"),
                demo(
                    "2",
                    "Reception Staff",
                    "receptionist@paddysview.com",
                    UserRole::Receptionist,
                    "reception123",
                ),
                demo(
                    "3",
                    "Finance Staff",
                    "accountant@paddysview.com",
                    UserRole::Accountant,
                    "account123",
                ),
                demo("4", "Guest User", "guest@example.com", UserRole::Guest, "guest123"),
            ],
        }
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn authenticate(&self, email: &str, password: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.user.email == email && entry.password == password)
            .map(|entry| entry.user.clone())
    }
}
