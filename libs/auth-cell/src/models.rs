use std::fmt;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::services::CredentialService;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Doctor,
    Patient,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserRole::Admin => write!(f, "admin"),
            UserRole::Doctor => write!(f, "doctor"),
            UserRole::Patient => write!(f, "patient"),
        }
    }
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

/// A login identity. Only the argon2 hash of the password is kept.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub username: String,
    #[serde(skip)]
    password_hash: String,
    pub role: UserRole,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: &str,
        role: UserRole,
    ) -> Result<Self, AuthError> {
        Ok(Self {
            username: username.into(),
            password_hash: CredentialService::hash_password(password)?,
            role,
        })
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        if self.username != username {
            return false;
        }

        match CredentialService::verify_password(password, &self.password_hash) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(username = %self.username, "Stored credential unusable: {}", e);
                false
            }
        }
    }

    pub fn access_message(&self) -> &'static str {
        match self.role {
            UserRole::Admin => "Admin access granted.",
            UserRole::Doctor => "Doctor access granted.",
            UserRole::Patient => "Patient access granted.",
        }
    }

    /// Log the access line for this user's role.
    pub fn access_control(&self) -> UserRole {
        info!(username = %self.username, role = %self.role, "{}", self.access_message());
        self.role
    }
}
