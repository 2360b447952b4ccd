//! Session - the signed-in principal, cached under a fixed medium key.

mod manager;
mod password;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Role, User, UserId};
use crate::error::StoreError;

pub use manager::Sessions;
pub use password::{hash_password, hash_password_with_salt, verify_password};

/// Medium key holding the current session.
pub const SESSION_KEY: &str = "current_user";

/// Identity data of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user_id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
    pub email: String,
}

impl From<&User> for Session {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            username: user.username.clone(),
            name: user.name.clone(),
            role: user.role,
            email: user.email.clone(),
        }
    }
}

/// Registration input; the password is hashed before it is stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl NewUser {
    pub fn customer(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            name: String::new(),
            email: String::new(),
            role: Role::Customer,
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username `{0}` is already taken")]
    UsernameTaken(String),
    #[error("username must not be empty")]
    EmptyUsername,
    #[error(transparent)]
    Store(#[from] StoreError),
}
