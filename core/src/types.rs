//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Unknown
//! fields in server replies are ignored; missing required fields fail to
//! decode.

use serde::{Deserialize, Serialize};

/// Registration payload for `POST /users`. The server validates it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "verifyPassword")]
    pub verify_password: String,
}

/// Reply to `POST /users`. The id is assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateUserResponse {
    pub id: i64,
    pub email: String,
    pub name: String,
}

/// A todo item. `id` is absent on creation requests and present on replies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
}

impl Todo {
    /// A todo ready to be posted; the server assigns the id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
        }
    }
}

/// Opaque bearer credential returned by `POST /login`.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub string: String,
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.string
    }
}

// Keep credentials out of logs.
impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Token(..)")
    }
}
