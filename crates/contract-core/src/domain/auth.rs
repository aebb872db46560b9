//! Auth Payloads
//!
//! Bodies for `POST /token` (form-encoded) and `POST /register` (JSON).

use serde::{Deserialize, Serialize};

/// Username/password pair sent form-encoded to `/token`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Registration profile
///
/// The backend names the password field `hashed_password` but expects the
/// plain password; hashing happens server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Registration {
    pub username: String,
    pub hashed_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl Registration {
    /// Build from raw form fields; blank optional fields are dropped.
    pub fn from_form(username: &str, password: &str, email: &str, full_name: &str) -> Self {
        let optional = |s: &str| {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        };
        Self {
            username: username.to_string(),
            hashed_password: password.to_string(),
            email: optional(email),
            full_name: optional(full_name),
        }
    }
}

/// Response of `/token`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}
