use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stored credential record. The raw password never leaves the signup
/// handler; only the argon2 hash is kept.
#[derive(Clone, Debug)]
pub struct UserRecord {
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct SignupResponse {
    pub message: String,
}

/// Login is form-encoded; the identifier field is named `username` to match
/// the OAuth2 password flow shape.
#[derive(Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
}
