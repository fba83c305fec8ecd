use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::config;

/// The only claim carried is the subject. Tokens have no expiry; the source
/// system never set one, so the verifier disables expiry validation instead
/// of inventing a lifetime.
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: Option<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("malformed token")]
    Malformed,
    #[error("bad signature")]
    BadSignature,
    #[error("token has no subject")]
    MissingSubject,
}

pub fn issue(subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: Some(subject.to_owned()),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config().jwt_secret.as_bytes()),
    )
}

pub fn verify(token: &str) -> Result<String, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config().jwt_secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => TokenError::BadSignature,
        _ => TokenError::Malformed,
    })?;

    data.claims.sub.ok_or(TokenError::MissingSubject)
}
