use actix_web::{
    dev::{Payload, ServiceRequest},
    web, FromRequest, HttpMessage, HttpRequest,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::future::{ready, Ready};
use std::sync::Arc;

use crate::store::memory::MemoryService;
use crate::types::error::AppError;
use crate::utils::token;

/// Identity resolved from a bearer token: the subject claim, confirmed to be
/// a registered user. Inserted into request extensions by `validate_token`
/// and pulled out by handlers as an extractor.
#[derive(Clone, Debug)]
pub struct AuthedUser(pub String);

impl FromRequest for AuthedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthedUser>()
                .cloned()
                .ok_or_else(|| AppError::Unauthorized("no authenticated identity".to_string())),
        )
    }
}

pub async fn validate_token(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    let subject = match token::verify(credentials.token()) {
        Ok(subject) => subject,
        Err(e) => {
            log::debug!("rejected bearer token: {}", e);
            return Err((AppError::Unauthorized(e.to_string()).into(), req));
        }
    };

    let store = match req.app_data::<web::Data<Arc<MemoryService>>>() {
        Some(store) => store,
        None => {
            return Err((
                AppError::Internal("store not configured".to_string()).into(),
                req,
            ))
        }
    };

    if !store.user_exists(&subject) {
        log::debug!("token subject {} is not a known user", subject);
        return Err((AppError::Unauthorized("user not found".to_string()).into(), req));
    }

    req.extensions_mut().insert(AuthedUser(subject));
    Ok(req)
}
