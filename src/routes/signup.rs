use actix_web::{post, web};
use std::sync::Arc;

use crate::store::memory::MemoryService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{SignupRequest, SignupResponse};
use crate::utils::password::hash_password;

#[post("")]
async fn signup(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    body: web::Json<SignupRequest>,
) -> ApiResult<SignupResponse> {
    let SignupRequest { email, password } = body.into_inner();

    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::Validation(
            "email and password are required".to_string(),
        ));
    }

    let hash = hash_password(&password).map_err(|e| AppError::Internal(e.to_string()))?;
    db.register_user(&email, hash)?;

    log::info!("registered user {}", email);

    Ok(ApiResponse::Created(SignupResponse {
        message: "User registered".to_string(),
    }))
}
