use actix_web::{post, web};
use std::sync::Arc;

use crate::store::memory::MemoryService;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::{LoginForm, TokenResponse};
use crate::utils::token;

#[post("")]
async fn login(
    _req: actix_web::HttpRequest,
    db: web::Data<Arc<MemoryService>>,
    form: web::Form<LoginForm>,
) -> ApiResult<TokenResponse> {
    let LoginForm { username, password } = form.into_inner();

    // Unknown user and wrong password take the same path out.
    if !db.verify_credentials(&username, &password) {
        return Err(AppError::Unauthorized("invalid credentials".to_string()));
    }

    let access_token = token::issue(&username).map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(ApiResponse::Ok(TokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
