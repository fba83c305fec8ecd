use actix_web::{delete, web};
use std::sync::Arc;

use crate::store::memory::MemoryService;
use crate::types::book::Book;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthedUser;

#[delete("/{id}")]
async fn delete(
    _req: actix_web::HttpRequest,
    _user: AuthedUser,
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<String>,
) -> ApiResult<Book> {
    db.delete_book(&path.into_inner())
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::NoContent)
}
