use actix_web::{put, web};
use std::sync::Arc;

use crate::store::memory::MemoryService;
use crate::types::book::{Book, UpdateBook};
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthedUser;

#[put("/{id}")]
async fn update(
    _req: actix_web::HttpRequest,
    _user: AuthedUser,
    db: web::Data<Arc<MemoryService>>,
    path: web::Path<String>,
    body: web::Json<UpdateBook>,
) -> ApiResult<Book> {
    let book = db
        .update_book(&path.into_inner(), body.into_inner().title)
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::Ok(book))
}
