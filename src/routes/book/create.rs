use actix_web::{post, web};
use std::sync::Arc;

use crate::store::memory::MemoryService;
use crate::types::book::{Book, CreateBook};
use crate::types::response::{ApiResponse, ApiResult};
use crate::utils::webutils::AuthedUser;

#[post("")]
async fn create(
    _req: actix_web::HttpRequest,
    user: AuthedUser,
    db: web::Data<Arc<MemoryService>>,
    body: web::Json<CreateBook>,
) -> ApiResult<Book> {
    let book = db.create_book(body.into_inner().title);
    log::debug!("{} created book {}", user.0, book.id);
    Ok(ApiResponse::Created(book))
}
