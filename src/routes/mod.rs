use crate::utils::webutils::validate_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod book;
pub mod health;
pub mod login;
pub mod signup;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let bearer_auth = HttpAuthentication::bearer(validate_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(web::scope("/signup").service(signup::signup));
    cfg.service(web::scope("/login").service(login::login));
    cfg.service(
        web::scope("/books")
            .wrap(bearer_auth)
            .service(book::create::create)
            .service(book::get::get)
            .service(book::update::update)
            .service(book::delete::delete),
    );
}
