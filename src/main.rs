use actix_web::{web, App, HttpServer};
use bookshelf::config::{self, EnvConfig};
use bookshelf::routes::configure_routes;
use bookshelf::store::memory::MemoryService;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = config::init(EnvConfig::from_env());
    let addr = format!("0.0.0.0:{}", config.port);

    let store = Arc::new(MemoryService::new());

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&store)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
