use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use bookshelf::{
    store::memory::MemoryService,
    types::error::AppError,
    utils::{password::hash_password, token},
};

pub struct TestClient {
    pub db: Arc<MemoryService>,
}

impl TestClient {
    pub fn new(db: Arc<MemoryService>) -> Self {
        TestClient { db }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .configure(bookshelf::routes::configure_routes)
    }

    /// Registers a user directly against the store and returns
    /// (email, bearer token), skipping the HTTP signup/login round trip.
    #[allow(dead_code)]
    pub fn create_test_user(&self, email: Option<String>) -> Result<(String, String), AppError> {
        let email = email.unwrap_or_else(|| format!("user-{}@test.com", Uuid::new_v4()));

        let hash =
            hash_password("testpassword").map_err(|e| AppError::Internal(e.to_string()))?;
        self.db.register_user(&email, hash)?;

        let access_token =
            token::issue(&email).map_err(|e| AppError::Internal(e.to_string()))?;

        Ok((email, access_token))
    }
}
