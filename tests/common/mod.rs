use std::sync::Arc;

use bookshelf::config::{self, EnvConfig};
use bookshelf::store::memory::MemoryService;

pub mod client;

pub struct TestContext {
    pub db: Arc<MemoryService>,
}

impl TestContext {
    pub fn new() -> TestContext {
        config::init(get_test_config());
        TestContext {
            db: Arc::new(MemoryService::new()),
        }
    }
}

pub fn get_test_config() -> EnvConfig {
    EnvConfig {
        port: 8080,
        jwt_secret: "integration-test-secret".to_string(),
    }
}

// Test data helpers
pub mod test_data {
    use bookshelf::types::book::CreateBook;
    use bookshelf::types::user::SignupRequest;
    use uuid::Uuid;

    #[allow(dead_code)]
    pub fn sample_signup() -> SignupRequest {
        SignupRequest {
            email: format!("user-{}@test.com", Uuid::new_v4()),
            password: "testpassword".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_signup_with_email(email: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: "testpassword".to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn sample_book() -> CreateBook {
        CreateBook {
            title: "B1".to_string(),
        }
    }
}
