use chrono::Utc;
use std::sync::PoisonError;

use crate::store::memory::MemoryService;
use crate::types::{error::AppError, user::UserRecord};
use crate::utils::password;

impl MemoryService {
    pub fn user_exists(&self, email: &str) -> bool {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.contains_key(email)
    }

    pub fn get_user(&self, email: &str) -> Option<UserRecord> {
        let users = self.users.read().unwrap_or_else(PoisonError::into_inner);
        users.get(email).cloned()
    }

    /// Signup: store the credential record. The check and insert happen under
    /// one write lock so duplicate concurrent signups cannot both succeed.
    pub fn register_user(&self, email: &str, password_hash: String) -> Result<(), AppError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        if users.contains_key(email) {
            return Err(AppError::AlreadyExists);
        }
        users.insert(
            email.to_owned(),
            UserRecord {
                email: email.to_owned(),
                password_hash,
                created_at: Utc::now(),
            },
        );
        Ok(())
    }

    /// False for unknown users and for wrong passwords alike; callers must
    /// not be able to tell the two apart.
    pub fn verify_credentials(&self, email: &str, raw_password: &str) -> bool {
        match self.get_user(email) {
            Some(user) => password::verify_password(raw_password, &user.password_hash),
            None => false,
        }
    }
}
