use std::collections::HashMap;
use std::sync::RwLock;

use crate::types::user::UserRecord;

/// Process-wide in-memory backing store. Both maps live behind locks so
/// concurrent signups against the same email cannot both win the insert.
/// Swapping in a persistent store means replacing this service without
/// touching the auth logic layered on top of it.
pub struct MemoryService {
    pub(crate) users: RwLock<HashMap<String, UserRecord>>,
    pub(crate) books: RwLock<HashMap<String, String>>,
}

impl MemoryService {
    pub fn new() -> Self {
        log::info!("Initializing in-memory store");
        MemoryService {
            users: RwLock::new(HashMap::new()),
            books: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryService {
    fn default() -> Self {
        Self::new()
    }
}
