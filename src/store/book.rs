use std::sync::PoisonError;
use uuid::Uuid;

use crate::store::memory::MemoryService;
use crate::types::book::Book;

impl MemoryService {
    pub fn create_book(&self, title: String) -> Book {
        let id = Uuid::new_v4().to_string();
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        books.insert(id.clone(), title.clone());
        Book { id, title }
    }

    pub fn get_book(&self, id: &str) -> Option<Book> {
        let books = self.books.read().unwrap_or_else(PoisonError::into_inner);
        books.get(id).map(|title| Book {
            id: id.to_owned(),
            title: title.clone(),
        })
    }

    pub fn update_book(&self, id: &str, title: String) -> Option<Book> {
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        let slot = books.get_mut(id)?;
        *slot = title.clone();
        Some(Book {
            id: id.to_owned(),
            title,
        })
    }

    pub fn delete_book(&self, id: &str) -> Option<()> {
        let mut books = self.books.write().unwrap_or_else(PoisonError::into_inner);
        books.remove(id).map(|_| ())
    }
}
