pub mod book;
pub mod memory;
pub mod user;
