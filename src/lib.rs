pub mod config;
pub mod routes;
pub mod store;
pub mod types;
pub mod utils;
