pub mod authentication;
pub mod health;
pub mod query_extractor;
pub mod server;
pub mod tour;
pub mod user;
