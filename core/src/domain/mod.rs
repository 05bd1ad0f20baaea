pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod jwt;
pub mod mailer;
pub mod query;
pub mod tour;
pub mod user;
