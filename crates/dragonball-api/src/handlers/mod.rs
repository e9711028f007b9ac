//! Request handlers organized by domain.

pub mod auth;
pub mod character;
pub mod health;
pub mod user;
