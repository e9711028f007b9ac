//! # dragonball-entity
//!
//! Domain entity models for the Dragonball catalog service. Each entity
//! maps to a database table and derives `sqlx::FromRow` for query mapping.

pub mod character;
pub mod user;
