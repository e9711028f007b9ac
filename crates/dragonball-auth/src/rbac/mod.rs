//! Authorization gate.

pub mod guard;

pub use guard::{Requirement, authorize};
