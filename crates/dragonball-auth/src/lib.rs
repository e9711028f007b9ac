//! # dragonball-auth
//!
//! Authentication and authorization for the Dragonball catalog service.
//!
//! ## Modules
//!
//! - `jwt`: signed, time-bounded bearer tokens (HMAC-SHA-256)
//! - `password`: bcrypt hashing and verification
//! - `authenticator`: credential check for the login flow
//! - `interceptor`: per-request bearer token resolution into an [`AuthContext`]
//! - `rbac`: the authorization gate

pub mod authenticator;
pub mod context;
pub mod interceptor;
pub mod jwt;
pub mod password;
pub mod rbac;

pub use authenticator::Authenticator;
pub use context::AuthContext;
pub use interceptor::{AnonymousReason, AuthOutcome, RequestAuthenticator};
pub use jwt::{Claims, TokenCodec};
pub use password::PasswordHasher;
pub use rbac::{Requirement, authorize};
