//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `Admin` role.
//! - [`rbac::RequireAuth`] -- Requires `Admin` or `User`.

pub mod auth;
pub mod rbac;
