//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token validation (and minting, for tooling and tests).
//!
//! Tokens are issued by the identity provider; this service only checks
//! signature, expiry and the `role` claim.

pub mod jwt;
