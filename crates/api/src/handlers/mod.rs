//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource. Handlers
//! build a request-scoped persistence context from the shared pool and map
//! errors via [`AppError`](crate::error::AppError).

pub mod advertisement;
