//! Request extractors whose rejections render as [`AppError`] JSON bodies.
//!
//! axum's own `Json` and `Path` reject with plain-text bodies; these wrappers
//! route the rejection through `AppError` so every error shares the
//! `{ "error", "code" }` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
