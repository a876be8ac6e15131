//! Row types and wire-facing view models.

pub mod advertisement;
pub mod advertisement_view;
