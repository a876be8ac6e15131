//! Domain types shared by the database and API crates.
//!
//! Nothing in here touches the database or HTTP; it is pure logic that can
//! be unit-tested in isolation.

pub mod error;
pub mod patch;
pub mod roles;
pub mod timestamp;
pub mod types;
