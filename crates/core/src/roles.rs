//! Well-known role name constants.
//!
//! These must match the `role` claim issued by the identity provider.

pub const ROLE_ADMIN: &str = "Admin";
pub const ROLE_USER: &str = "User";

/// Role comparison is case-insensitive; identity providers disagree on casing.
pub fn has_role(actual: &str, expected: &str) -> bool {
    actual.eq_ignore_ascii_case(expected)
}
