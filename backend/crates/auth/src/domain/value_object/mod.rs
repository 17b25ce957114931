//! Value Objects
//!
//! Immutable, validated domain values.

pub mod session_token;
pub mod user_id;
pub mod user_name;
