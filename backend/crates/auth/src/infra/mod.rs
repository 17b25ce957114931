//! Infrastructure Layer
//!
//! Concrete store implementations.

pub mod memory;
pub mod sqlite;
