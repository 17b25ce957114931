//! Presentation Layer
//!
//! HTTP handlers, request/response DTOs, and the router.

pub mod dto;
pub mod handlers;
pub mod router;
