//! HTTP handlers.
//!
//! Each handler checks access with `AuthGuard`, converts the request DTO into
//! domain parameters, calls one service and converts the result back into a DTO.

pub mod auth;
pub mod client;
pub mod document;
pub mod invoice;
pub mod leave;
pub mod legal_case;
pub mod task;
pub mod team;
