//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod client;
pub mod document;
pub mod enums;
pub mod invoice;
pub mod leave;
pub mod legal_case;
pub mod task;
pub mod team;
