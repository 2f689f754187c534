//! SeaORM entities for the law office schema.

pub mod prelude;

pub mod client;
pub mod document;
pub mod invoice;
pub mod invoice_item;
pub mod leave_request;
pub mod legal_case;
pub mod task;
pub mod team_member;
