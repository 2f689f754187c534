//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shorthand
//! for default creation. Defaults are unique per call so several records can be
//! inserted into one database without tripping unique constraints.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::create_team_member(db).await?;
//! let client = factory::client::ClientFactory::new(db)
//!     .company("Acme Legal Holdings")
//!     .build()
//!     .await?;
//! let invoice = factory::create_invoice(db, client.id, member.id).await?;
//! ```

pub mod client;
pub mod document;
pub mod helpers;
pub mod invoice;
pub mod leave_request;
pub mod legal_case;
pub mod task;
pub mod team_member;

pub use client::create_client;
pub use document::create_document;
pub use invoice::create_invoice;
pub use leave_request::create_leave_request;
pub use legal_case::create_case;
pub use task::create_task;
pub use team_member::create_team_member;
