//! Lawnexus Test Utils
//!
//! Shared testing utilities for the law office backend. Provides a builder for test contexts
//! backed by an in-memory SQLite database, plus factories for inserting entities with
//! sensible defaults.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::TeamMember;
//!
//! #[tokio::test]
//! async fn lists_team() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(TeamMember)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
