use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables in dependency order, then call `build()` to create the
/// in-memory database with those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_invoice_tables()
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the team member and client tables.
    pub fn with_core_tables(self) -> Self {
        self.with_table(TeamMember).with_table(Client)
    }

    /// Adds the tables required for case, document and task operations.
    ///
    /// Includes the core tables.
    pub fn with_case_tables(self) -> Self {
        self.with_core_tables()
            .with_table(LegalCase)
            .with_table(Document)
            .with_table(Task)
    }

    /// Adds the tables required for invoice operations.
    ///
    /// Includes the core tables.
    pub fn with_invoice_tables(self) -> Self {
        self.with_core_tables()
            .with_table(Invoice)
            .with_table(InvoiceItem)
    }

    /// Adds the tables required for leave request operations.
    pub fn with_leave_tables(self) -> Self {
        self.with_table(TeamMember).with_table(LeaveRequest)
    }

    /// Adds every table in the schema.
    pub fn with_all_tables(self) -> Self {
        self.with_case_tables()
            .with_table(Invoice)
            .with_table(InvoiceItem)
            .with_table(LeaveRequest)
    }

    /// Builds the test context and creates all configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
