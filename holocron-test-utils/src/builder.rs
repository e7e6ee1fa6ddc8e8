//! Declarative builder for test database setup.
//!
//! Table creation is queued on the builder and executed during the final
//! `build()` call, which returns a ready [`TestContext`].

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test initialization.
///
/// ```ignore
/// let test = TestBuilder::new().with_favorites_tables().build().await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_favorites_tables: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_favorites_tables: false,
        }
    }

    /// Add all tables used by the favorites subsystem: User, Character,
    /// Planet, and Favorite.
    pub fn with_favorites_tables(mut self) -> Self {
        self.include_favorites_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Create the test database and execute all queued table creation.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new().await?;

        let mut stmts = self.tables;
        if self.include_favorites_tables {
            let schema = Schema::new(DbBackend::Sqlite);
            stmts.extend([
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        context.with_tables(stmts).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
