//! Test context backed by an isolated in-memory SQLite database.
//!
//! Each context owns its own database connection, so tests never share
//! state. Tables are created from the entity definitions rather than by
//! running migrations, which keeps per-test setup fast.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test environment handle returned by [`TestBuilder`](crate::TestBuilder)
/// and the `test_setup_*` macros.
///
/// Fixture helpers hang off accessor methods:
///
/// ```ignore
/// let test = TestBuilder::new().with_favorites_tables().build().await?;
///
/// let user = test.user().insert_user("luke@example.com", "luke").await?;
/// let planet = test.catalog().insert_planet("Hoth", Some("frozen"), None).await?;
/// test.favorite().insert_planet_favorite(Some(user.id), planet.id).await?;
/// ```
pub struct TestContext {
    /// Connection to the in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Execute the provided CREATE TABLE statements against the test database.
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Convert the test database handle into any state type constructed from
    /// a [`DatabaseConnection`]. This allows conversion to the application's
    /// state type without a circular dependency on the application crate.
    pub fn state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        $crate::TestContext::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(setup)
        }.await
    }};
}

#[macro_export]
macro_rules! test_setup_with_favorites_tables {
    () => {{
        async {
            let setup = $crate::TestContext::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::TestError>(setup)
        }.await
    }};
}
