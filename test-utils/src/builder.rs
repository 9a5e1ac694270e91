use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Planet, User, UserFavorite};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Planet)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the entity's unique keys and foreign keys. Tables
    /// with foreign keys must be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index to create once all tables exist.
    ///
    /// # Arguments
    /// - `index` - CREATE INDEX statement, usually built with `Index::create()`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds all tables required for favorite operations.
    ///
    /// Adds the following tables in dependency order:
    /// - User
    /// - Planet
    /// - Character
    /// - UserFavorite
    ///
    /// The per-(user, target) unique indexes are created explicitly with the same
    /// names the migration uses, so uniqueness holds exactly as in production.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_favorite_tables(self) -> Self {
        use entity::user_favorite::Column;

        self.with_table(User)
            .with_table(Planet)
            .with_table(Character)
            .with_table(UserFavorite)
            .with_index(
                Index::create()
                    .if_not_exists()
                    .name("user_planet_favorite_idx")
                    .table(UserFavorite)
                    .col(Column::UserId)
                    .col(Column::PlanetId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .if_not_exists()
                    .name("user_character_favorite_idx")
                    .table(UserFavorite)
                    .col(Column::UserId)
                    .col(Column::CharacterId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Adds every table in the schema.
    ///
    /// Equivalent to `with_favorite_tables()` plus the star system, faction and
    /// species tables.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_universe_tables(self) -> Self {
        self.with_favorite_tables()
            .with_table(StarSystem)
            .with_table(Faction)
            .with_table(Species)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, followed by every index added
    /// via `with_index()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
