use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// Leaving a table out on purpose is how tests simulate a failing query: any
/// repository call touching the missing table returns a `DbErr`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Game, Community};
///
/// let test = TestBuilder::new()
///     .with_table(Game)
///     .with_table(Community)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys after
    /// their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user and profile tables.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User).with_table(Profile)
    }

    /// Adds every table hanging off a game:
    /// - User, Profile
    /// - Game
    /// - Community, Guide, PlayGuide, Player, GameVersion
    pub fn with_game_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Game)
            .with_table(Community)
            .with_table(Guide)
            .with_table(PlayGuide)
            .with_table(Player)
            .with_table(GameVersion)
    }

    /// Adds every table in the schema, including the social tables used by
    /// profiles and the activity feed.
    pub fn with_all_tables(self) -> Self {
        self.with_game_tables()
            .with_table(UserGame)
            .with_table(UserCommunity)
            .with_table(Follow)
            .with_table(Event)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
