//! Declarative test builder.
//!
//! The builder pattern allows chaining configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use entity::sea_orm_active_enums::FavoriteType;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{error::TestError, TestContext};

/// Name of the unique index guarding one favorite per user, type & ID
pub static FAVORITE_UNIQUE_INDEX: &str = "idx-favorites-user_id-favorite_type-favorite_id";

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// mock fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,
    include_user_tables: bool,

    // Database fixtures to insert
    people: Vec<i32>,
    planets: Vec<i32>,
    starships: Vec<i32>,
    users: Vec<i32>,
    favorites: Vec<(i32, FavoriteType, i32)>, // (user_id, favorite_type, favorite_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            include_user_tables: false,
            people: Vec::new(),
            planets: Vec::new(),
            starships: Vec::new(),
            users: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Add the people, planets & starships tables to the test database.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add the users & favorites tables to the test database.
    ///
    /// The favorites table is created with the same unique index on
    /// `(user_id, favorite_type, favorite_id)` as the migration.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(People)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock person into database, see [`factory::mock_people_model`](crate::fixtures::factory::mock_people_model)
    pub fn with_mock_people(mut self, id: i32) -> Self {
        self.people.push(id);
        self
    }

    /// Insert mock planet into database
    pub fn with_mock_planet(mut self, id: i32) -> Self {
        self.planets.push(id);
        self
    }

    /// Insert mock starship into database
    pub fn with_mock_starship(mut self, id: i32) -> Self {
        self.starships.push(id);
        self
    }

    /// Insert mock user into database.
    ///
    /// Requires [`with_user_tables`](Self::with_user_tables).
    pub fn with_mock_user(mut self, id: i32) -> Self {
        self.users.push(id);
        self
    }

    /// Insert a favorite for a user into database.
    ///
    /// The referenced catalog entity is not required to exist, which allows tests to set up
    /// favorites pointing at removed records. The user must be added via
    /// [`with_mock_user`](Self::with_mock_user).
    pub fn with_mock_favorite(
        mut self,
        user_id: i32,
        favorite_type: FavoriteType,
        favorite_id: i32,
    ) -> Self {
        self.favorites.push((user_id, favorite_type, favorite_id));
        self
    }

    /// Build the test context by creating all configured tables & fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (catalog, then user tables if specified, then custom tables)
    /// 2. Inserts database fixtures (catalog entities, users, favorites)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();
        let mut all_indexes = Vec::new();

        if self.include_catalog_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::People),
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Starship),
            ]);
        }

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
            all_indexes.push(favorite_unique_index());
        }

        all_tables.extend(self.tables);
        setup.execute_all(all_tables).await?;
        setup.execute_all(all_indexes).await?;

        // 2. Insert database fixtures
        for id in self.people {
            setup.catalog().insert_mock_people(id).await?;
        }

        for id in self.planets {
            setup.catalog().insert_mock_planet(id).await?;
        }

        for id in self.starships {
            setup.catalog().insert_mock_starship(id).await?;
        }

        for id in self.users {
            setup.user().insert_mock_user(id).await?;
        }

        for (user_id, favorite_type, favorite_id) in self.favorites {
            setup
                .favorite()
                .insert_favorite(user_id, favorite_type, favorite_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn favorite_unique_index() -> IndexCreateStatement {
    Index::create()
        .name(FAVORITE_UNIQUE_INDEX)
        .table(entity::prelude::Favorite)
        .col(entity::favorite::Column::UserId)
        .col(entity::favorite::Column::FavoriteType)
        .col(entity::favorite::Column::FavoriteId)
        .unique()
        .to_owned()
}
