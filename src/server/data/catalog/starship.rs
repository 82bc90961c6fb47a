use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct StarshipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StarshipRepository<'a, C> {
    /// Creates a new instance of [`StarshipRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every starship record ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find()
            .order_by_asc(entity::starship::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::starship::Model>, DbErr> {
        entity::prelude::Starship::find_by_id(id).one(self.db).await
    }
}
