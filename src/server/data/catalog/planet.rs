use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct PlanetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlanetRepository<'a, C> {
    /// Creates a new instance of [`PlanetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every planet record ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find()
            .order_by_asc(entity::planet::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::planet::Model>, DbErr> {
        entity::prelude::Planet::find_by_id(id).one(self.db).await
    }
}
