use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct PeopleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PeopleRepository<'a, C> {
    /// Creates a new instance of [`PeopleRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every people record ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::people::Model>, DbErr> {
        entity::prelude::People::find()
            .order_by_asc(entity::people::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::people::Model>, DbErr> {
        entity::prelude::People::find_by_id(id).one(self.db).await
    }
}
