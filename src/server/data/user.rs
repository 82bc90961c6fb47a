use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(user_id).one(self.db).await
    }

    /// Gets the user with the lowest ID, the stand-in identity when no session user is present
    pub async fn get_bootstrap(&self) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets all users ordered by ID
    pub async fn get_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await
    }
}
