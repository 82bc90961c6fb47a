use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};

use crate::{error::TestError, fixtures::factory, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert the [`factory::mock_user_model`] for the given ID
    pub async fn insert_mock_user(&self, id: i32) -> Result<UserModel, TestError> {
        let user = factory::mock_user_model(id).into_active_model().reset_all();

        Ok(entity::prelude::User::insert(user)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
