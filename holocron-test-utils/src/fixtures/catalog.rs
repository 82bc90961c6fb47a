use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{PeopleModel, PlanetModel, StarshipModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    pub async fn insert_mock_people(&self, id: i32) -> Result<PeopleModel, TestError> {
        let person = factory::mock_people_model(id).into_active_model().reset_all();

        Ok(entity::prelude::People::insert(person)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_planet(&self, id: i32) -> Result<PlanetModel, TestError> {
        let planet = factory::mock_planet_model(id).into_active_model().reset_all();

        Ok(entity::prelude::Planet::insert(planet)
            .exec_with_returning(&self.setup.db)
            .await?)
    }

    pub async fn insert_mock_starship(&self, id: i32) -> Result<StarshipModel, TestError> {
        let starship = factory::mock_starship_model(id)
            .into_active_model()
            .reset_all();

        Ok(entity::prelude::Starship::insert(starship)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
