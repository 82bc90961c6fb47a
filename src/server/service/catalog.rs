use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::{PeopleDto, PlanetDto, StarshipDto},
    server::{
        data::catalog::{
            people::PeopleRepository, planet::PlanetRepository, starship::StarshipRepository,
        },
        error::{catalog::CatalogError, Error},
        model::catalog::{EntityRef, PeopleId, PlanetId, StarshipId},
    },
};

/// Read-only queries over the people, planet & starship catalogs.
pub struct CatalogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CatalogService<'a> {
    /// Creates a new instance of [`CatalogService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every person ordered by ID
    pub async fn list_people(&self) -> Result<Vec<PeopleDto>, Error> {
        let people = PeopleRepository::new(self.db).get_all().await?;

        Ok(people.into_iter().map(PeopleDto::from).collect())
    }

    /// Gets a single person
    ///
    /// # Returns
    /// - `Ok(PeopleDto)` - Person found
    /// - `Err(Error::CatalogError)` - No person with that ID exists
    /// - `Err(Error::DbErr)` - Database query failed
    pub async fn get_person(&self, id: PeopleId) -> Result<PeopleDto, Error> {
        PeopleRepository::new(self.db)
            .get_by_id(id.0)
            .await?
            .map(PeopleDto::from)
            .ok_or_else(|| CatalogError::EntityNotFound(EntityRef::People(id)).into())
    }

    /// Lists every planet ordered by ID
    pub async fn list_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planets = PlanetRepository::new(self.db).get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Gets a single planet, failing with [`CatalogError::EntityNotFound`] if it does not exist
    pub async fn get_planet(&self, id: PlanetId) -> Result<PlanetDto, Error> {
        PlanetRepository::new(self.db)
            .get_by_id(id.0)
            .await?
            .map(PlanetDto::from)
            .ok_or_else(|| CatalogError::EntityNotFound(EntityRef::Planet(id)).into())
    }

    /// Lists every starship ordered by ID
    pub async fn list_starships(&self) -> Result<Vec<StarshipDto>, Error> {
        let starships = StarshipRepository::new(self.db).get_all().await?;

        Ok(starships.into_iter().map(StarshipDto::from).collect())
    }

    /// Gets a single starship, failing with [`CatalogError::EntityNotFound`] if it does not exist
    pub async fn get_starship(&self, id: StarshipId) -> Result<StarshipDto, Error> {
        StarshipRepository::new(self.db)
            .get_by_id(id.0)
            .await?
            .map(StarshipDto::from)
            .ok_or_else(|| CatalogError::EntityNotFound(EntityRef::Starship(id)).into())
    }

    /// Checks whether the referenced entity currently exists in its table
    pub async fn entity_exists(&self, entity: EntityRef) -> Result<bool, Error> {
        let exists = match entity {
            EntityRef::People(PeopleId(id)) => {
                PeopleRepository::new(self.db).get_by_id(id).await?.is_some()
            }
            EntityRef::Planet(PlanetId(id)) => {
                PlanetRepository::new(self.db).get_by_id(id).await?.is_some()
            }
            EntityRef::Starship(StarshipId(id)) => StarshipRepository::new(self.db)
                .get_by_id(id)
                .await?
                .is_some(),
        };

        Ok(exists)
    }
}
