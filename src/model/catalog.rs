use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PeopleDto {
    pub id: i32,
    pub name: String,
    pub height: Option<String>,
    pub mass: Option<String>,
    pub hair_color: Option<String>,
    pub skin_color: Option<String>,
    pub eye_color: Option<String>,
    pub birth_year: Option<String>,
    pub gender: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub population: Option<String>,
    pub diameter: Option<String>,
    pub rotation_period: Option<String>,
    pub orbital_period: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StarshipDto {
    pub id: i32,
    pub name: String,
    pub model: Option<String>,
    pub manufacturer: Option<String>,
    pub cost_in_credits: Option<String>,
    pub length: Option<String>,
    pub crew: Option<String>,
    pub passengers: Option<String>,
    pub max_atmosphering_speed: Option<String>,
    pub hyperdrive_rating: Option<String>,
    pub starship_class: Option<String>,
}

impl From<entity::people::Model> for PeopleDto {
    fn from(person: entity::people::Model) -> Self {
        Self {
            id: person.id,
            name: person.name,
            height: person.height,
            mass: person.mass,
            hair_color: person.hair_color,
            skin_color: person.skin_color,
            eye_color: person.eye_color,
            birth_year: person.birth_year,
            gender: person.gender,
        }
    }
}

impl From<entity::planet::Model> for PlanetDto {
    fn from(planet: entity::planet::Model) -> Self {
        Self {
            id: planet.id,
            name: planet.name,
            climate: planet.climate,
            terrain: planet.terrain,
            population: planet.population,
            diameter: planet.diameter,
            rotation_period: planet.rotation_period,
            orbital_period: planet.orbital_period,
        }
    }
}

impl From<entity::starship::Model> for StarshipDto {
    fn from(starship: entity::starship::Model) -> Self {
        Self {
            id: starship.id,
            name: starship.name,
            model: starship.model,
            manufacturer: starship.manufacturer,
            cost_in_credits: starship.cost_in_credits,
            length: starship.length,
            crew: starship.crew,
            passengers: starship.passengers,
            max_atmosphering_speed: starship.max_atmosphering_speed,
            hyperdrive_rating: starship.hyperdrive_rating,
            starship_class: starship.starship_class,
        }
    }
}
