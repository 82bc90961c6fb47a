//! Factory functions for generating mock database models.
//!
//! Pure functions returning models with standard test values. The fixture helpers insert
//! exactly these models, so a record read back from the database compares equal to the
//! factory output for the same ID.

use crate::model::{PeopleModel, PlanetModel, StarshipModel, UserModel};

/// Create a mock person with the given ID
pub fn mock_people_model(id: i32) -> PeopleModel {
    PeopleModel {
        id,
        name: format!("Character {}", id),
        height: Some("172".to_string()),
        mass: Some("77".to_string()),
        hair_color: Some("blond".to_string()),
        skin_color: Some("fair".to_string()),
        eye_color: Some("blue".to_string()),
        birth_year: Some("19BBY".to_string()),
        gender: None,
    }
}

/// Create a mock planet with the given ID
pub fn mock_planet_model(id: i32) -> PlanetModel {
    PlanetModel {
        id,
        name: format!("Planet {}", id),
        climate: Some("arid".to_string()),
        terrain: Some("desert".to_string()),
        population: Some("200000".to_string()),
        diameter: Some("10465".to_string()),
        rotation_period: Some("23".to_string()),
        orbital_period: None,
    }
}

/// Create a mock starship with the given ID
pub fn mock_starship_model(id: i32) -> StarshipModel {
    StarshipModel {
        id,
        name: format!("Starship {}", id),
        model: Some("CR90 corvette".to_string()),
        manufacturer: Some("Corellian Engineering Corporation".to_string()),
        cost_in_credits: Some("3500000".to_string()),
        length: Some("150".to_string()),
        crew: Some("30-165".to_string()),
        passengers: Some("600".to_string()),
        max_atmosphering_speed: Some("950".to_string()),
        hyperdrive_rating: Some("2.0".to_string()),
        starship_class: None,
    }
}

/// Create a mock user with the given ID
///
/// Email is derived from the ID so multiple users satisfy the unique constraint.
pub fn mock_user_model(id: i32) -> UserModel {
    UserModel {
        id,
        email: format!("user{}@example.com", id),
        password: "password".to_string(),
        is_active: true,
    }
}
