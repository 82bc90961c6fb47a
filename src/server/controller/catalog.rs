use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::{PeopleDto, PlanetDto, StarshipDto},
    },
    server::{
        error::Error,
        model::{
            app::AppState,
            catalog::{PeopleId, PlanetId, StarshipId},
        },
        service::catalog::CatalogService,
    },
};

pub static CATALOG_TAG: &str = "catalog";

/// List all characters
#[utoipa::path(
    get,
    path = "/people",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing characters", body = Vec<PeopleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let people = CatalogService::new(&state.db).list_people().await?;

    Ok((StatusCode::OK, Json(people)))
}

/// Get a single character
#[utoipa::path(
    get,
    path = "/people/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Character ID")),
    responses(
        (status = 200, description = "Success when retrieving the character", body = PeopleDto),
        (status = 404, description = "Character not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let person = CatalogService::new(&state.db)
        .get_person(PeopleId(id))
        .await?;

    Ok((StatusCode::OK, Json(person)))
}

/// List all planets
#[utoipa::path(
    get,
    path = "/planets",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing planets", body = Vec<PlanetDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planets(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let planets = CatalogService::new(&state.db).list_planets().await?;

    Ok((StatusCode::OK, Json(planets)))
}

/// Get a single planet
#[utoipa::path(
    get,
    path = "/planets/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Planet ID")),
    responses(
        (status = 200, description = "Success when retrieving the planet", body = PlanetDto),
        (status = 404, description = "Planet not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let planet = CatalogService::new(&state.db)
        .get_planet(PlanetId(id))
        .await?;

    Ok((StatusCode::OK, Json(planet)))
}

/// List all starships
#[utoipa::path(
    get,
    path = "/starships",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Success when listing starships", body = Vec<StarshipDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starships(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let starships = CatalogService::new(&state.db).list_starships().await?;

    Ok((StatusCode::OK, Json(starships)))
}

/// Get a single starship
#[utoipa::path(
    get,
    path = "/starships/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Starship ID")),
    responses(
        (status = 200, description = "Success when retrieving the starship", body = StarshipDto),
        (status = 404, description = "Starship not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_starship(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let starship = CatalogService::new(&state.db)
        .get_starship(StarshipId(id))
        .await?;

    Ok((StatusCode::OK, Json(starship)))
}
