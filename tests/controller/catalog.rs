use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use holocron::{
    model::{
        api::ErrorDto,
        catalog::{PeopleDto, PlanetDto, StarshipDto},
    },
    server::controller::catalog::{
        get_people, get_person, get_planet, get_planets, get_starship, get_starships,
    },
};

use super::*;

/// Expect 200 OK with every character ordered by ID
#[tokio::test]
async fn lists_people() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_people(2)
        .with_mock_people(1)
        .build()
        .await?;

    let result = get_people(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let people: Vec<PeopleDto> = body_json(resp).await;
    assert_eq!(
        people,
        vec![
            PeopleDto::from(factory::mock_people_model(1)),
            PeopleDto::from(factory::mock_people_model(2)),
        ]
    );

    Ok(())
}

/// Expect 200 OK with an empty list when no planets exist
#[tokio::test]
async fn lists_no_planets() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let result = get_planets(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let planets: Vec<PlanetDto> = body_json(resp).await;
    assert!(planets.is_empty());

    Ok(())
}

/// Expect 200 OK with every starship
#[tokio::test]
async fn lists_starships() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_starship(5)
        .build()
        .await?;

    let result = get_starships(State(test.into_app_state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    let starships: Vec<StarshipDto> = body_json(resp).await;
    assert_eq!(starships.len(), 1);
    assert_eq!(starships[0].id, 5);

    Ok(())
}

/// Expect 200 OK with the requested planet
#[tokio::test]
async fn gets_planet() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet(1)
        .build()
        .await?;

    let result = get_planet(State(test.into_app_state()), Path(1)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let planet: PlanetDto = body_json(resp).await;
    assert_eq!(planet, PlanetDto::from(factory::mock_planet_model(1)));

    Ok(())
}

/// Expect 404 Not Found with the per-kind message for missing records
#[tokio::test]
async fn returns_not_found_for_missing_entities() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let resp = get_person(State(test.into_app_state()), Path(999))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Character not found");

    let resp = get_planet(State(test.into_app_state()), Path(999))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Planet not found");

    let resp = get_starship(State(test.into_app_state()), Path(999))
        .await
        .into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Starship not found");

    Ok(())
}

/// Expect 500 Internal Server Error when the catalog tables do not exist
#[tokio::test]
async fn returns_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = get_people(State(test.into_app_state()))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Internal server error");

    Ok(())
}
