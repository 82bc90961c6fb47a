use axum::http::{Method, StatusCode};
use entity::sea_orm_active_enums::FavoriteType;
use holocron::model::{
    api::{ErrorDto, MessageDto},
    favorite::{FavoriteDto, FavoriteKind},
};

use super::*;

/// Expect an added planet to show up in the current user's favorites
#[tokio::test]
async fn add_then_list() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_planet(1)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.msg, "Favorite planet added");

    let resp = send(&app, Method::GET, "/users/favorites").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].user_id, 1);
    assert_eq!(favorites[0].favorite_type, FavoriteKind::Planet);
    assert_eq!(favorites[0].favorite_id, 1);

    Ok(())
}

/// Expect the second add to be rejected while a single favorite remains
#[tokio::test]
async fn duplicate_add_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_planet(1)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&app, Method::POST, "/favorite/planet/1").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite planet already added");

    let resp = send(&app, Method::GET, "/users/favorites").await;
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert_eq!(favorites.len(), 1);

    Ok(())
}

/// Expect adding a missing character to fail without changing favorites
#[tokio::test]
async fn add_missing_entity_leaves_favorites_unchanged() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/favorite/people/999").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Character not found");

    let resp = send(&app, Method::GET, "/users/favorites").await;
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert!(favorites.is_empty());

    Ok(())
}

/// Expect removing the only favorite to leave an empty list
#[tokio::test]
async fn remove_existing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_starship(5)
        .with_mock_favorite(1, FavoriteType::Starship, 5)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::DELETE, "/favorite/starship/5").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.msg, "Favorite starship removed");

    let resp = send(&app, Method::GET, "/users/favorites").await;
    let favorites: Vec<FavoriteDto> = body_json(resp).await;
    assert!(favorites.is_empty());

    Ok(())
}

/// Expect removing a favorite that was never added to fail
#[tokio::test]
async fn remove_never_added_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_people(3)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::DELETE, "/favorite/people/3").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite character not found");

    Ok(())
}

/// Expect an unknown kind in the path to be rejected before reaching the service
#[tokio::test]
async fn unknown_kind_is_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;
    let app = app(&test);

    let resp = send(&app, Method::POST, "/favorite/vehicle/1").await;

    assert!(resp.status().is_client_error());

    Ok(())
}

/// Expect the OpenAPI document to describe the favorite routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/docs/openapi.json").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: serde_json::Value = body_json(resp).await;
    let paths = doc.get("paths").expect("OpenAPI document has paths");
    assert!(paths.get("/favorite/{kind}/{id}").is_some());
    assert!(paths.get("/users/favorites").is_some());

    Ok(())
}
