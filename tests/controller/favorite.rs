use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::sea_orm_active_enums::FavoriteType;
use holocron::{
    model::{
        api::{ErrorDto, MessageDto},
        favorite::FavoriteKind,
    },
    server::{
        controller::favorite::{add_favorite, remove_favorite},
        model::session::user::SessionUserId,
    },
};

use super::*;

/// Expect 201 Created with the per-kind message for each catalog
#[tokio::test]
async fn adds_favorite_for_each_kind() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_people(1)
        .with_mock_planet(1)
        .with_mock_starship(1)
        .build()
        .await?;

    for (kind, msg) in [
        (FavoriteKind::People, "Favorite character added"),
        (FavoriteKind::Planet, "Favorite planet added"),
        (FavoriteKind::Starship, "Favorite starship added"),
    ] {
        let result = add_favorite(
            State(test.into_app_state()),
            test.session.clone(),
            Path((kind, 1)),
        )
        .await;

        assert!(result.is_ok());
        let resp = result.unwrap().into_response();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: MessageDto = body_json(resp).await;
        assert_eq!(body.msg, msg);
    }

    Ok(())
}

/// Expect 400 Bad Request when the favorite was already added
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_planet(1)
        .with_mock_favorite(1, FavoriteType::Planet, 1)
        .build()
        .await?;

    let resp = add_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path((FavoriteKind::Planet, 1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite planet already added");

    Ok(())
}

/// Expect 404 Not Found when the character does not exist
#[tokio::test]
async fn returns_not_found_for_missing_entity() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .build()
        .await?;

    let resp = add_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path((FavoriteKind::People, 999)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Character not found");

    Ok(())
}

/// Expect the favorite to be added for the session user rather than the bootstrap user
#[tokio::test]
async fn adds_favorite_for_session_user() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_user(2)
        .with_mock_starship(5)
        .with_mock_favorite(1, FavoriteType::Starship, 5)
        .build()
        .await?;
    SessionUserId::insert(&test.session, 2).await.unwrap();

    let resp = add_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path((FavoriteKind::Starship, 5)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 200 OK when removing an existing favorite
#[tokio::test]
async fn removes_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_favorite(1, FavoriteType::Starship, 5)
        .build()
        .await?;

    let result = remove_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path((FavoriteKind::Starship, 5)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: MessageDto = body_json(resp).await;
    assert_eq!(body.msg, "Favorite starship removed");

    Ok(())
}

/// Expect 404 Not Found when removing a favorite that was never added
#[tokio::test]
async fn returns_not_found_for_missing_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_user(1)
        .with_mock_planet(1)
        .build()
        .await?;

    let resp = remove_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path((FavoriteKind::Planet, 1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "Favorite planet not found");

    Ok(())
}

/// Expect 404 Not Found when there is no user to act as
#[tokio::test]
async fn returns_not_found_without_users() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_user_tables()
        .with_mock_planet(1)
        .build()
        .await?;

    let resp = add_favorite(
        State(test.into_app_state()),
        test.session.clone(),
        Path((FavoriteKind::Planet, 1)),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: ErrorDto = body_json(resp).await;
    assert_eq!(body.error, "User not found");

    Ok(())
}
