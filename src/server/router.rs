//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications, and Swagger UI is
//! served at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// # Registered Endpoints
/// - `GET /users` - List users
/// - `GET /users/favorites` - List the current user's favorites
/// - `GET /people`, `GET /people/{id}` - Character catalog
/// - `GET /planets`, `GET /planets/{id}` - Planet catalog
/// - `GET /starships`, `GET /starships/{id}` - Starship catalog
/// - `POST /favorite/{kind}/{id}` - Add a favorite for the current user
/// - `DELETE /favorite/{kind}/{id}` - Remove a favorite from the current user
///
/// The OpenAPI specification is available at `/api/docs/openapi.json`.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState { db }).layer(session);
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Holocron", description = "Holocron API"), tags(
        (name = controller::catalog::CATALOG_TAG, description = "Character, planet & starship catalog routes"),
        (name = controller::user::USER_TAG, description = "User routes"),
        (name = controller::favorite::FAVORITE_TAG, description = "Favorite toggle routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::user::get_users))
        .routes(routes!(controller::user::get_user_favorites))
        .routes(routes!(controller::catalog::get_people))
        .routes(routes!(controller::catalog::get_person))
        .routes(routes!(controller::catalog::get_planets))
        .routes(routes!(controller::catalog::get_planet))
        .routes(routes!(controller::catalog::get_starships))
        .routes(routes!(controller::catalog::get_starship))
        .routes(routes!(
            controller::favorite::add_favorite,
            controller::favorite::remove_favorite
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
