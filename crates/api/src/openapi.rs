// OpenAPI specification generation
//
// This module defines the OpenAPI spec for the chess players API.
// The server publishes it at /api-doc/openapi.json.

use crate::api;
use crate::api::{ErrorResponse, ListResponse};
use crate::auth::routes::{CredentialsRequest, TokenResponse};
use chessplayers_core::{Category, ChessPlayer, User};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the bearer scheme referenced by protected routes
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI documentation for the chess players API
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::auth::routes::signup,
        crate::auth::routes::signin,
        api::players::create_player,
        api::players::list_players,
        api::players::get_player,
        api::players::update_player,
        api::players::delete_player,
        api::categories::create_category,
        api::categories::list_categories,
        api::categories::get_category,
        api::protected::probe,
        api::protected::me,
    ),
    components(
        schemas(
            ChessPlayer, Category, User,
            ErrorResponse,
            CredentialsRequest, TokenResponse,
            api::players::CreatePlayerRequest, api::players::UpdatePlayerRequest,
            api::categories::CreateCategoryRequest,
            api::protected::ProbeResponse,
            ListResponse<ChessPlayer>,
            ListResponse<Category>,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "auth", description = "Signup and signin"),
        (name = "chessplayers", description = "Chess player management endpoints"),
        (name = "categories", description = "Category management endpoints"),
        (name = "protected", description = "Endpoints requiring a bearer token")
    ),
    info(
        title = "Chess Players API",
        description = "Chess players and categories with email/password accounts and bearer tokens",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
pub struct ApiDoc;
