//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{advert_handler, health_handler, user_handler};
use crate::api::schemas::{CreateAdvert, CreateUser, UpdateAdvert, UpdateUser};
use crate::domain::{Advert, User};
use crate::errors::{ErrorResponse, ValidationDetail};
use crate::types::{IdResponse, StatusResponse};

/// OpenAPI documentation for the adverts API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Adverts API",
        version = "0.1.0",
        description = "CRUD service for users and their adverts",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        // Advert endpoints
        advert_handler::create_advert,
        advert_handler::get_advert,
        advert_handler::update_advert,
        advert_handler::delete_advert,
        health_handler::health_check,
    ),
    components(
        schemas(
            User,
            Advert,
            CreateUser,
            UpdateUser,
            CreateAdvert,
            UpdateAdvert,
            IdResponse,
            StatusResponse,
            ErrorResponse,
            ValidationDetail,
            health_handler::HealthResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and management"),
        (name = "Adverts", description = "Advert posting and management"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
