use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    LoginRequest, LoginResponse, LogoutRequest, MessageResponse, RegisterRequest, RegisterResponse,
};
use crate::modules::auth::registration::Role;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::login,
        crate::modules::auth::controller::register_admin,
        crate::modules::auth::controller::register_student,
        crate::modules::auth::controller::register_lecturer,
        crate::modules::auth::controller::logout,
    ),
    components(
        schemas(
            Role,
            RegisterRequest,
            RegisterResponse,
            LoginRequest,
            LoginResponse,
            LogoutRequest,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login, and logout")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
