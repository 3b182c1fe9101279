use sqlx::PgPool;

use crate::config::cors::CorsConfig;
use crate::config::database::init_db_pool;
use crate::config::jwt::JwtConfig;
use crate::modules::auth::service::AuthService;
use crate::modules::auth::tokens::TokenService;
use crate::modules::users::store::UserStore;
use crate::utils::password::PasswordHasher;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub auth: AuthService,
}

pub async fn init_app_state() -> AppState {
    let db = init_db_pool().await;
    let jwt_config = JwtConfig::from_env();

    AppState {
        auth: build_auth_service(db.clone(), jwt_config.clone()),
        db,
        jwt_config,
        cors_config: CorsConfig::from_env(),
    }
}

/// Wire the facade and its collaborators explicitly; there is no container
/// or global registry behind this.
pub fn build_auth_service(db: PgPool, jwt_config: JwtConfig) -> AuthService {
    AuthService::new(
        UserStore::new(db.clone()),
        PasswordHasher::default(),
        TokenService::new(db, jwt_config),
    )
}
