//! Shared application state passed to every handler.

use std::sync::Arc;

use dragonball_auth::{Authenticator, PasswordHasher, RequestAuthenticator, TokenCodec};
use dragonball_core::config::AppConfig;
use dragonball_core::result::AppResult;
use dragonball_database::store::{CharacterStore, UserStore};
use dragonball_service::{
    AuthService, CharacterService, DataSeeder, FavouriteService, UserService,
};

/// Application state shared across all Axum handlers via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token codec holding the signing key.
    pub codec: Arc<TokenCodec>,
    /// Per-request bearer token resolution.
    pub interceptor: Arc<RequestAuthenticator>,

    // Services
    pub auth_service: Arc<AuthService>,
    pub user_service: Arc<UserService>,
    pub favourite_service: Arc<FavouriteService>,
    pub character_service: Arc<CharacterService>,
}

impl AppState {
    /// Wires the auth core and services on top of the given stores.
    ///
    /// Fails with a configuration error when the auth settings are invalid.
    pub fn new(
        config: AppConfig,
        users: Arc<dyn UserStore>,
        characters: Arc<dyn CharacterStore>,
    ) -> AppResult<Self> {
        config.validate()?;

        let codec = Arc::new(TokenCodec::new(&config.auth)?);
        let hasher = PasswordHasher::new(config.auth.bcrypt_cost)?;

        let authenticator = Arc::new(Authenticator::new(Arc::clone(&users), hasher));
        let interceptor = Arc::new(RequestAuthenticator::new(
            Arc::clone(&codec),
            Arc::clone(&users),
        ));

        let auth_service = Arc::new(AuthService::new(authenticator, Arc::clone(&codec)));
        let user_service = Arc::new(UserService::new(Arc::clone(&users), hasher));
        let favourite_service = Arc::new(FavouriteService::new(
            Arc::clone(&users),
            Arc::clone(&characters),
        ));
        let character_service = Arc::new(CharacterService::new(characters, users));

        Ok(Self {
            config: Arc::new(config),
            codec,
            interceptor,
            auth_service,
            user_service,
            favourite_service,
            character_service,
        })
    }

    /// A seeder over this state's services.
    pub fn seeder(&self) -> DataSeeder {
        DataSeeder::new(
            self.user_service.as_ref().clone(),
            self.character_service.as_ref().clone(),
        )
    }
}
