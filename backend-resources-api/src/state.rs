use crate::config::Config;
use backend_resources_domain::{
    application::{
        ports::{IdentityProvider, TokenIntrospector},
        services::UserManagementService,
    },
    infrastructure::adapters::{KeycloakRestAdapter, KeycloakTokenIntrospector},
};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserManagementService>,
    pub introspector: Arc<dyn TokenIntrospector>,
}

impl AppState {
    pub fn new(
        user_service: Arc<UserManagementService>,
        introspector: Arc<dyn TokenIntrospector>,
    ) -> Self {
        Self {
            user_service,
            introspector,
        }
    }

    /// Wire the Keycloak adapters once for the life of the process
    pub async fn from_config(config: &Config) -> Result<Self, Box<dyn std::error::Error>> {
        let app = &config.app;
        let reqwest_client = app.http.build_client()?;

        let adapter = Arc::new(
            KeycloakRestAdapter::connect(app.keycloak.clone(), reqwest_client.clone()).await?,
        );
        adapter.clone().spawn_token_refresh();

        let provider: Arc<dyn IdentityProvider> = adapter;
        let user_service = Arc::new(UserManagementService::new(
            provider,
            app.keycloak.realm.clone(),
        ));

        let introspector = Arc::new(KeycloakTokenIntrospector::new(
            &app.keycloak,
            &app.auth,
            reqwest_client,
        ));

        info!("Managing users of realm '{}'", app.keycloak.realm);

        Ok(Self::new(user_service, introspector))
    }
}
