use async_trait::async_trait;
use keycloak::types::{
    CredentialRepresentation, GroupRepresentation, RoleRepresentation, UserRepresentation,
};
use keycloak::{KeycloakAdmin, KeycloakAdminToken, KeycloakError};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::{debug, info, warn};

use crate::application::ports::{IdentityProvider, KeycloakConfig, ProviderResult};
use crate::domain::{entities::*, errors::ProviderError};

/// Status Keycloak answers a successful user creation with
const CREATED: u16 = 201;

/// Keycloak admin REST adapter implementing the [`IdentityProvider`] port.
///
/// The admin client sits behind a lock so its token can be swapped without
/// rebuilding the adapter.
pub struct KeycloakRestAdapter {
    admin: RwLock<KeycloakAdmin>,
    config: KeycloakConfig,
    client: reqwest::Client,
}

impl KeycloakRestAdapter {
    /// Authenticate against the admin realm and build the adapter
    pub async fn connect(config: KeycloakConfig, client: reqwest::Client) -> ProviderResult<Self> {
        let admin = Self::acquire_admin(&config, &client).await?;

        info!(
            "Connected to Keycloak at {} (admin realm '{}')",
            config.base_url(),
            config.admin_realm
        );

        Ok(Self {
            admin: RwLock::new(admin),
            config,
            client,
        })
    }

    async fn acquire_admin(
        config: &KeycloakConfig,
        client: &reqwest::Client,
    ) -> ProviderResult<KeycloakAdmin> {
        let admin_token = KeycloakAdminToken::acquire_custom_realm(
            config.base_url(),
            &config.admin_username,
            &config.admin_password,
            &config.admin_realm,
            &config.admin_client_id,
            "password",
            client,
        )
        .await
        .map_err(provider_error)?;

        Ok(KeycloakAdmin::new(config.base_url(), admin_token, client.clone()))
    }

    /// Re-acquire the admin token and swap in a fresh admin client
    pub async fn refresh_token(&self) -> ProviderResult<()> {
        let admin = Self::acquire_admin(&self.config, &self.client).await?;
        *self.admin.write().await = admin;
        debug!("Refreshed Keycloak admin token");
        Ok(())
    }

    /// Refresh the admin token on the configured interval for the life of the
    /// process. A failed refresh is logged and the next tick tries again.
    pub fn spawn_token_refresh(self: Arc<Self>) -> JoinHandle<()> {
        let period = self.config.token_refresh_interval();
        tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if let Err(e) = self.refresh_token().await {
                    warn!("Failed to refresh Keycloak admin token: {}", e);
                }
            }
        })
    }
}

#[async_trait]
impl IdentityProvider for KeycloakRestAdapter {
    async fn create_user(
        &self,
        realm: &str,
        user: &ProviderUserRecord,
    ) -> ProviderResult<ProviderResponse> {
        let keycloak_user = convert_user_to_keycloak(user);

        let response = self
            .admin
            .read()
            .await
            .realm_users_post(realm, keycloak_user)
            .await
            .map_err(provider_error)?;

        let mut result = ProviderResponse::new(CREATED);
        if let Some(id) = response.to_id() {
            result = result.with_location(id.to_string());
        }
        Ok(result)
    }

    async fn find_user_by_id(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<ProviderUserRecord> {
        let keycloak_user = self
            .admin
            .read()
            .await
            .realm_users_with_user_id_get(realm, user_id, None)
            .await
            .map_err(provider_error)?;

        Ok(convert_user_from_keycloak(keycloak_user))
    }

    async fn list_realm_role_mappings(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderRole>> {
        let mappings = self
            .admin
            .read()
            .await
            .realm_users_with_user_id_role_mappings_get(realm, user_id)
            .await
            .map_err(provider_error)?;

        Ok(mappings
            .realm_mappings
            .map(|roles| roles.into_iter().map(convert_role_from_keycloak).collect())
            .unwrap_or_default())
    }

    async fn list_user_groups(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderGroup>> {
        let keycloak_groups = self
            .admin
            .read()
            .await
            .realm_users_with_user_id_groups_get(realm, user_id, None, None, None, None)
            .await
            .map_err(provider_error)?;

        Ok(keycloak_groups
            .into_iter()
            .map(convert_group_from_keycloak)
            .collect())
    }
}

fn provider_error(err: KeycloakError) -> ProviderError {
    match err {
        KeycloakError::HttpFailure { status, text, .. } => ProviderError::HttpFailure {
            status,
            message: text,
        },
        other => ProviderError::Transport {
            message: other.to_string(),
        },
    }
}

fn convert_user_to_keycloak(user: &ProviderUserRecord) -> UserRepresentation {
    let mut keycloak_user = UserRepresentation::default();

    keycloak_user.id = user.id.as_ref().map(|id| id.clone().into());
    keycloak_user.username = user.username.as_ref().map(|u| u.clone().into());
    keycloak_user.email = user.email.as_ref().map(|e| e.clone().into());
    keycloak_user.first_name = user.first_name.as_ref().map(|f| f.clone().into());
    keycloak_user.last_name = user.last_name.as_ref().map(|l| l.clone().into());
    keycloak_user.enabled = user.enabled;

    if !user.credentials.is_empty() {
        let credentials: Vec<CredentialRepresentation> = user
            .credentials
            .iter()
            .map(|credential| {
                let mut keycloak_credential = CredentialRepresentation::default();
                keycloak_credential.type_ = Some(credential.type_.clone().into());
                keycloak_credential.value = Some(credential.value.clone().into());
                keycloak_credential.temporary = Some(credential.temporary);
                keycloak_credential
            })
            .collect();
        keycloak_user.credentials = Some(credentials.into());
    }

    keycloak_user
}

fn convert_user_from_keycloak(keycloak_user: UserRepresentation) -> ProviderUserRecord {
    ProviderUserRecord {
        id: keycloak_user.id.map(|id| id.to_string()),
        username: keycloak_user.username.map(|u| u.to_string()),
        email: keycloak_user.email.map(|e| e.to_string()),
        first_name: keycloak_user.first_name.map(|f| f.to_string()),
        last_name: keycloak_user.last_name.map(|l| l.to_string()),
        enabled: keycloak_user.enabled,
        // Keycloak never returns credential values on read
        credentials: Vec::new(),
    }
}

fn convert_role_from_keycloak(role: RoleRepresentation) -> ProviderRole {
    ProviderRole {
        id: role.id.map(|id| id.to_string()),
        name: role.name.map(|name| name.to_string()),
    }
}

fn convert_group_from_keycloak(group: GroupRepresentation) -> ProviderGroup {
    ProviderGroup {
        id: group.id.map(|id| id.to_string()),
        name: group.name.map(|name| name.to_string()),
        path: group.path.map(|path| path.to_string()),
    }
}
