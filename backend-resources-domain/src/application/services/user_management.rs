use crate::{
    application::{mapper, ports::IdentityProvider},
    domain::{
        entities::*,
        errors::{ProviderOperationError, ServiceResult},
    },
};
use reqwest::StatusCode;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

/// User service: the only component that talks to the identity provider.
///
/// Every provider fault is folded into a [`ProviderOperationError`] here.
/// Each provider call is attempted exactly once.
pub struct UserManagementService {
    provider: Arc<dyn IdentityProvider>,
    realm: String,
}

impl UserManagementService {
    pub fn new(provider: Arc<dyn IdentityProvider>, realm: impl Into<String>) -> Self {
        Self {
            provider,
            realm: realm.into(),
        }
    }

    /// Create a new, enabled user with a permanent password
    #[instrument(skip(self, request), fields(realm = %self.realm, username = %request.username))]
    pub async fn create_user(&self, request: &UserCreateRequest) -> ServiceResult<()> {
        request.validate()?;

        info!("Creating user '{}' in realm '{}'", request.username, self.realm);

        let record = ProviderUserRecord::from_create_request(request);

        let response = self
            .provider
            .create_user(&self.realm, &record)
            .await
            .map_err(|e| {
                warn!("Provider rejected user creation: {}", e);
                ProviderOperationError::from_provider(
                    "Failed to create user",
                    &e,
                    StatusCode::BAD_REQUEST,
                )
            })?;

        if !response.is_success() {
            let status = StatusCode::from_u16(response.status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_REQUEST);
            warn!(
                "User creation returned status {} for '{}'",
                response.status, request.username
            );
            return Err(ProviderOperationError::new(
                format!(
                    "Failed to create user '{}': provider responded with status {}",
                    request.username, response.status
                ),
                status,
            ));
        }

        // The created id is not part of this operation's result.
        if let Some(ref id) = response.location {
            debug!("Provider assigned id '{}' to user '{}'", id, request.username);
        }

        info!("Successfully created user '{}'", request.username);
        Ok(())
    }

    /// Fetch a user together with its realm roles and groups.
    ///
    /// Any lookup failure, not-found or otherwise, is reported as 404.
    #[instrument(skip(self), fields(realm = %self.realm, user_id = %id))]
    pub async fn get_user_by_id(&self, id: Uuid) -> ServiceResult<UserView> {
        let user_id = id.to_string();

        info!("Getting user '{}' from realm '{}'", user_id, self.realm);

        let record = self
            .provider
            .find_user_by_id(&self.realm, &user_id)
            .await
            .map_err(|e| {
                warn!("User lookup failed for '{}': {}", user_id, e);
                ProviderOperationError::not_found(format!("Failed to fetch user '{user_id}': {e}"))
            })?;

        let roles = self
            .provider
            .list_realm_role_mappings(&self.realm, &user_id)
            .await
            .map_err(|e| {
                warn!("Role mapping enumeration failed for '{}': {}", user_id, e);
                ProviderOperationError::from_provider(
                    "Failed to fetch user roles",
                    &e,
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            })?;

        let groups = self
            .provider
            .list_user_groups(&self.realm, &user_id)
            .await
            .map_err(|e| {
                warn!("Group enumeration failed for '{}': {}", user_id, e);
                ProviderOperationError::from_provider(
                    "Failed to fetch user groups",
                    &e,
                    StatusCode::INTERNAL_SERVER_ERROR,
                )
            })?;

        let view = mapper::to_user_view(
            &record,
            mapper::role_names(&roles),
            mapper::group_names(&groups),
        );

        info!(
            "Found user '{}' with {} roles and {} groups",
            user_id,
            view.roles().len(),
            view.groups().len()
        );
        Ok(view)
    }
}
