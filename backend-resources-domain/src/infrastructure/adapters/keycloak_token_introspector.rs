use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::auth::*;
use crate::application::ports::{AuthConfig, KeycloakConfig};
use crate::domain::errors::*;

/// Raw introspection response from Keycloak
#[derive(Debug, Clone, Default, Deserialize)]
struct RawIntrospection {
    #[serde(default)]
    active: bool,
    username: Option<String>,
    sub: Option<String>,
    client_id: Option<String>,
    exp: Option<i64>,
    realm_access: Option<RealmAccess>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RealmAccess {
    #[serde(default)]
    roles: Vec<String>,
}

impl From<RawIntrospection> for TokenInfo {
    fn from(raw: RawIntrospection) -> Self {
        Self {
            active: raw.active,
            username: raw.username,
            sub: raw.sub,
            client_id: raw.client_id,
            exp: raw.exp,
            realm_roles: raw.realm_access.map(|access| access.roles).unwrap_or_default(),
        }
    }
}

/// Verifies caller tokens with Keycloak's introspection endpoint
pub struct KeycloakTokenIntrospector {
    introspection_url: String,
    client_id: String,
    client_secret: String,
    client: reqwest::Client,
}

impl KeycloakTokenIntrospector {
    pub fn new(keycloak: &KeycloakConfig, auth: &AuthConfig, client: reqwest::Client) -> Self {
        Self {
            introspection_url: keycloak.introspection_url(),
            client_id: auth.client_id.clone(),
            client_secret: auth.client_secret.clone(),
            client,
        }
    }
}

#[async_trait]
impl TokenIntrospector for KeycloakTokenIntrospector {
    async fn introspect(&self, token: &str) -> Result<TokenInfo, AuthError> {
        let response = self
            .client
            .post(&self.introspection_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("token", token), ("token_type_hint", "access_token")])
            .send()
            .await
            .map_err(|e| AuthError::IntrospectionFailed {
                reason: format!("HTTP request failed: {}", e),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AuthError::IntrospectionFailed {
                reason: format!("HTTP error {}: {}", status, error_text),
            });
        }

        let raw: RawIntrospection = response
            .json()
            .await
            .map_err(|e| AuthError::IntrospectionFailed {
                reason: format!("Failed to parse response: {}", e),
            })?;

        Ok(raw.into())
    }
}
