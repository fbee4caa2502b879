#![allow(dead_code)]

use async_trait::async_trait;
use backend_resources_api::{create_router, AppState};
use backend_resources_domain::{
    application::{
        ports::{IdentityProvider, ProviderResult, TokenInfo, TokenIntrospector},
        services::UserManagementService,
    },
    domain::{
        entities::*,
        errors::{AuthError, ProviderError},
    },
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Identity provider backed by in-memory maps
#[derive(Default)]
pub struct MockIdentityProvider {
    pub users: Mutex<HashMap<String, (ProviderUserRecord, Vec<String>, Vec<String>)>>,
    pub created: Mutex<Vec<ProviderUserRecord>>,
    pub create_error: Mutex<Option<ProviderError>>,
}

impl MockIdentityProvider {
    pub fn with_user(
        self,
        user_id: &str,
        record: ProviderUserRecord,
        roles: &[&str],
        groups: &[&str],
    ) -> Self {
        self.users.lock().unwrap().insert(
            user_id.to_string(),
            (
                record,
                roles.iter().map(|r| r.to_string()).collect(),
                groups.iter().map(|g| g.to_string()).collect(),
            ),
        );
        self
    }

    pub fn fail_create(&self, error: ProviderError) {
        *self.create_error.lock().unwrap() = Some(error);
    }

    fn lookup(
        &self,
        user_id: &str,
    ) -> ProviderResult<(ProviderUserRecord, Vec<String>, Vec<String>)> {
        self.users
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| ProviderError::HttpFailure {
                status: 404,
                message: "User not found".to_string(),
            })
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_user(
        &self,
        _realm: &str,
        user: &ProviderUserRecord,
    ) -> ProviderResult<ProviderResponse> {
        if let Some(error) = self.create_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.created.lock().unwrap().push(user.clone());
        Ok(ProviderResponse::new(201))
    }

    async fn find_user_by_id(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<ProviderUserRecord> {
        Ok(self.lookup(user_id)?.0)
    }

    async fn list_realm_role_mappings(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderRole>> {
        Ok(self.lookup(user_id)?.1.iter().map(|r| ProviderRole::named(r.as_str())).collect())
    }

    async fn list_user_groups(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderGroup>> {
        Ok(self.lookup(user_id)?.2.iter().map(|g| ProviderGroup::named(g.as_str())).collect())
    }
}

pub const ADMIN_TOKEN: &str = "admin-token";
pub const MODERATOR_TOKEN: &str = "moderator-token";
pub const USER_TOKEN: &str = "user-token";
pub const BROKEN_TOKEN: &str = "broken-token";

/// Introspector that recognises a fixed set of tokens
pub struct StubIntrospector;

#[async_trait]
impl TokenIntrospector for StubIntrospector {
    async fn introspect(&self, token: &str) -> Result<TokenInfo, AuthError> {
        let roles: &[&str] = match token {
            ADMIN_TOKEN => &["ADMIN"],
            MODERATOR_TOKEN => &["MODERATOR"],
            USER_TOKEN => &["offline_access"],
            BROKEN_TOKEN => {
                return Err(AuthError::IntrospectionFailed {
                    reason: "connection refused".to_string(),
                })
            }
            _ => return Ok(TokenInfo::default()),
        };

        Ok(TokenInfo {
            active: true,
            username: Some(token.trim_end_matches("-token").to_string()),
            realm_roles: roles.iter().map(|r| r.to_string()).collect(),
            ..TokenInfo::default()
        })
    }
}

pub fn app(provider: Arc<MockIdentityProvider>) -> axum::Router {
    let user_service = Arc::new(UserManagementService::new(provider, "ITM"));
    create_router(AppState::new(user_service, Arc::new(StubIntrospector)))
}

pub fn profile(first_name: &str, last_name: &str, email: &str) -> ProviderUserRecord {
    ProviderUserRecord {
        first_name: Some(first_name.to_string()),
        last_name: Some(last_name.to_string()),
        email: Some(email.to_string()),
        enabled: Some(true),
        ..ProviderUserRecord::default()
    }
}
