#![allow(dead_code)]

use async_trait::async_trait;
use backend_resources_domain::{
    application::ports::{IdentityProvider, ProviderResult},
    domain::{entities::*, errors::ProviderError},
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Which provider call a scripted failure applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Call {
    Create,
    FindUser,
    Roles,
    Groups,
}

/// In-memory identity provider for testing
pub struct MockIdentityProvider {
    pub users: Arc<Mutex<HashMap<String, ProviderUserRecord>>>,
    pub roles: Arc<Mutex<HashMap<String, Vec<ProviderRole>>>>,
    pub groups: Arc<Mutex<HashMap<String, Vec<ProviderGroup>>>>,
    pub created: Arc<Mutex<Vec<(String, ProviderUserRecord)>>>,
    pub create_status: Arc<Mutex<u16>>,
    pub failures: Arc<Mutex<HashMap<Call, ProviderError>>>,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self {
            users: Arc::new(Mutex::new(HashMap::new())),
            roles: Arc::new(Mutex::new(HashMap::new())),
            groups: Arc::new(Mutex::new(HashMap::new())),
            created: Arc::new(Mutex::new(Vec::new())),
            create_status: Arc::new(Mutex::new(201)),
            failures: Arc::new(Mutex::new(HashMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_user(
        self,
        user_id: &str,
        record: ProviderUserRecord,
        roles: &[&str],
        groups: &[&str],
    ) -> Self {
        self.users.lock().unwrap().insert(user_id.to_string(), record);
        self.roles.lock().unwrap().insert(
            user_id.to_string(),
            roles.iter().map(|r| ProviderRole::named(*r)).collect(),
        );
        self.groups.lock().unwrap().insert(
            user_id.to_string(),
            groups.iter().map(|g| ProviderGroup::named(*g)).collect(),
        );
        self
    }

    pub fn set_create_status(&self, status: u16) {
        *self.create_status.lock().unwrap() = status;
    }

    pub fn fail(&self, call: Call, error: ProviderError) {
        self.failures.lock().unwrap().insert(call, error);
    }

    pub fn calls_of(&self, call: Call) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| **c == call).count()
    }

    fn record(&self, call: Call) -> ProviderResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failures.lock().unwrap().get(&call) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_user(
        &self,
        realm: &str,
        user: &ProviderUserRecord,
    ) -> ProviderResult<ProviderResponse> {
        self.record(Call::Create)?;
        self.created
            .lock()
            .unwrap()
            .push((realm.to_string(), user.clone()));

        let status = *self.create_status.lock().unwrap();
        Ok(ProviderResponse::new(status).with_location("generated-id"))
    }

    async fn find_user_by_id(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<ProviderUserRecord> {
        self.record(Call::FindUser)?;
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

    async fn list_realm_role_mappings(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderRole>> {
        self.record(Call::Roles)?;
        Ok(self.roles.lock().unwrap().get(user_id).cloned().unwrap_or_default())
    }

    async fn list_user_groups(
        &self,
        _realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderGroup>> {
        self.record(Call::Groups)?;
        Ok(self.groups.lock().unwrap().get(user_id).cloned().unwrap_or_default())
    }
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

pub fn create_request() -> UserCreateRequest {
    UserCreateRequest {
        username: "testuser".to_string(),
        email: "testuser@example.com".to_string(),
        password: "password".to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
    }
}
