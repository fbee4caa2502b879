use crate::domain::errors::{ProviderOperationError, ServiceResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Credential type Keycloak expects for passwords
pub const PASSWORD_CREDENTIAL: &str = "password";

/// Incoming request to create a user.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserCreateRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserCreateRequest {
    /// Every field is required and must not be blank.
    pub fn validate(&self) -> ServiceResult<()> {
        let fields = [
            ("username", &self.username),
            ("email", &self.email),
            ("password", &self.password),
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ProviderOperationError::bad_request(format!(
                    "Field '{name}' must not be empty"
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for UserCreateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserCreateRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Credential attached to a provider user record
#[derive(Clone, PartialEq, Eq)]
pub struct ProviderCredential {
    pub type_: String,
    pub value: String,
    pub temporary: bool,
}

impl ProviderCredential {
    pub fn password(value: String, temporary: bool) -> Self {
        Self {
            type_: PASSWORD_CREDENTIAL.to_string(),
            value,
            temporary,
        }
    }
}

impl fmt::Debug for ProviderCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderCredential")
            .field("type_", &self.type_)
            .field("value", &"[REDACTED]")
            .field("temporary", &self.temporary)
            .finish()
    }
}

/// Identity-provider-native user representation.
///
/// Every field is optional because the provider omits whatever it does not
/// know about the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderUserRecord {
    pub id: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub enabled: Option<bool>,
    pub credentials: Vec<ProviderCredential>,
}

impl ProviderUserRecord {
    /// Build the record sent to the provider for a new, enabled user with a
    /// permanent password.
    pub fn from_create_request(request: &UserCreateRequest) -> Self {
        Self {
            id: None,
            username: Some(request.username.clone()),
            email: Some(request.email.clone()),
            first_name: Some(request.first_name.clone()),
            last_name: Some(request.last_name.clone()),
            enabled: Some(true),
            credentials: vec![ProviderCredential::password(request.password.clone(), false)],
        }
    }
}

/// Outcome of the provider's "create user" call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse {
    pub status: u16,
    /// Id of the created user, taken from the `Location` header
    pub location: Option<String>,
}

impl ProviderResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Public view of a user, merged with its realm roles and groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    first_name: String,
    last_name: String,
    email: String,
    roles: Vec<String>,
    groups: Vec<String>,
}

impl UserView {
    pub fn new(
        first_name: String,
        last_name: String,
        email: String,
        roles: Vec<String>,
        groups: Vec<String>,
    ) -> Self {
        Self {
            first_name,
            last_name,
            email,
            roles,
            groups,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}
