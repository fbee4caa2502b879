use crate::domain::errors::AuthError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Token introspection information
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenInfo {
    pub active: bool,
    pub username: Option<String>,
    pub sub: Option<String>,
    pub client_id: Option<String>,
    pub exp: Option<i64>,
    /// Realm roles granted to the token's subject
    pub realm_roles: Vec<String>,
}

/// Port for verifying bearer tokens issued by the identity provider
#[async_trait]
pub trait TokenIntrospector: Send + Sync {
    async fn introspect(&self, token: &str) -> Result<TokenInfo, AuthError>;
}

/// Caller identity resolved from a verified token
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorizationContext {
    pub user_id: Option<String>,
    pub username: Option<String>,
    pub client_id: Option<String>,
    pub roles: Vec<String>,
}

impl AuthorizationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a context from an active token; inactive tokens are rejected.
    pub fn from_token_info(info: TokenInfo) -> Result<Self, AuthError> {
        if !info.active {
            return Err(AuthError::InvalidToken {
                reason: "token is not active".to_string(),
            });
        }

        Ok(Self {
            user_id: info.sub,
            username: info.username,
            client_id: info.client_id,
            roles: info.realm_roles,
        })
    }

    pub fn with_roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn has_any_role(&self, roles: &[&str]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }

    pub fn require_any_role(&self, roles: &[&str]) -> Result<(), AuthError> {
        if self.has_any_role(roles) {
            Ok(())
        } else {
            Err(AuthError::InsufficientRole {
                required: roles.iter().map(|r| r.to_string()).collect(),
            })
        }
    }
}

/// Realm roles that gate the user endpoints
pub mod roles {
    pub const ADMIN: &str = "ADMIN";
    pub const MODERATOR: &str = "MODERATOR";
}
