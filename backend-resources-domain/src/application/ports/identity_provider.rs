use crate::domain::{entities::*, errors::ProviderError};
use async_trait::async_trait;

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Port to the identity provider's administrative API.
///
/// One instance is built at startup and shared by every request, so
/// implementations must be safe for concurrent use.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a user in the realm and report the provider's response status
    async fn create_user(
        &self,
        realm: &str,
        user: &ProviderUserRecord,
    ) -> ProviderResult<ProviderResponse>;

    async fn find_user_by_id(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<ProviderUserRecord>;

    /// Realm-level role mappings of the user, in provider order
    async fn list_realm_role_mappings(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderRole>>;

    /// Groups the user belongs to, in provider order
    async fn list_user_groups(
        &self,
        realm: &str,
        user_id: &str,
    ) -> ProviderResult<Vec<ProviderGroup>>;
}
