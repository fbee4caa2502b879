/// Realm-level role as reported by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderRole {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl ProviderRole {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}
