/// Group membership as reported by the identity provider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderGroup {
    pub id: Option<String>,
    pub name: Option<String>,
    pub path: Option<String>,
}

impl ProviderGroup {
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: None,
            path: Some(format!("/{name}")),
            name: Some(name),
        }
    }
}
