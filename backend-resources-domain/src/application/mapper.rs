//! Conversion from provider representations to the public user view.

use crate::domain::entities::{ProviderGroup, ProviderRole, ProviderUserRecord, UserView};

/// Assemble a [`UserView`] from the provider's record and the already
/// enumerated role and group names. Absent fields become empty strings.
pub fn to_user_view(
    record: &ProviderUserRecord,
    roles: Vec<String>,
    groups: Vec<String>,
) -> UserView {
    UserView::new(
        record.first_name.clone().unwrap_or_default(),
        record.last_name.clone().unwrap_or_default(),
        record.email.clone().unwrap_or_default(),
        roles,
        groups,
    )
}

pub fn role_names(roles: &[ProviderRole]) -> Vec<String> {
    roles
        .iter()
        .map(|role| role.name.clone().unwrap_or_default())
        .collect()
}

pub fn group_names(groups: &[ProviderGroup]) -> Vec<String> {
    groups
        .iter()
        .map(|group| group.name.clone().unwrap_or_default())
        .collect()
}
