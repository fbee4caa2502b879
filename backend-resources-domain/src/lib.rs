/*!
# Backend Resources Domain

User service core for the backend-resources API. Keycloak is the system of
record; this crate translates user requests into Keycloak admin calls and
normalizes every provider failure into a single error kind.

## Architecture

```text
┌─────────────────────────────────────────────────────────────┐
│                    Primary Adapter                          │
│              HTTP Server (Axum Handlers)                    │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                Application Layer                            │
├─────────────────────────────────────────────────────────────┤
│  • UserManagementService    • Representation mapper         │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│                 Ports                                       │
├─────────────────────────────────────────────────────────────┤
│  • IdentityProvider         • TokenIntrospector             │
└─────────────────────────────────────────────────────────────┘
                              │
┌─────────────────────────────────────────────────────────────┐
│              Infrastructure Layer (Adapters)                │
├─────────────────────────────────────────────────────────────┤
│  • KeycloakRestAdapter      • KeycloakTokenIntrospector     │
└─────────────────────────────────────────────────────────────┘
```

## Usage

```rust,ignore
use backend_resources_domain::{
    application::services::UserManagementService,
    infrastructure::adapters::KeycloakRestAdapter,
};

// The provider client is built once and injected
let provider = Arc::new(KeycloakRestAdapter::connect(config.keycloak.clone(), http).await?);
let user_service = UserManagementService::new(provider, &config.keycloak.realm);

let user = user_service.get_user_by_id(user_id).await?;
```
*/

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types
pub use application::ports::*;
pub use application::services::*;
pub use domain::entities::*;
pub use domain::errors::*;
