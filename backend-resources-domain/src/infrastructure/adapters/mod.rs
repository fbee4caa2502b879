pub mod keycloak_rest;
pub mod keycloak_token_introspector;

pub use keycloak_rest::*;
pub use keycloak_token_introspector::*;
