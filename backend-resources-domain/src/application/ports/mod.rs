pub mod auth;
pub mod config;
pub mod identity_provider;

pub use auth::*;
pub use config::*;
pub use identity_provider::*;
