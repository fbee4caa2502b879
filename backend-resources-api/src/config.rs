use backend_resources_domain::{
    application::ports::AppConfig,
    domain::errors::{ConfigError, ConfigResult},
};

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub app: AppConfig,
}

impl Config {
    pub fn from_env() -> ConfigResult<Self> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("'{raw}' is not a valid port"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            app: AppConfig::from_env()?,
        })
    }
}
