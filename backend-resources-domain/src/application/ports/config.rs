use crate::domain::errors::{ConfigError, ConfigResult};
use std::time::Duration;

/// Keycloak server configuration
#[derive(Debug, Clone)]
pub struct KeycloakConfig {
    pub url: String,
    /// Realm whose users this service manages
    pub realm: String,
    pub admin_realm: String,
    pub admin_client_id: String,
    pub admin_username: String,
    pub admin_password: String,
    pub token_refresh_seconds: u64,
}

impl KeycloakConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.url.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "KEYCLOAK_URL".to_string(),
            });
        }

        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                key: "KEYCLOAK_URL".to_string(),
                message: "Must start with http:// or https://".to_string(),
            });
        }

        for (key, value) in [
            ("KEYCLOAK_REALM", &self.realm),
            ("KEYCLOAK_ADMIN_REALM", &self.admin_realm),
            ("KEYCLOAK_ADMIN_CLIENT_ID", &self.admin_client_id),
            ("KEYCLOAK_ADMIN_USERNAME", &self.admin_username),
            ("KEYCLOAK_ADMIN_PASSWORD", &self.admin_password),
        ] {
            if value.is_empty() {
                return Err(ConfigError::MissingRequired {
                    key: key.to_string(),
                });
            }
        }

        if self.token_refresh_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "KEYCLOAK_TOKEN_REFRESH_SECONDS".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn introspection_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token/introspect",
            self.base_url(),
            self.realm
        )
    }

    pub fn token_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.token_refresh_seconds)
    }
}

/// Resource-server client used to introspect caller tokens
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub client_id: String,
    pub client_secret: String,
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.client_id.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "AUTH_CLIENT_ID".to_string(),
            });
        }

        if self.client_secret.is_empty() {
            return Err(ConfigError::MissingRequired {
                key: "AUTH_CLIENT_SECRET".to_string(),
            });
        }

        Ok(())
    }
}

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub connect_timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            connect_timeout_seconds: 10,
            user_agent: concat!("backend-resources/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl HttpConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if self.timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "HTTP_TIMEOUT_SECONDS".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::InvalidValue {
                key: "HTTP_CONNECT_TIMEOUT_SECONDS".to_string(),
                message: "Must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn get_connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Shared client for every outbound call to the identity provider
    pub fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.get_timeout())
            .connect_timeout(self.get_connect_timeout())
            .user_agent(self.user_agent.clone())
            .build()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

/// Log format enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Invalid log format: {s}")),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub keycloak: KeycloakConfig,
    pub auth: AuthConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        self.keycloak.validate()?;
        self.auth.validate()?;
        self.http.validate()?;
        Ok(())
    }

    /// Load configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| ConfigError::MissingRequired {
                key: key.to_string(),
            })
        };
        let or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let keycloak = KeycloakConfig {
            url: required("KEYCLOAK_URL")?,
            realm: or_default("KEYCLOAK_REALM", "ITM"),
            admin_realm: or_default("KEYCLOAK_ADMIN_REALM", "master"),
            admin_client_id: or_default("KEYCLOAK_ADMIN_CLIENT_ID", "admin-cli"),
            admin_username: required("KEYCLOAK_ADMIN_USERNAME")?,
            admin_password: required("KEYCLOAK_ADMIN_PASSWORD")?,
            token_refresh_seconds: parse_number(
                &lookup,
                "KEYCLOAK_TOKEN_REFRESH_SECONDS",
                50,
            )?,
        };

        let auth = AuthConfig {
            client_id: required("AUTH_CLIENT_ID")?,
            client_secret: required("AUTH_CLIENT_SECRET")?,
        };

        let defaults = HttpConfig::default();
        let http = HttpConfig {
            timeout_seconds: parse_number(
                &lookup,
                "HTTP_TIMEOUT_SECONDS",
                defaults.timeout_seconds,
            )?,
            connect_timeout_seconds: parse_number(
                &lookup,
                "HTTP_CONNECT_TIMEOUT_SECONDS",
                defaults.connect_timeout_seconds,
            )?,
            user_agent: lookup("HTTP_USER_AGENT").unwrap_or(defaults.user_agent),
        };

        let logging = LoggingConfig {
            format: match lookup("LOG_FORMAT") {
                Some(raw) => raw.parse().map_err(|message| ConfigError::InvalidValue {
                    key: "LOG_FORMAT".to_string(),
                    message,
                })?,
                None => LogFormat::default(),
            },
        };

        let config = AppConfig {
            keycloak,
            auth,
            http,
            logging,
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_number<F, T>(lookup: &F, key: &str, default: T) -> ConfigResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{raw}' is not a valid number"),
        }),
        None => Ok(default),
    }
}
