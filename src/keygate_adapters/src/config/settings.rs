use secrecy::Secret;
use serde::Deserialize;

/// Process configuration, loaded once at startup.
///
/// Sources, later overriding earlier: built-in defaults, an optional
/// `config/keygate.*` file, then `KEYGATE__`-prefixed environment variables
/// (`KEYGATE__JWT__SECRET`, `KEYGATE__POSTGRES__URL`, ...). A `.env` file is
/// honored if present.
#[derive(Clone, Deserialize)]
pub struct Settings {
    pub auth: ServerSettings,
    pub catalog: ServerSettings,
    pub postgres: PostgresSettings,
    pub jwt: JwtSettings,
}

#[derive(Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub allowed_origins: Option<String>,
}

#[derive(Clone, Deserialize)]
pub struct PostgresSettings {
    pub url: Secret<String>,
    pub max_connections: u32,
}

#[derive(Clone, Deserialize)]
pub struct JwtSettings {
    pub secret: Secret<String>,
    pub ttl_seconds: i64,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        config::Config::builder()
            .set_default("auth.host", "0.0.0.0")?
            .set_default("auth.port", 3000)?
            .set_default("catalog.host", "0.0.0.0")?
            .set_default("catalog.port", 3001)?
            .set_default("postgres.max_connections", 5)?
            .set_default("jwt.ttl_seconds", 600)?
            .add_source(config::File::with_name("config/keygate").required(false))
            .add_source(
                config::Environment::with_prefix("KEYGATE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

impl ServerSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        self.allowed_origins
            .as_deref()
            .map(AllowedOrigins::from_csv)
    }
}

/// Comma-separated CORS origin allowlist.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn from_csv(raw: &str) -> Self {
        Self(
            raw.split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        )
    }

    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|allowed| allowed == origin)
    }
}
