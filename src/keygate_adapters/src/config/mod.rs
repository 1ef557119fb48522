pub mod settings;

pub use settings::{AllowedOrigins, JwtSettings, PostgresSettings, ServerSettings, Settings};
