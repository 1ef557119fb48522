pub mod config;
pub mod events;
pub mod hashing;
pub mod persistence;
pub mod telemetry;
pub mod tokens;

pub use config::{AllowedOrigins, Settings};
pub use events::{ChannelEventPublisher, spawn_log_drain};
pub use hashing::Argon2SecretHasher;
pub use persistence::{InMemoryCredentialStore, PostgresCredentialStore};
pub use tokens::{JwtConfig, JwtTokenIssuer};
