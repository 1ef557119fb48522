pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    display_name::DisplayName,
    email::Email,
    event::IdentityEvent,
    password::{Password, PasswordHash},
    token::IssuedToken,
    user::{User, UserId, UserProfile},
    validation::ValidationError,
};

pub use ports::{
    credential_store::{CredentialStore, CredentialStoreError},
    event_publisher::EventPublisher,
    secret_hasher::{SecretHasher, SecretHasherError},
    token_issuer::{TokenIssuer, TokenIssuerError},
};
