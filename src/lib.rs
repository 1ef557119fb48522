//! # Keygate - Stateless Identity & Catalog Services
//!
//! This is a facade crate that re-exports the public APIs of the Keygate
//! workspace members. Use it to get at the whole stack from one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `IssuedToken`, etc.
//! - **Port traits**: `CredentialStore`, `SecretHasher`, `TokenIssuer`,
//!   `EventPublisher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, etc.
//! - **Adapters**: `PostgresCredentialStore`, `Argon2SecretHasher`,
//!   `JwtTokenIssuer`, `ChannelEventPublisher`, etc.
//! - **Services**: `AuthService` and `CatalogService` - the two runnable
//!   entry points

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use keygate_core::*;
}

// Re-export most commonly used core types at the root level
pub use keygate_core::{
    DisplayName, Email, IdentityEvent, IssuedToken, Password, PasswordHash, User, UserId,
    UserProfile, ValidationError,
};

// ============================================================================
// Port Traits
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use keygate_core::{
        CredentialStore, CredentialStoreError, EventPublisher, SecretHasher, SecretHasherError,
        TokenIssuer, TokenIssuerError,
    };
}

// Re-export port traits at root level
pub use keygate_core::{
    CredentialStore, CredentialStoreError, EventPublisher, SecretHasher, SecretHasherError,
    TokenIssuer, TokenIssuerError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use keygate_application::*;
}

// Re-export use cases at root level
pub use keygate_application::{
    AuthError, GetProfileUseCase, LoginUseCase, RefreshTokenUseCase, RegisterUseCase,
    TokenAuthorizer, UpdateProfileUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Persistence implementations
    pub mod persistence {
        pub use keygate_adapters::persistence::*;
    }

    /// Password hashing
    pub mod hashing {
        pub use keygate_adapters::hashing::*;
    }

    /// Token issuance
    pub mod tokens {
        pub use keygate_adapters::tokens::*;
    }

    /// Event publishing
    pub mod events {
        pub use keygate_adapters::events::*;
    }

    /// Configuration
    pub mod config {
        pub use keygate_adapters::config::*;
    }

    /// Tracing setup
    pub mod telemetry {
        pub use keygate_adapters::telemetry::*;
    }
}

// Re-export commonly used adapters at root level
pub use keygate_adapters::{
    Argon2SecretHasher, ChannelEventPublisher, InMemoryCredentialStore, JwtConfig, JwtTokenIssuer,
    PostgresCredentialStore, Settings,
};

// ============================================================================
// Services (Entry Points)
// ============================================================================

/// Identity service
pub use keygate_auth_service::AuthService;

/// Catalog service
pub use keygate_catalog::{
    CatalogError, CatalogQuery, CatalogService, InMemoryProductStore, PostgresProductStore,
    Product, ProductPage, ProductStore,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use tokio;
