//! Axum integration for the Keygate identity service.
//!
//! Route handlers here only translate between the wire and the domain:
//! deserialize the request, parse raw values into domain types, run the
//! matching use case, and map the outcome to a status code and JSON body.
//! All authentication logic lives in `keygate_application`.

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AuthState;
