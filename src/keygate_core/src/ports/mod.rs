pub mod credential_store;
pub mod event_publisher;
pub mod secret_hasher;
pub mod token_issuer;
