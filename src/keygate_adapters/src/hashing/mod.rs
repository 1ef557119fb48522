pub mod argon2_secret_hasher;

pub use argon2_secret_hasher::Argon2SecretHasher;
