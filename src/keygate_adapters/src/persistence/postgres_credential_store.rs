use secrecy::{ExposeSecret, Secret};
use sqlx::{PgPool, Row, postgres::PgRow};

use keygate_core::{CredentialStore, CredentialStoreError, DisplayName, Email, User, UserId};

/// Durable credential store backed by PostgreSQL.
///
/// Uniqueness is enforced by the `users.email` unique constraint: the insert
/// and the check are one statement, so concurrent duplicate registrations
/// are resolved by the database, never by a read-then-write in this process.
#[derive(Clone)]
pub struct PostgresCredentialStore {
    pool: PgPool,
}

impl PostgresCredentialStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn row_to_user(row: &PgRow) -> Result<User, CredentialStoreError> {
    let id: uuid::Uuid = row
        .try_get("id")
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;
    let email: String = row
        .try_get("email")
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;
    let password_hash: String = row
        .try_get("password_hash")
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;
    let display_name: String = row
        .try_get("display_name")
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

    User::parse(
        id,
        Secret::from(email),
        Secret::from(password_hash),
        display_name,
    )
    .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))
}

#[async_trait::async_trait]
impl CredentialStore for PostgresCredentialStore {
    #[tracing::instrument(name = "Checking email existence in PostgreSQL", skip_all)]
    async fn exists(&self, email: &Email) -> Result<bool, CredentialStoreError> {
        let row = sqlx::query("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
            .bind(email.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        row.try_get(0)
            .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))
    }

    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<User, CredentialStoreError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name FROM users WHERE email = $1",
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        let Some(row) = row else {
            return Err(CredentialStoreError::NotFound);
        };
        row_to_user(&row)
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &UserId) -> Result<User, CredentialStoreError> {
        let row = sqlx::query(
            "SELECT id, email, password_hash, display_name FROM users WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        let Some(row) = row else {
            return Err(CredentialStoreError::NotFound);
        };
        row_to_user(&row)
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn insert(&self, user: User) -> Result<(), CredentialStoreError> {
        sqlx::query(
            "INSERT INTO users (id, email, password_hash, display_name) VALUES ($1, $2, $3, $4)",
        )
        .bind(user.id().as_uuid())
        .bind(user.email().as_str())
        .bind(user.password_hash().as_ref().expose_secret())
        .bind(user.display_name().as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return CredentialStoreError::DuplicateIdentity;
                }
            }
            CredentialStoreError::Unexpected(e.to_string())
        })?;

        Ok(())
    }

    #[tracing::instrument(name = "Updating display name in PostgreSQL", skip_all)]
    async fn update_display_name(
        &self,
        id: &UserId,
        display_name: DisplayName,
    ) -> Result<User, CredentialStoreError> {
        let row = sqlx::query(
            "UPDATE users SET display_name = $1 WHERE id = $2 \
             RETURNING id, email, password_hash, display_name",
        )
        .bind(display_name.as_str())
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| CredentialStoreError::Unexpected(e.to_string()))?;

        let Some(row) = row else {
            return Err(CredentialStoreError::NotFound);
        };
        row_to_user(&row)
    }
}
