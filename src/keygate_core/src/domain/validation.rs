use thiserror::Error;

/// Rejections produced while parsing raw input into domain values.
///
/// These are deterministic, caller-correctable failures and map to a
/// `400 Bad Request` at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email address")]
    InvalidEmail,
    #[error("password must be at least {0} characters")]
    PasswordTooShort(usize),
    #[error("display name must not be blank")]
    BlankDisplayName,
    #[error("display name must be at most {0} characters")]
    DisplayNameTooLong(usize),
}
