use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode, errors::ErrorKind};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize, ser::SerializeStruct};

use keygate_core::{Email, IssuedToken, TokenIssuer, TokenIssuerError};

/// Process-wide signing key material and token lifetime.
///
/// Constructed once at startup from configuration and injected by reference;
/// never mutated afterwards.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub ttl_seconds: i64,
}

impl JwtConfig {
    pub fn secret_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Stateless HS256 token issuer.
///
/// Issuance and validation are pure computations over the token bytes and
/// the key material - nothing is persisted or cached per token.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, subject: &Email) -> Result<IssuedToken, TokenIssuerError> {
        generate_token(subject, self.config.ttl_seconds, self.config.secret_bytes())
    }

    fn validate(&self, raw: &str) -> Result<Email, TokenIssuerError> {
        let claims = decode_token(raw, self.config.secret_bytes()).map_err(|e| {
            // Internal diagnostics keep the precise reason; the caller only
            // ever sees the single collapsed `Invalid` category.
            let reason = match e.kind() {
                ErrorKind::ExpiredSignature => "expired",
                ErrorKind::InvalidSignature => "bad signature",
                _ => "malformed",
            };
            tracing::debug!(reason, "rejected bearer token");
            TokenIssuerError::Invalid
        })?;

        Email::try_from(claims.sub).map_err(|_| {
            tracing::debug!(reason = "bad subject claim", "rejected bearer token");
            TokenIssuerError::Invalid
        })
    }
}

/// Sign a token for `subject` expiring `ttl_seconds` from now.
pub fn generate_token(
    subject: &Email,
    ttl_seconds: i64,
    secret: &[u8],
) -> Result<IssuedToken, TokenIssuerError> {
    let delta = chrono::Duration::try_seconds(ttl_seconds).ok_or_else(|| {
        TokenIssuerError::Issuance("failed to create token duration".to_string())
    })?;

    let issued_at = Utc::now();
    let expires_at = issued_at
        .checked_add_signed(delta)
        .ok_or_else(|| TokenIssuerError::Issuance("expiry out of range".to_string()))?;

    let iat = issued_at
        .timestamp()
        .try_into()
        .map_err(|_| TokenIssuerError::Issuance("issued-at predates epoch".to_string()))?;
    let exp = expires_at
        .timestamp()
        .try_into()
        .map_err(|_| TokenIssuerError::Issuance("expiry predates epoch".to_string()))?;

    let claims = Claims {
        sub: subject.as_ref().clone(),
        iat,
        exp,
    };

    let token = encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| TokenIssuerError::Issuance(e.to_string()))?;

    Ok(IssuedToken { token, expires_at })
}

/// Decode and verify a token against `secret`, enforcing expiry with zero
/// clock leeway.
pub fn decode_token(raw: &str, secret: &[u8]) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(raw, &DecodingKey::from_secret(secret), &validation).map(|data| data.claims)
}

#[derive(Debug, Deserialize, Clone)]
pub struct Claims {
    pub sub: Secret<String>,
    pub iat: usize,
    pub exp: usize,
}

impl Serialize for Claims {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("Claims", 3)?;
        state.serialize_field("sub", &self.sub.expose_secret())?;
        state.serialize_field("iat", &self.iat)?;
        state.serialize_field("exp", &self.exp)?;
        state.end()
    }
}
