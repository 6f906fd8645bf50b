//! Token verification (HS256).

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use thiserror::Error;

use crate::claims::{JwtClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Signature or structure failure; details are deliberately not leaked.
    #[error("invalid token")]
    InvalidToken,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verify a bearer token and return its claims.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, AuthError>;
}

/// HS256 shared-secret validator.
///
/// Timestamp checks run through [`validate_claims`] against the caller's
/// clock; the library-level registered-claim checks are disabled because the
/// claims carry RFC 3339 timestamps, not numeric dates.
pub struct Hs256JwtValidator {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256JwtValidator {
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            key: DecodingKey::from_secret(secret.as_ref()),
            validation,
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<JwtClaims, AuthError> {
        let data = decode::<JwtClaims>(token, &self.key, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}
