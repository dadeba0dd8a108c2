//! Contract with the external token validation engine.
//!
//! Signature checks, issuer discovery, JWKS fetching and claim checks all live
//! behind `TokenValidator`. The gate only knows whether validation passed and,
//! if not, which `ValidatorError` came back.

use async_trait::async_trait;
use axum::http::{HeaderMap, StatusCode};

use crate::services::auth::provider::Provider;

/// Machine-readable validation failure reasons reported by a validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorCode {
    AuthorizationHeaderNotFound,
    AuthorizationHeaderWrongFormat,
    AuthorizationHeaderWrongSchemeName,
    JwtValidationFailure,
    JwtValidationUnknownFailure,
    InvalidAudience,
    AudienceNotFound,
    InvalidIssuer,
    IssuerNotFound,
    InvalidSubject,
    SubjectNotFound,
    GetOpenIdConfigurationFailure,
    DecodeOpenIdConfigurationFailure,
    GetJwksFailure,
    DecodeJwksFailure,
    KidNotFound,
    IdTokenEmpty,
    EmptyProviders,
}

/// Structured failure from the validator.
///
/// `status` is the validator's own suggestion; `on_authenticate_failed` may override it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub code: ValidationErrorCode,
    pub status: StatusCode,
    pub message: String,
}

impl ValidationError {
    pub fn new(code: ValidationErrorCode, status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            status,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    // Anything outside the validation-error shape; answered with 500
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl ValidatorError {
    pub fn code(&self) -> Option<ValidationErrorCode> {
        match self {
            ValidatorError::Validation(v) => Some(v.code),
            ValidatorError::Unexpected(_) => None,
        }
    }
}

/// External validation engine.
///
/// Implementations read the credential from `headers` (the gate has already
/// promoted any `access_token` query parameter into `Authorization`).
/// Implementations must be safe to share across requests.
#[async_trait]
pub trait TokenValidator: Send + Sync + 'static {
    async fn validate(
        &self,
        providers: &[Provider],
        headers: &HeaderMap,
    ) -> Result<(), ValidatorError>;
}
