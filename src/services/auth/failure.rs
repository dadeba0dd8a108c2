//! Failure policy: validator error → HTTP response.
//!
//! The validator's suggested status is not always the right one for HTTP
//! (a missing header comes back as 400, where 401 + a Bearer challenge is
//! correct), so the codes that matter are remapped here.

use axum::{
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::services::auth::validator::{ValidationErrorCode, ValidatorError};

pub fn on_authenticate_failed(err: &ValidatorError) -> Response {
    match err {
        ValidatorError::Validation(verr) => {
            debug!(code = ?verr.code, suggested = %verr.status, message = %verr.message, "token validation failed");

            let status = match verr.code {
                ValidationErrorCode::GetOpenIdConfigurationFailure => {
                    StatusCode::SERVICE_UNAVAILABLE
                }
                ValidationErrorCode::AuthorizationHeaderNotFound => StatusCode::UNAUTHORIZED,
                _ if verr.status.is_client_error() || verr.status.is_server_error() => verr.status,
                // A non-error suggestion for a failure is a validator bug; answer 500.
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };

            // same framing as Go's http.Error: message + newline
            let mut res = plain_text(status, format!("{}\n", verr.message));
            if verr.code == ValidationErrorCode::AuthorizationHeaderNotFound {
                res.headers_mut()
                    .append(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
            }
            res
        }
        ValidatorError::Unexpected(e) => {
            error!(error = ?e, "unexpected error from token validator");
            plain_text(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn plain_text(status: StatusCode, body: String) -> Response {
    (
        status,
        [
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/plain; charset=utf-8"),
            ),
            (
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ),
        ],
        body,
    )
        .into_response()
}
