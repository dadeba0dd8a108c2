use axum::{http::HeaderMap, response::Response};

use crate::services::auth::{
    configuration::Configuration, outcome::AuthOutcome, validator::TokenValidator,
};

/// Runs one authentication attempt against the validator.
///
/// - success: `outcome.succeed()` is called and `None` is returned (nothing written yet)
/// - failure: the error is recorded in `outcome` and the error handler's response is returned
///
/// Callers decide continuation from `outcome` alone, after this returns.
/// Only the headers are borrowed: the request body is not `Sync`, and holding
/// `&Request<Body>` across the await would make the middleware future `!Send`.
pub async fn authenticate(
    validator: &dyn TokenValidator,
    config: &Configuration,
    outcome: &mut AuthOutcome,
    headers: &HeaderMap,
) -> Option<Response> {
    match validator.validate(config.providers(), headers).await {
        Ok(()) => {
            outcome.succeed();
            None
        }
        Err(err) => {
            let response = config.handle_error(&err);
            outcome.fail(err);
            Some(response)
        }
    }
}
