//! OpenID bearer-token gate for configured path prefixes.
//!
//! Per request:
//! 1. `access_token` query parameter → `Authorization: Bearer ...`
//! 2. first configured path pattern that matches (none → pass through)
//! 3. one validator call; `AuthOutcome` says whether it succeeded
//! 4. success → next handler, failure → the failure response, next is never called

use axum::{
    Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::GateError;
use crate::middleware::auth::{path::first_match, token::promote_query_token};
use crate::services::auth::{AuthOutcome, authenticate};
use crate::state::GateState;

/// Install the gate on `router`.
///
/// 例：
/// ```ignore
/// let gate = openid_gate::setup(AuthConfig::from_env()?, validator)?;
/// let app = openid_gate::middleware::auth::openid::apply(app, gate);
/// ```
pub fn apply<S>(router: Router<S>, state: GateState) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(middleware::from_fn_with_state(state, openid_auth_middleware))
}

/// What happened to the request after the gate.
pub enum Continuation {
    /// The next handler ran; its response, untouched.
    Forwarded(Response),
    /// Authentication failed and `response` is final. Next handler was not called.
    Written { response: Response, error: GateError },
}

impl IntoResponse for Continuation {
    fn into_response(self) -> Response {
        match self {
            Continuation::Forwarded(res) => res,
            Continuation::Written { response, .. } => response,
        }
    }
}

pub async fn openid_auth_middleware(
    State(state): State<GateState>,
    req: Request,
    next: Next,
) -> Response {
    match gate(&state, req, next).await {
        Continuation::Forwarded(res) => res,
        Continuation::Written { response, error } => {
            warn!(error = ?error, status = %response.status(), "request rejected by openid gate");
            response
        }
    }
}

pub async fn gate(state: &GateState, mut req: Request, next: Next) -> Continuation {
    promote_query_token(&mut req);

    let path = req.uri().path().to_string();
    let Some(pattern) = first_match(
        &path,
        state.config.paths(),
        state.config.case_sensitive_paths(),
    ) else {
        debug!(path = %path, "no protected path matched; passing through");
        return Continuation::Forwarded(next.run(req).await);
    };

    let mut outcome = AuthOutcome::new();
    let written = authenticate(
        state.validator.as_ref(),
        &state.auth,
        &mut outcome,
        req.headers(),
    )
    .await;

    if outcome.is_authenticated() {
        debug!(path = %path, pattern = %pattern, "token accepted");
        return Continuation::Forwarded(next.run(req).await);
    }

    // The validator always leaves an error behind on failure; 401 only guards a misbehaving one.
    let response = written.unwrap_or_else(|| StatusCode::UNAUTHORIZED.into_response());

    Continuation::Written {
        response,
        error: GateError::VerificationFailed {
            path,
            pattern: pattern.to_string(),
            source: outcome.take_error(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>(_: &T) {}

    // `from_fn_with_state` only accepts middleware whose future is `Send`.
    #[allow(dead_code)]
    fn middleware_future_is_send(state: GateState, req: Request, next: Next) {
        let fut = openid_auth_middleware(State(state), req, next);
        assert_send(&fut);
    }

    #[allow(dead_code)]
    fn gate_future_is_send(state: GateState, req: Request, next: Next) {
        let fut = async move { gate(&state, req, next).await };
        assert_send(&fut);
    }
}
