//! `?access_token=...` → `Authorization: Bearer ...`
//!
//! The validator only reads the Authorization header, so a token passed as a
//! query parameter is promoted into the header before anything else runs.

use axum::http::{HeaderValue, Request, header};
use url::form_urlencoded;

pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// First `access_token` value in the query string, form-decoded. Empty counts as absent.
pub fn query_token<B>(req: &Request<B>) -> Option<String> {
    let query = req.uri().query()?;

    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == ACCESS_TOKEN_PARAM)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// Best effort. Returns `true` if the header was (over)written.
pub fn promote_query_token<B>(req: &mut Request<B>) -> bool {
    let Some(token) = query_token(req) else {
        return false;
    };

    match HeaderValue::from_str(&format!("Bearer {token}")) {
        Ok(value) => {
            req.headers_mut().insert(header::AUTHORIZATION, value);
            tracing::debug!("promoted access_token query parameter to Authorization header");
            true
        }
        Err(_) => {
            tracing::debug!("access_token query parameter is not a valid header value; ignored");
            false
        }
    }
}
