//! Which requests need a token.
//!
//! Prefix matching over lexically cleaned paths:
//! - `/` (or an empty pattern) protects everything
//! - `/service1/` protects `/service1/` and below, but not `/service1`
//! - `/api` is a plain prefix: `/api`, `/api/x` and `/apix` all match
//!
//! The request path is percent-decoded, then cleaned (`.`/`..` and duplicate
//! slashes resolved), so `/public/../service1/x`, `/%73ervice1/x` and
//! `/service1%2Fx` are all treated as `/service1/x`.

use std::borrow::Cow;

/// First configured pattern matching `path`, in configuration order.
pub fn first_match<'a>(path: &str, patterns: &'a [String], case_sensitive: bool) -> Option<&'a str> {
    patterns
        .iter()
        .map(String::as_str)
        .find(|p| matches(path, p, case_sensitive))
}

pub fn matches(path: &str, pattern: &str, case_sensitive: bool) -> bool {
    if pattern.is_empty() || pattern == "/" {
        return true;
    }

    let path = normalize(&decode(path));
    let pattern = normalize(pattern);

    if case_sensitive {
        path.starts_with(&pattern)
    } else {
        path.to_ascii_lowercase()
            .starts_with(&pattern.to_ascii_lowercase())
    }
}

// Invalid UTF-8 after decoding is replaced, never rejected: the gate must still decide.
fn decode(path: &str) -> Cow<'_, str> {
    match urlencoding::decode(path) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Owned(
            String::from_utf8_lossy(&urlencoding::decode_binary(path.as_bytes())).into_owned(),
        ),
    }
}

// clean + keep the trailing slash (it decides directory vs. prefix semantics)
fn normalize(p: &str) -> String {
    let mut cleaned = clean(p);
    if p.ends_with('/') && !cleaned.ends_with('/') {
        cleaned.push('/');
    }
    cleaned
}

fn clean(p: &str) -> String {
    if p.is_empty() {
        return ".".to_string();
    }

    let rooted = p.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for seg in p.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                if segments.last().is_some_and(|s| *s != "..") {
                    segments.pop();
                } else if !rooted {
                    segments.push("..");
                }
            }
            s => segments.push(s),
        }
    }

    let joined = segments.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
