/*
 * Responsibility
 * - 認証ゲートの設定 (issuer / clientid / path) を保持する
 * - 環境変数や serde 経由の読み込み
 * - 設定値のバリデーション (不足なら起動失敗)
 */
use std::fmt;

use serde::Deserialize;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str),
    EmptyIssuer,
    NoClientIds,
    NoPaths,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "missing configuration: {}", key),
            ConfigError::Invalid(key) => write!(f, "invalid configuration: {}", key),
            ConfigError::EmptyIssuer => write!(f, "issuer cannot be empty"),
            ConfigError::NoClientIds => write!(f, "at least 1 clientid needs to be set up"),
            ConfigError::NoPaths => write!(f, "at least 1 path needs to be set up"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Process-lifetime settings of the gate.
///
/// Built once at startup and shared read-only by every request.
/// Fields are private so the non-empty invariants cannot be broken after construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawAuthConfig")]
pub struct AuthConfig {
    issuer: String,
    client_ids: Vec<String>,
    paths: Vec<String>,
    case_sensitive_paths: bool,
}

// Unvalidated shape used by serde; `TryFrom` funnels it through `AuthConfig::new`.
#[derive(Debug, Deserialize)]
struct RawAuthConfig {
    #[serde(default)]
    issuer: String,
    #[serde(default, alias = "clientids")]
    client_ids: Vec<String>,
    #[serde(default)]
    paths: Vec<String>,
    #[serde(default = "default_case_sensitive")]
    case_sensitive_paths: bool,
}

fn default_case_sensitive() -> bool {
    true
}

impl TryFrom<RawAuthConfig> for AuthConfig {
    type Error = ConfigError;

    fn try_from(raw: RawAuthConfig) -> Result<Self, Self::Error> {
        Ok(AuthConfig::new(raw.issuer, raw.client_ids, raw.paths)?
            .with_case_sensitive_paths(raw.case_sensitive_paths))
    }
}

impl AuthConfig {
    pub fn new(
        issuer: impl Into<String>,
        client_ids: Vec<String>,
        paths: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let issuer = issuer.into().trim().to_string();
        if issuer.is_empty() {
            return Err(ConfigError::EmptyIssuer);
        }
        if client_ids.is_empty() {
            return Err(ConfigError::NoClientIds);
        }
        if paths.is_empty() {
            return Err(ConfigError::NoPaths);
        }

        Ok(Self {
            issuer,
            client_ids,
            paths,
            case_sensitive_paths: true,
        })
    }

    pub fn with_case_sensitive_paths(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_paths = case_sensitive;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let issuer =
            std::env::var("OPENID_ISSUER").map_err(|_| ConfigError::Missing("OPENID_ISSUER"))?;

        let client_ids = split_list(
            &std::env::var("OPENID_CLIENT_IDS")
                .map_err(|_| ConfigError::Missing("OPENID_CLIENT_IDS"))?,
        );

        let paths = split_list(
            &std::env::var("OPENID_PATHS").map_err(|_| ConfigError::Missing("OPENID_PATHS"))?,
        );

        let case_sensitive_paths = match std::env::var("OPENID_CASE_SENSITIVE_PATHS") {
            Ok(v) => parse_bool(&v).ok_or(ConfigError::Invalid("OPENID_CASE_SENSITIVE_PATHS"))?,
            Err(_) => true,
        };

        Ok(Self::new(issuer, client_ids, paths)?.with_case_sensitive_paths(case_sensitive_paths))
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    pub fn client_ids(&self) -> &[String] {
        &self.client_ids
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn case_sensitive_paths(&self) -> bool {
        self.case_sensitive_paths
    }
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_rejects_empty_issuer() {
        let err = AuthConfig::new("  ", strings(&["abc"]), strings(&["/a/"])).unwrap_err();
        assert_eq!(err, ConfigError::EmptyIssuer);
        assert_eq!(err.to_string(), "issuer cannot be empty");
    }

    #[test]
    fn new_rejects_missing_client_ids_and_paths() {
        assert_eq!(
            AuthConfig::new("https://issuer.example", vec![], strings(&["/a/"])).unwrap_err(),
            ConfigError::NoClientIds
        );
        assert_eq!(
            AuthConfig::new("https://issuer.example", strings(&["abc"]), vec![]).unwrap_err(),
            ConfigError::NoPaths
        );
    }

    #[test]
    fn new_keeps_path_order_and_defaults_to_case_sensitive() {
        let cfg = AuthConfig::new(
            "https://issuer.example",
            strings(&["abc", "def"]),
            strings(&["/service2/", "/service1/"]),
        )
        .unwrap();

        assert_eq!(cfg.issuer(), "https://issuer.example");
        assert_eq!(cfg.client_ids(), &strings(&["abc", "def"])[..]);
        assert_eq!(cfg.paths(), &strings(&["/service2/", "/service1/"])[..]);
        assert!(cfg.case_sensitive_paths());
    }

    #[test]
    fn deserialize_runs_validation() {
        let ok: AuthConfig = serde_json::from_value(serde_json::json!({
            "issuer": "https://issuer.example",
            "clientids": ["abc"],
            "paths": ["/service1/"],
            "case_sensitive_paths": false,
        }))
        .unwrap();
        assert!(!ok.case_sensitive_paths());
        assert_eq!(ok.client_ids(), &strings(&["abc"])[..]);

        let err = serde_json::from_value::<AuthConfig>(serde_json::json!({
            "issuer": "https://issuer.example",
            "client_ids": ["abc"],
        }))
        .unwrap_err();
        assert!(err.to_string().contains("at least 1 path"));
    }

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(split_list(" a, ,b ,"), strings(&["a", "b"]));
    }

    #[test]
    fn parse_bool_accepts_common_spellings() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
