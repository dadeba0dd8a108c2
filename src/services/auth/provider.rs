use url::Url;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ProviderError {
    #[error("invalid issuer url '{issuer}': {reason}")]
    InvalidIssuer { issuer: String, reason: String },
    #[error("unsupported issuer scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
    #[error("at least 1 client id is required")]
    NoClientIds,
    #[error("client id cannot be empty")]
    EmptyClientId,
}

/// A token issuer together with the audiences (client ids) it may issue tokens for.
///
/// Opaque to the gate: only the `TokenValidator` looks inside.
/// Discovery metadata and key material are owned by the validator, not by this handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provider {
    issuer: Url,
    client_ids: Vec<String>,
}

impl Provider {
    pub fn new(issuer: &str, client_ids: &[String]) -> Result<Self, ProviderError> {
        let url = Url::parse(issuer).map_err(|e| ProviderError::InvalidIssuer {
            issuer: issuer.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ProviderError::UnsupportedScheme(other.to_string())),
        }

        if client_ids.is_empty() {
            return Err(ProviderError::NoClientIds);
        }
        if client_ids.iter().any(|c| c.trim().is_empty()) {
            return Err(ProviderError::EmptyClientId);
        }

        Ok(Self {
            issuer: url,
            client_ids: client_ids.to_vec(),
        })
    }

    pub fn issuer(&self) -> &Url {
        &self.issuer
    }

    pub fn client_ids(&self) -> &[String] {
        &self.client_ids
    }

    /// Whether `aud` is one of the accepted client ids.
    ///
    /// For `TokenValidator` implementations checking the audience claim;
    /// the gate itself never looks at token contents.
    pub fn accepts_client(&self, aud: &str) -> bool {
        self.client_ids.iter().any(|c| c == aud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn accepts_https_issuer() {
        let p = Provider::new("https://issuer.example", &ids(&["abc", "def"])).unwrap();
        assert_eq!(p.issuer().host_str(), Some("issuer.example"));
        assert!(p.accepts_client("def"));
        assert!(!p.accepts_client("xyz"));
    }

    #[test]
    fn rejects_malformed_issuer() {
        let err = Provider::new("not a url", &ids(&["abc"])).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidIssuer { .. }));
    }

    #[test]
    fn rejects_non_http_scheme() {
        let err = Provider::new("ftp://issuer.example", &ids(&["abc"])).unwrap_err();
        assert_eq!(err, ProviderError::UnsupportedScheme("ftp".into()));
    }

    #[test]
    fn rejects_blank_client_ids() {
        assert_eq!(
            Provider::new("https://issuer.example", &[]).unwrap_err(),
            ProviderError::NoClientIds
        );
        assert_eq!(
            Provider::new("https://issuer.example", &ids(&["abc", " "])).unwrap_err(),
            ProviderError::EmptyClientId
        );
    }
}
