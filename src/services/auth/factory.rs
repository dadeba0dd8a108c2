/// Factory: build the provider set from the configured issuer and client ids.
use std::sync::Arc;

use crate::services::auth::provider::{Provider, ProviderError};

/// Deferred provider construction handed to `Configuration`.
///
/// Called once during setup. Calling it again yields an equivalent provider set.
pub type ProvidersGetter = Arc<dyn Fn() -> Result<Vec<Provider>, ProviderError> + Send + Sync>;

pub fn provider_getter(issuer: &str, client_ids: &[String]) -> ProvidersGetter {
    let issuer = issuer.to_string();
    let client_ids = client_ids.to_vec();

    // No network here: discovery happens inside the validator on first use.
    Arc::new(move || {
        let provider = Provider::new(&issuer, &client_ids)?;
        Ok(vec![provider])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn getter_yields_exactly_one_provider() {
        let get = provider_getter("https://issuer.example", &["abc".to_string()]);
        let providers = get().unwrap();
        assert_eq!(providers.len(), 1);
        assert_eq!(providers[0].client_ids(), &["abc".to_string()][..]);
    }

    #[test]
    fn getter_is_idempotent() {
        let get = provider_getter("https://issuer.example", &["abc".to_string()]);
        assert_eq!(get().unwrap(), get().unwrap());
    }

    #[test]
    fn getter_surfaces_construction_error() {
        let get = provider_getter("://broken", &["abc".to_string()]);
        assert!(get().is_err());
    }
}
