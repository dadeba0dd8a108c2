/*
 * Responsibility
 * - AuthConfig 読み込み → Provider 生成 → GateState 組み立て
 * - host アプリの起動シーケンスから明示的に呼ぶ (グローバル登録はしない)
 * - ここで失敗したら起動失敗 (リクエスト時まで遅延させない)
 */
use std::sync::Arc;

use tracing::info;

use crate::config::AuthConfig;
use crate::error::SetupError;
use crate::services::auth::{Configuration, TokenValidator, provider_getter};
use crate::state::GateState;

pub fn setup(config: AuthConfig, validator: Arc<dyn TokenValidator>) -> Result<GateState, SetupError> {
    let auth = Configuration::new(provider_getter(config.issuer(), config.client_ids()))?;

    info!(
        issuer = %config.issuer(),
        client_ids = config.client_ids().len(),
        protected_paths = ?config.paths(),
        "openid authentication gate initialized"
    );

    Ok(GateState::new(Arc::new(config), Arc::new(auth), validator))
}

pub fn setup_from_env(validator: Arc<dyn TokenValidator>) -> Result<GateState, SetupError> {
    setup(AuthConfig::from_env()?, validator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::auth::{Provider, ValidatorError};
    use async_trait::async_trait;
    use axum::http::HeaderMap;

    struct AcceptAll;

    #[async_trait]
    impl TokenValidator for AcceptAll {
        async fn validate(&self, _: &[Provider], _: &HeaderMap) -> Result<(), ValidatorError> {
            Ok(())
        }
    }

    fn config(issuer: &str) -> AuthConfig {
        AuthConfig::new(issuer, vec!["abc".into()], vec!["/service1/".into()]).unwrap()
    }

    #[test]
    fn builds_state_with_one_provider() {
        let state = setup(config("https://issuer.example"), Arc::new(AcceptAll)).unwrap();
        assert_eq!(state.auth.providers().len(), 1);
        assert_eq!(
            state.auth.providers()[0].issuer().as_str(),
            "https://issuer.example/"
        );
        assert_eq!(state.config.paths(), &["/service1/".to_string()][..]);
    }

    #[test]
    fn malformed_issuer_is_fatal() {
        let err = setup(config("issuer without scheme"), Arc::new(AcceptAll)).unwrap_err();
        assert!(matches!(err, SetupError::Provider(_)));
    }
}
