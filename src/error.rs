/*
 * Responsibility
 * - 起動時エラー (SetupError) と リクエスト単位のエラー (GateError) の定義
 * - GateError はレスポンス書き込み済みの失敗をログ用に運ぶだけ (HTTP には変換しない)
 */
use thiserror::Error;

use crate::config::ConfigError;
use crate::services::auth::{ProviderError, ValidatorError};

/// Fatal at startup: the gate must not serve traffic after one of these.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("openid gate configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("openid provider: {0}")]
    Provider(#[from] ProviderError),
}

/// Per-request failure. The response has already been written when this exists.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("token verification failed for {path} (protected by {pattern})")]
    VerificationFailed {
        path: String,
        pattern: String,
        #[source]
        source: Option<ValidatorError>,
    },
}
