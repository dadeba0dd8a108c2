/*
 * Responsibility
 * - middleware に紐づける共有コンテキスト (GateState)
 *   - config: AuthConfig, auth: Configuration, validator: TokenValidator
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 * - 起動後は読み取り専用なので lock は不要
 */
use std::sync::Arc;

use crate::config::AuthConfig;
use crate::services::auth::{Configuration, TokenValidator};

#[derive(Clone)]
pub struct GateState {
    pub config: Arc<AuthConfig>,
    pub auth: Arc<Configuration>,
    pub validator: Arc<dyn TokenValidator>,
}

impl std::fmt::Debug for GateState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GateState")
            .field("config", &self.config)
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}

impl GateState {
    pub fn new(
        config: Arc<AuthConfig>,
        auth: Arc<Configuration>,
        validator: Arc<dyn TokenValidator>,
    ) -> Self {
        Self {
            config,
            auth,
            validator,
        }
    }
}
