/*
 * Responsibility
 * - 公開 API の入口 (モジュール宣言と re-export のみ、ロジックは置かない)
 * - host アプリは setup() → middleware::auth::apply() の順で使う
 */
pub mod config;
pub mod error;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;

pub use config::{AuthConfig, ConfigError};
pub use error::{GateError, SetupError};
pub use middleware::auth::{Continuation, apply};
pub use services::auth::{
    AuthOutcome, Provider, ProviderError, TokenValidator, ValidationError, ValidationErrorCode,
    ValidatorError,
};
pub use setup::{setup, setup_from_env};
pub use state::GateState;
