use std::sync::Arc;

use axum::response::Response;

use crate::services::auth::{
    factory::ProvidersGetter,
    failure::on_authenticate_failed,
    provider::{Provider, ProviderError},
    validator::ValidatorError,
};

/// Turns a validator failure into the response sent to the client.
pub type ErrorHandler = Arc<dyn Fn(&ValidatorError) -> Response + Send + Sync>;

/// Validator-facing configuration: the resolved providers and the failure policy.
///
/// Immutable once built; shared by every request through `GateState`.
#[derive(Clone)]
pub struct Configuration {
    providers: Arc<[Provider]>,
    error_handler: ErrorHandler,
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("providers", &self.providers)
            .finish_non_exhaustive()
    }
}

impl Configuration {
    /// Resolves the providers once (setup-time failure is fatal for the caller)
    /// and installs the default failure policy.
    pub fn new(providers_getter: ProvidersGetter) -> Result<Self, ProviderError> {
        Self::with_error_handler(providers_getter, Arc::new(on_authenticate_failed))
    }

    pub fn with_error_handler(
        providers_getter: ProvidersGetter,
        error_handler: ErrorHandler,
    ) -> Result<Self, ProviderError> {
        let providers = providers_getter()?;

        Ok(Self {
            providers: providers.into(),
            error_handler,
        })
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn handle_error(&self, err: &ValidatorError) -> Response {
        (self.error_handler)(err)
    }
}
