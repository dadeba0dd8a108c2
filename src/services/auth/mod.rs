pub mod authenticate;
pub mod configuration;
pub mod factory;
pub mod failure;
pub mod outcome;
pub mod provider;
pub mod validator;

pub use authenticate::authenticate;
pub use configuration::{Configuration, ErrorHandler};
pub use factory::{ProvidersGetter, provider_getter};
pub use failure::on_authenticate_failed;
pub use outcome::AuthOutcome;
pub use provider::{Provider, ProviderError};
pub use validator::{TokenValidator, ValidationError, ValidationErrorCode, ValidatorError};
