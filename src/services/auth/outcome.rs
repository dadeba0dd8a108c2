use crate::services::auth::validator::ValidatorError;

/// Result sink for one authentication attempt.
///
/// `authenticate` flips `authenticated` only when the validator accepted the
/// token. The gate reads it after the validator call has returned.
#[derive(Debug, Default)]
pub struct AuthOutcome {
    authenticated: bool,
    error: Option<ValidatorError>,
}

impl AuthOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn succeed(&mut self) {
        self.authenticated = true;
    }

    pub(crate) fn fail(&mut self, err: ValidatorError) {
        self.error = Some(err);
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn error(&self) -> Option<&ValidatorError> {
        self.error.as_ref()
    }

    pub fn take_error(&mut self) -> Option<ValidatorError> {
        self.error.take()
    }
}
