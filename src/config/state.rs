// Application state shared by every handler

use std::sync::Arc;

use crate::api::assets::store::AssetStore;
use crate::config::environment::EnvironmentVariables;
use crate::exceptions::handler::{ExceptionHandler, RenderOptions};
use crate::utils::lang::Translator;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub exceptions: ExceptionHandler,
    pub assets: AssetStore,
}

impl AppState {
    /// Builds the state from an explicit configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        let translator: Translator = Translator::new(environment.locale.clone());
        let options: RenderOptions = RenderOptions {
            login_path: environment.login_path.to_string(),
            strict_status_codes: environment.strict_http_status,
        };

        Self {
            environment: Arc::new(environment),
            exceptions: ExceptionHandler::new(translator, options),
            assets: AssetStore::seeded(),
        }
    }

    /// Builds the state from the process-wide environment singleton
    pub fn from_env() -> Self {
        Self::new(EnvironmentVariables::instance().clone())
    }

    /// Replaces the exception handler (custom reporter, policy...)
    pub fn with_exception_handler(mut self, exceptions: ExceptionHandler) -> Self {
        self.exceptions = exceptions;
        self
    }
}
