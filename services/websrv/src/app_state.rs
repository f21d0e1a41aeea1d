//! Shared application state

use std::sync::Arc;

use pepmix_calc::InputValidator;

use crate::config::Config;

/// State shared by all request handlers.
///
/// Everything here is immutable after startup; clones are pointer copies.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub validator: Arc<InputValidator>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let validator = InputValidator::new(config.constraints.clone());
        Self {
            config: Arc::new(config),
            validator: Arc::new(validator),
        }
    }
}
