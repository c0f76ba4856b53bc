// HTTP server shared state

use std::sync::Arc;

use crate::core::iam::IamFacade;

/// Application state shared across all HTTP handlers.
///
/// A thin wrapper around the facade — handlers never reach past it into a
/// repository or the policy engine directly.
#[derive(Clone)]
pub struct AppState {
    pub facade: Arc<IamFacade>,
}

impl AppState {
    pub fn new(facade: Arc<IamFacade>) -> Self {
        Self { facade }
    }
}
