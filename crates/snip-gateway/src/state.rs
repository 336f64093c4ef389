use std::sync::Arc;

use snip_core::LinkRegistry;

#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn LinkRegistry>,
    public_base_url: Option<String>,
}

impl AppState {
    pub fn new(registry: Arc<dyn LinkRegistry>) -> Self {
        Self {
            registry,
            public_base_url: None,
        }
    }

    /// Uses a fixed base URL for short links instead of the request's Host.
    pub fn with_public_base_url(mut self, public_base_url: impl Into<String>) -> Self {
        self.public_base_url = Some(public_base_url.into());
        self
    }

    pub fn registry(&self) -> &dyn LinkRegistry {
        self.registry.as_ref()
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }
}
