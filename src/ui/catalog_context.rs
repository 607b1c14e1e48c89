use std::sync::Arc;

use dioxus::prelude::*;

use crate::catalog::{CatalogClient, SearchCapability};
use crate::config::Config;

/// Shared handle to the product search service, usable from any component.
#[derive(Clone)]
pub struct SharedCatalog {
    inner: Arc<dyn SearchCapability>,
}

impl SharedCatalog {
    pub fn new(capability: Arc<dyn SearchCapability>) -> Self {
        Self { inner: capability }
    }

    pub fn get(&self) -> &dyn SearchCapability {
        self.inner.as_ref()
    }
}

impl PartialEq for SharedCatalog {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Provider component to make the catalog available throughout the app
#[component]
pub fn CatalogProvider(children: Element) -> Element {
    let config = use_context::<Config>();
    use_context_provider(|| {
        SharedCatalog::new(Arc::new(CatalogClient::new(config.api_url.clone())))
    });

    rsx! {
        {children}
    }
}

/// Hook to access the shared catalog from components
pub fn use_catalog() -> SharedCatalog {
    use_context::<SharedCatalog>()
}
