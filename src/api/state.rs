//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and the
//! process-wide store handle.

use std::sync::Arc;

use crate::domain::PasswordHasher;
use crate::infra::{DocumentStore, UnavailableStore};
use crate::services::{AuthService, BlogService, ContactService, ServiceContainer, Services};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Blog service
    pub blog_service: Arc<dyn BlogService>,
    /// Contact service
    pub contact_service: Arc<dyn ContactService>,
    /// Store handle; `None` when no database is configured
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    /// Build services over `store`.
    ///
    /// Without a store every data endpoint fails with the
    /// "database not available" store error.
    pub fn from_store(
        store: Option<Arc<dyn DocumentStore>>,
        hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        let backend = store
            .clone()
            .unwrap_or_else(|| Arc::new(UnavailableStore) as Arc<dyn DocumentStore>);
        let services = Services::from_store(backend, hasher);

        Self::from_container(&services, store)
    }

    /// Create application state from an existing service container.
    pub fn from_container(
        container: &dyn ServiceContainer,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Self {
        Self {
            auth_service: container.auth(),
            blog_service: container.blog(),
            contact_service: container.contact(),
            store,
        }
    }
}
