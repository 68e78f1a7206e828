//! Service Container - Centralized service access.
//!
//! Wires repositories over one injected document store and exposes the
//! services behind their traits.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, BlogManager, BlogService, ContactInbox, ContactService,
};
use crate::domain::PasswordHasher;
use crate::infra::{BlogPostStore, ContactMessageStore, DocumentStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get blog service
    fn blog(&self) -> Arc<dyn BlogService>;

    /// Get contact service
    fn contact(&self) -> Arc<dyn ContactService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    blog_service: Arc<dyn BlogService>,
    contact_service: Arc<dyn ContactService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        blog_service: Arc<dyn BlogService>,
        contact_service: Arc<dyn ContactService>,
    ) -> Self {
        Self {
            auth_service,
            blog_service,
            contact_service,
        }
    }

    /// Build every service over a single document store
    pub fn from_store(store: Arc<dyn DocumentStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        let users = Arc::new(UserStore::new(store.clone()));
        let posts = Arc::new(BlogPostStore::new(store.clone()));
        let messages = Arc::new(ContactMessageStore::new(store));

        Self::new(
            Arc::new(Authenticator::new(users, hasher)),
            Arc::new(BlogManager::new(posts)),
            Arc::new(ContactInbox::new(messages)),
        )
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn blog(&self) -> Arc<dyn BlogService> {
        self.blog_service.clone()
    }

    fn contact(&self) -> Arc<dyn ContactService> {
        self.contact_service.clone()
    }
}
