//! Infrastructure layer - External systems integration
//!
//! - Document store adapters (MongoDB, in-memory, unavailable)
//! - Typed repositories, one per entity kind in use

pub mod repositories;
pub mod store;

pub use repositories::{
    BlogPostRepository, BlogPostStore, ContactMessageRepository, ContactMessageStore, Documents,
    UserRepository, UserStore,
};
pub use store::{DocumentStore, MemoryStore, MongoStore, UnavailableStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockBlogPostRepository, MockContactMessageRepository, MockUserRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use store::MockDocumentStore;
