//! Repository layer - Data access abstraction
//!
//! One typed repository per entity kind an endpoint touches, so collection
//! names never appear as free strings outside the domain.

mod base;
mod blog_post_repository;
mod contact_message_repository;
mod user_repository;

pub use base::Documents;
pub use blog_post_repository::{BlogPostRepository, BlogPostStore};
pub use contact_message_repository::{ContactMessageRepository, ContactMessageStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use blog_post_repository::MockBlogPostRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use contact_message_repository::MockContactMessageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
