//! Domain layer - Core business entities and logic
//!
//! Entity schemas for every collection the application knows about,
//! plus password hashing. No infrastructure dependencies.

pub mod blog_post;
pub mod contact_message;
pub mod entity;
pub mod password;
pub mod product;
pub mod user;

pub use blog_post::BlogPost;
pub use contact_message::ContactMessage;
pub use entity::{Entity, EntityKind};
pub use password::{hasher_for, Argon2Hasher, PasswordHasher, SaltedSha256};
pub use product::Product;
pub use user::{User, UserRecord, UserResponse};
