//! Entity kinds and the trait tying a schema to its collection.

use serde::Serialize;
use validator::Validate;

/// Closed set of entity kinds persisted by the application.
///
/// Each kind owns exactly one collection, named by lowercasing the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    User,
    BlogPost,
    ContactMessage,
    Product,
}

impl EntityKind {
    pub const ALL: [EntityKind; 4] = [
        EntityKind::User,
        EntityKind::BlogPost,
        EntityKind::ContactMessage,
        EntityKind::Product,
    ];

    /// Entity kind name
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::User => "User",
            EntityKind::BlogPost => "BlogPost",
            EntityKind::ContactMessage => "ContactMessage",
            EntityKind::Product => "Product",
        }
    }

    /// Collection holding documents of this kind
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::User => "user",
            EntityKind::BlogPost => "blogpost",
            EntityKind::ContactMessage => "contactmessage",
            EntityKind::Product => "product",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A validated, serializable record stored in its kind's collection.
pub trait Entity: Serialize + Validate + Send + Sync {
    const KIND: EntityKind;
}
