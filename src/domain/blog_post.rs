//! Blog post schema.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::{Entity, EntityKind};

fn default_published() -> bool {
    true
}

/// Blog post document stored in the `blogpost` collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct BlogPost {
    /// Post title
    pub title: String,
    /// URL-friendly slug
    pub slug: String,
    /// Short summary
    pub excerpt: Option<String>,
    /// Full content (markdown supported)
    pub content: String,
    /// Author name
    pub author: String,
    /// Whether post is published
    #[serde(default = "default_published")]
    pub published: bool,
}

impl Entity for BlogPost {
    const KIND: EntityKind = EntityKind::BlogPost;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_defaults_to_true() {
        let post: BlogPost = serde_json::from_value(serde_json::json!({
            "title": "T",
            "slug": "t",
            "content": "C",
            "author": "Au",
        }))
        .unwrap();

        assert!(post.published);
        assert!(post.excerpt.is_none());
    }
}
