//! Product schema.
//!
//! Declared for completeness of the data model; no endpoint stores or
//! reads products.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::entity::{Entity, EntityKind};

fn default_in_stock() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_stock_defaults_to_true() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "title": "Widget",
            "price": 9.5,
            "category": "tools",
        }))
        .unwrap();

        assert!(product.in_stock);
        assert_eq!(Product::KIND.collection(), "product");
    }
}
