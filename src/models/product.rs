use serde::{Deserialize, Serialize};

use crate::utils::AppError;

fn default_in_stock() -> bool {
    true
}

/// Products collection schema (collection: "product").
/// Declared for validation only — no route in this service consumes it yet.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Product {
    /// Product title
    pub title: String,

    /// Product description
    #[serde(default)]
    pub description: Option<String>,

    /// Price in dollars
    pub price: f64,

    /// Product category
    pub category: String,

    /// Whether product is in stock
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

impl Product {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.price < 0.0 {
            return Err(AppError::InvalidRequest(format!(
                "price must be non-negative, got {}",
                self.price
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_price_rejected() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "title": "Socks",
            "price": -5.0,
            "category": "apparel"
        }))
        .unwrap();
        assert!(product.validate().is_err());
    }
}
