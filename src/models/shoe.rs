use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::utils::AppError;

/// Collection holding the shoe catalog
pub const SHOE_COLLECTION: &str = "shoeproduct";

fn default_rating() -> f64 {
    4.5
}

/// A color option with display name and hex code
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Color {
    pub name: String,
    pub hex: String,
}

/// Sneaker product schema (collection: "shoeproduct").
/// The `slug` is a URL-friendly lookup key — uniqueness is a catalog
/// convention, not enforced at insert time.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ShoeProduct {
    /// Product title
    pub title: String,

    /// URL-friendly identifier used for detail lookups
    pub slug: String,

    /// Brand name
    pub brand: String,

    /// Detailed description
    pub description: String,

    /// Price in USD
    pub price: f64,

    /// Average rating, 0 to 5
    #[serde(default = "default_rating")]
    pub rating: f64,

    /// Image URLs, in display order
    #[serde(default)]
    pub images: Vec<String>,

    /// Available colors
    #[serde(default)]
    pub colors: Vec<Color>,

    /// Available sizes, US scale
    #[serde(default)]
    pub sizes: Vec<f64>,

    /// Stock per size (key is the size as string)
    #[serde(default)]
    pub stock: HashMap<String, i64>,

    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
}

impl ShoeProduct {
    /// Field-constraint check applied at the API boundary before any
    /// store interaction.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.price < 0.0 {
            return Err(AppError::InvalidRequest(format!(
                "price must be non-negative, got {}",
                self.price
            )));
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(AppError::InvalidRequest(format!(
                "rating must be between 0 and 5, got {}",
                self.rating
            )));
        }
        Ok(())
    }
}
