// src/models/product.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,           // Store-assigned identifier
    pub name: String,
    pub description: String,
    pub price: f64,           // Non-negative, shown with two decimals
    pub images: Vec<String>,  // Image URIs, first one is the cover
    pub sizes: Vec<String>,   // Size labels (e.g. "50ml")
}

impl Product {
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Detail page price, always two decimals.
    pub fn display_price(&self) -> String {
        format!("₹{:.2}", self.price)
    }

    /// Card price on the product grid, printed as stored (`₹2499`, `₹1799.5`).
    pub fn card_price(&self) -> String {
        format!("₹{}", self.price)
    }
}

/// A product as it appears in a seed file, before the store assigns an id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
}

impl NewProduct {
    /// Checks the constraints the API relies on when rendering a product.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("product name is empty".to_string());
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!("product '{}' has invalid price {}", self.name, self.price));
        }
        if self.images.is_empty() {
            return Err(format!("product '{}' has no images", self.name));
        }
        Ok(())
    }

    pub fn with_id(&self, id: String) -> Product {
        Product {
            id,
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            images: self.images.clone(),
            sizes: self.sizes.clone(),
        }
    }
}
