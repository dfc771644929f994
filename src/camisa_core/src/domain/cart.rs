//! Shopping cart.
//!
//! Every added jersey is its own line item with a fresh id, so the same product can sit in
//! the cart twice in different sizes and be removed one line at a time.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::catalog::{Price, Product};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("size {size} is not available for {product_id}")]
    UnknownSize { product_id: String, size: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub cart_id: Uuid,
    pub product_id: String,
    pub name: String,
    pub size: String,
    pub unit_price: Price,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Adds one unit of `product` in `size`, priced at its current effective price.
    pub fn add(&mut self, product: &Product, size: &str) -> Result<Uuid, CartError> {
        if !product.offers_size(size) {
            return Err(CartError::UnknownSize {
                product_id: product.id.clone(),
                size: size.to_string(),
            });
        }

        let cart_id = Uuid::new_v4();
        self.items.push(CartItem {
            cart_id,
            product_id: product.id.clone(),
            name: product.name.clone(),
            size: size.to_string(),
            unit_price: product.effective_price(),
        });
        Ok(cart_id)
    }

    /// Removes the line item `cart_id`. Returns false if it was not in the cart.
    pub fn remove(&mut self, cart_id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.cart_id != cart_id);
        self.items.len() != before
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of line items.
    pub fn quantity(&self) -> usize {
        self.items.len()
    }

    pub fn total(&self) -> Price {
        self.items.iter().map(|item| item.unit_price).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
