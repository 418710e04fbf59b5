// src/models/product.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sellable item. `price` is in the minor currency unit; `stock` is set
/// when the product is created and after that only ever decremented by the
/// checkout engine.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
  pub id: i32,
  pub name: String,
  pub price: i64,
  pub stock: i32,
}

/// Create payload. A new product starts with zero stock unless stated.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductInput {
  pub name: String,
  pub price: i64,
  #[serde(default)]
  pub stock: i32,
}

/// Update payload. Carries no `stock` field: once the row exists, stock is
/// written only by the checkout engine.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductUpdate {
  pub name: String,
  pub price: i64,
}
