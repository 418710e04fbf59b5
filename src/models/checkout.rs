// src/models/checkout.rs

use serde::Deserialize;

/// One requested (product, quantity) pair within a checkout request.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutItem {
  pub product_id: i32,
  pub quantity: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
  pub items: Vec<CheckoutItem>,
}
