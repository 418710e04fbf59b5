// src/models/transaction.rs

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One line of a committed transaction. `product_name` and `subtotal` are
/// snapshots taken at the time of sale; later edits to the product do not
/// change them.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionDetail {
  pub id: i32,
  pub transaction_id: i32,
  pub product_id: i32,
  pub product_name: String,
  pub quantity: i32,
  pub subtotal: i64,
}

/// A committed checkout. Immutable once written; there are no update or
/// delete operations on transactions.
#[derive(Debug, Clone, Serialize)]
pub struct Transaction {
  pub id: i32,
  pub total_amount: i64,
  pub created_at: DateTime<Utc>,
  pub details: Vec<TransactionDetail>,
}
