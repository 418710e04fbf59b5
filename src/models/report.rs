// src/models/report.rs

use serde::Serialize;
use sqlx::FromRow;

/// Aggregate over all transactions in a reporting window. A window with no
/// transactions reports zeros and a `null` best seller, never an error.
#[derive(Debug, Clone, Serialize)]
pub struct SalesReport {
  pub total_revenue: i64,
  pub total_transaction_count: i64,
  pub best_selling_product: Option<BestSellingProduct>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct BestSellingProduct {
  pub name: String,
  pub quantity_sold: i64,
}
