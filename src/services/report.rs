// src/services/report.rs

//! Read-only sales aggregates. The queries never fail on an empty window:
//! totals COALESCE to zero and the best-seller lookup simply returns no row.

use chrono::NaiveDate;
use sqlx::PgPool;

use crate::errors::Result;
use crate::models::{BestSellingProduct, SalesReport};

#[derive(Clone)]
pub struct ReportService {
  pool: PgPool,
}

impl ReportService {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Aggregates over the transactions created on `date`.
  pub async fn for_day(&self, date: NaiveDate) -> Result<SalesReport> {
    let (total_revenue, total_transaction_count): (i64, i64) = sqlx::query_as(
      "SELECT COALESCE(SUM(total_amount), 0)::BIGINT, COUNT(*) \
       FROM transactions WHERE DATE(created_at) = $1",
    )
    .bind(date)
    .fetch_one(&self.pool)
    .await?;

    let best_selling_product = sqlx::query_as::<_, BestSellingProduct>(
      "SELECT p.name, SUM(td.quantity) AS quantity_sold \
       FROM transaction_details td \
       JOIN products p ON td.product_id = p.id \
       JOIN transactions t ON td.transaction_id = t.id \
       WHERE DATE(t.created_at) = $1 \
       GROUP BY p.name \
       ORDER BY quantity_sold DESC \
       LIMIT 1",
    )
    .bind(date)
    .fetch_optional(&self.pool)
    .await?;

    Ok(SalesReport {
      total_revenue,
      total_transaction_count,
      best_selling_product,
    })
  }

  /// Aggregates over the transactions created between `start` and `end`,
  /// both inclusive. An inverted range matches nothing and yields the same
  /// zero-valued report as an empty day.
  pub async fn for_range(&self, start: NaiveDate, end: NaiveDate) -> Result<SalesReport> {
    let (total_revenue, total_transaction_count): (i64, i64) = sqlx::query_as(
      "SELECT COALESCE(SUM(total_amount), 0)::BIGINT, COUNT(*) \
       FROM transactions WHERE DATE(created_at) BETWEEN $1 AND $2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(&self.pool)
    .await?;

    let best_selling_product = sqlx::query_as::<_, BestSellingProduct>(
      "SELECT p.name, SUM(td.quantity) AS quantity_sold \
       FROM transaction_details td \
       JOIN products p ON td.product_id = p.id \
       JOIN transactions t ON td.transaction_id = t.id \
       WHERE DATE(t.created_at) BETWEEN $1 AND $2 \
       GROUP BY p.name \
       ORDER BY quantity_sold DESC \
       LIMIT 1",
    )
    .bind(start)
    .bind(end)
    .fetch_optional(&self.pool)
    .await?;

    Ok(SalesReport {
      total_revenue,
      total_transaction_count,
      best_selling_product,
    })
  }
}
