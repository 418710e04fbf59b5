// src/services/checkout.rs

//! The checkout engine. Turns a list of requested line items into one
//! committed sale, or fails with no effect at all.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{info, instrument};

use crate::errors::{AppError, Result};
use crate::models::{CheckoutItem, Transaction, TransactionDetail};

/// A line that has been priced and stock-checked inside the database
/// transaction, waiting for its generated detail id.
struct PendingLine {
  product_id: i32,
  product_name: String,
  quantity: i32,
  subtotal: i64,
}

#[derive(Clone)]
pub struct CheckoutService {
  pool: PgPool,
}

impl CheckoutService {
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }

  /// Runs the whole checkout inside a single database transaction: price
  /// lookups, stock decrements, the transaction row and its detail rows.
  /// Any error returns before the commit, and dropping the uncommitted
  /// `sqlx::Transaction` rolls everything back, so a failed checkout leaves
  /// no trace in the store.
  #[instrument(
    name = "checkout_service::checkout",
    skip(self, items),
    fields(item_count = items.len())
  )]
  pub async fn checkout(&self, items: &[CheckoutItem]) -> Result<Transaction> {
    validate_items(items)?;

    let mut tx = self.pool.begin().await?;

    let mut total_amount: i64 = 0;
    let mut lines: Vec<PendingLine> = Vec::with_capacity(items.len());

    for item in items {
      let product: Option<(String, i64)> =
        sqlx::query_as("SELECT name, price FROM products WHERE id = $1")
          .bind(item.product_id)
          .fetch_optional(&mut *tx)
          .await?;
      let (product_name, price) = product.ok_or(AppError::ProductNotFound(item.product_id))?;

      // A pathological price or quantity fails the checkout instead of
      // wrapping the total.
      let subtotal = price.checked_mul(i64::from(item.quantity)).ok_or_else(|| {
        AppError::InvalidInput(format!("subtotal overflow for product id {}", item.product_id))
      })?;
      total_amount = total_amount
        .checked_add(subtotal)
        .ok_or_else(|| AppError::InvalidInput("transaction total overflow".to_string()))?;

      // The guard rides in the predicate: the decrement only applies while
      // enough stock remains, evaluated under the row lock. Zero rows
      // affected means the level would have gone negative.
      let updated =
        sqlx::query("UPDATE products SET stock = stock - $1 WHERE id = $2 AND stock >= $1")
          .bind(item.quantity)
          .bind(item.product_id)
          .execute(&mut *tx)
          .await?;
      if updated.rows_affected() == 0 {
        return Err(AppError::InsufficientStock(item.product_id));
      }

      lines.push(PendingLine {
        product_id: item.product_id,
        product_name,
        quantity: item.quantity,
        subtotal,
      });
    }

    let (transaction_id, created_at): (i32, DateTime<Utc>) =
      sqlx::query_as("INSERT INTO transactions (total_amount) VALUES ($1) RETURNING id, created_at")
        .bind(total_amount)
        .fetch_one(&mut *tx)
        .await?;

    let mut details = Vec::with_capacity(lines.len());
    for line in lines {
      let (detail_id,): (i32,) = sqlx::query_as(
        "INSERT INTO transaction_details (transaction_id, product_id, quantity, subtotal) \
         VALUES ($1, $2, $3, $4) RETURNING id",
      )
      .bind(transaction_id)
      .bind(line.product_id)
      .bind(line.quantity)
      .bind(line.subtotal)
      .fetch_one(&mut *tx)
      .await?;

      details.push(TransactionDetail {
        id: detail_id,
        transaction_id,
        product_id: line.product_id,
        product_name: line.product_name,
        quantity: line.quantity,
        subtotal: line.subtotal,
      });
    }

    tx.commit().await?;

    info!(transaction_id, total_amount, "Checkout committed.");

    Ok(Transaction {
      id: transaction_id,
      total_amount,
      created_at,
      details,
    })
  }
}

/// Rejects requests that must never reach the store: an empty item list and
/// non-positive quantities.
fn validate_items(items: &[CheckoutItem]) -> Result<()> {
  if items.is_empty() {
    return Err(AppError::InvalidInput(
      "checkout requires at least one item".to_string(),
    ));
  }
  for item in items {
    if item.quantity <= 0 {
      return Err(AppError::InvalidInput(format!(
        "quantity must be positive for product id {}",
        item.product_id
      )));
    }
  }
  Ok(())
}
