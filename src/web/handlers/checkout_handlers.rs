// src/web/handlers/checkout_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::CheckoutRequest;
use crate::state::AppState;

#[instrument(name = "handler::checkout", skip(app_state, payload), fields(item_count = payload.items.len()))]
pub async fn checkout_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CheckoutRequest>,
) -> Result<HttpResponse, AppError> {
  let transaction = app_state.checkout.checkout(&payload.items).await?;
  info!(
    transaction_id = transaction.id,
    total_amount = transaction.total_amount,
    "Checkout succeeded."
  );
  Ok(HttpResponse::Created().json(transaction))
}
