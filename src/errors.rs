// src/errors.rs

use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  #[error("Invalid Input: {0}")]
  InvalidInput(String),

  #[error("Checkout Error: product id {0} not found")]
  ProductNotFound(i32),

  #[error("Checkout Error: insufficient stock for product id {0}")]
  InsufficientStock(i32),

  #[error("Database Error: {0}")]
  Sqlx(#[from] sqlx::Error),

  #[error("Configuration Error: {0}")]
  Config(String),
}

impl ResponseError for AppError {
  fn error_response(&self) -> HttpResponse {
    // Log the full error when it's turned into a response
    tracing::error!(application_error = %self, "Responding with error");
    match self {
      AppError::NotFound(m) => HttpResponse::NotFound().json(json!({"error": m})),
      AppError::InvalidInput(m) => HttpResponse::BadRequest().json(json!({"error": m})),
      AppError::ProductNotFound(id) => {
        HttpResponse::NotFound().json(json!({"error": format!("product id {} not found", id)}))
      }
      AppError::InsufficientStock(id) => {
        HttpResponse::Conflict().json(json!({"error": format!("insufficient stock for product id {}", id)}))
      }
      // Never leak query or connection detail to the client.
      AppError::Sqlx(_) => HttpResponse::InternalServerError().json(json!({"error": "Database operation failed"})),
      AppError::Config(m) => {
        HttpResponse::InternalServerError().json(json!({"error": "Configuration issue", "detail": m}))
      }
    }
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
