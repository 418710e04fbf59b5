// src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::{ProductInput, ProductUpdate};
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
  let products = app_state.products.list().await?;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.products.get(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, payload))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<ProductInput>,
) -> Result<HttpResponse, AppError> {
  let product = app_state.products.create(payload.into_inner()).await?;
  info!("Created product {}.", product.id);
  Ok(HttpResponse::Created().json(product))
}

#[instrument(name = "handler::update_product", skip(app_state, path, payload), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  payload: web::Json<ProductUpdate>,
) -> Result<HttpResponse, AppError> {
  let product = app_state
    .products
    .update(path.into_inner(), payload.into_inner())
    .await?;
  info!("Updated product {}.", product.id);
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  app_state.products.delete(id).await?;
  info!("Deleted product {}.", id);
  Ok(HttpResponse::Ok().json(json!({ "message": "product deleted" })))
}
