// src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument};

use crate::errors::AppError;
use crate::models::CategoryInput;
use crate::state::AppState;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(
  app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
  let categories = app_state.categories.list().await?;
  info!("Fetched {} categories.", categories.len());
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::get_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn get_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.categories.get(path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::create_category", skip(app_state, payload))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  payload: web::Json<CategoryInput>,
) -> Result<HttpResponse, AppError> {
  let category = app_state.categories.create(payload.into_inner()).await?;
  info!("Created category {}.", category.id);
  Ok(HttpResponse::Created().json(category))
}

#[instrument(name = "handler::update_category", skip(app_state, path, payload), fields(category_id = %path.as_ref()))]
pub async fn update_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
  payload: web::Json<CategoryInput>,
) -> Result<HttpResponse, AppError> {
  let category = app_state
    .categories
    .update(path.into_inner(), payload.into_inner())
    .await?;
  info!("Updated category {}.", category.id);
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::delete_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn delete_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();
  app_state.categories.delete(id).await?;
  info!("Deleted category {}.", id);
  Ok(HttpResponse::Ok().json(json!({ "message": "category deleted" })))
}
