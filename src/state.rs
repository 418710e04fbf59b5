// src/state.rs

use crate::config::AppConfig;
use crate::services::{CategoryService, CheckoutService, ProductService, ReportService};
use sqlx::PgPool;
use std::sync::Arc;

/// Shared application state, cloned into every actix worker. The services
/// are wired once here at startup; handlers only call them.
#[derive(Clone)]
pub struct AppState {
  pub db_pool: PgPool,
  pub config: Arc<AppConfig>,
  pub categories: CategoryService,
  pub products: ProductService,
  pub checkout: CheckoutService,
  pub reports: ReportService,
}

impl AppState {
  pub fn new(db_pool: PgPool, config: Arc<AppConfig>) -> Self {
    Self {
      categories: CategoryService::new(db_pool.clone()),
      products: ProductService::new(db_pool.clone()),
      checkout: CheckoutService::new(db_pool.clone()),
      reports: ReportService::new(db_pool.clone()),
      db_pool,
      config,
    }
  }
}
