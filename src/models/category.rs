// src/models/category.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// The backing column for `name` is the legacy `nama`; every query aliases it
// (`nama AS name`) so the struct and the JSON stay in English.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
  pub id: i32,
  pub name: String,
  pub description: String,
}

/// Create/update payload. `description` may be omitted and defaults to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryInput {
  pub name: String,
  #[serde(default)]
  pub description: String,
}
